//! Fetch one Bangumi resource and log a few of its fields.
//! Usage:
//!   cargo run --bin bangumi_probe -- subject <id>
//!   cargo run --bin bangumi_probe -- character <id>
//!   cargo run --bin bangumi_probe -- person <id>
//!   cargo run --bin bangumi_probe -- user <username>
//!   cargo run --bin bangumi_probe -- search <keyword>
//!   cargo run --bin bangumi_probe -- calendar
//!   cargo run --bin bangumi_probe -- me
//! BANGUMI_ACCESS_TOKEN and BANGUMI_BASE_URL are read from the environment (.env supported).

use anyhow::{bail, Context, Result};
use bangumi_api::params::{Paging, SearchSubjectsParams};
use bangumi_api::{AvatarType, BangumiClient, ImageType, SearchSort, SubjectImageType};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --bin bangumi_probe -- <subject|character|person|user|search|calendar|me> [arg]"
    );
    std::process::exit(2);
}

fn parse_id(arg: Option<String>) -> Result<u32> {
    let raw = arg.unwrap_or_else(|| usage());
    raw.trim()
        .parse()
        .with_context(|| format!("'{}' is not a numeric id", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| usage());
    let client = BangumiClient::from_env().context("Failed to build Bangumi client")?;
    info!(
        "Bangumi probe: {} (authenticated: {})",
        kind,
        client.config().access_token().is_some()
    );

    match kind.as_str() {
        "subject" => {
            let id = parse_id(args.next())?;
            let api = client.subject(id);
            let subject = api.get().await.context("Subject lookup failed")?;
            info!("id: {}", subject.id);
            info!("type: {:?}", subject.subject_type);
            info!("name: {}", subject.name);
            info!("name_cn: {}", subject.name_cn);
            info!("date: {}", subject.date.as_deref().unwrap_or("<none>"));
            info!("episodes: {}", subject.total_episodes);
            info!("score: {} (rank {})", subject.rating.score, subject.rating.rank);
            info!("cover: {}", api.image(SubjectImageType::Large));
            let characters = api.characters().await.context("Subject characters failed")?;
            info!(
                "characters: {:?}",
                characters.iter().take(5).map(|c| &c.name).collect::<Vec<_>>()
            );
        }
        "character" => {
            let id = parse_id(args.next())?;
            let api = client.character(id);
            let character = api.get().await.context("Character lookup failed")?;
            info!("id: {}", character.id);
            info!("name: {}", character.name);
            info!("gender: {}", character.gender.as_deref().unwrap_or("<none>"));
            info!("image: {}", api.image(ImageType::Medium));
            for cast in api.persons().await.context("Character persons failed")? {
                info!("voiced by {} in {}", cast.name, cast.subject_name);
            }
        }
        "person" => {
            let id = parse_id(args.next())?;
            let api = client.person(id);
            let person = api.get().await.context("Person lookup failed")?;
            info!("id: {}", person.id);
            info!("name: {}", person.name);
            info!("career: {:?}", person.career);
            info!("image: {}", api.image(ImageType::Medium));
        }
        "user" => {
            let username = args.next().unwrap_or_else(|| usage());
            let api = client.user(&username);
            let user = api.info().await.context("User lookup failed")?;
            info!("id: {}", user.id);
            info!("username: {}", user.username);
            info!("nickname: {}", user.nickname);
            info!("avatar: {}", api.avatar(AvatarType::Large));
        }
        "search" => {
            let keyword = args.next().unwrap_or_else(|| usage());
            let params = SearchSubjectsParams {
                sort: Some(SearchSort::Match),
                filter: None,
            };
            let page = client
                .search(&keyword)
                .subjects(&params, &Paging::new(10, 0))
                .await
                .context("Subject search failed")?;
            info!("total: {}", page.total);
            for hit in page.data {
                info!("{} {} ({})", hit.id, hit.name, hit.name_cn);
            }
        }
        "calendar" => {
            for day in client.calendar().await.context("Calendar lookup failed")? {
                info!("{}: {} subjects", day.weekday.en, day.items.len());
            }
        }
        "me" => {
            let me = client.me().await.context("Current user lookup failed")?;
            info!("id: {}", me.id);
            info!("username: {}", me.username);
        }
        other => bail!("unknown resource kind '{}'", other),
    }

    Ok(())
}
