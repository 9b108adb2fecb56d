//! Typed async client for the Bangumi (bgm.tv) REST API.
//!
//! ```no_run
//! # async fn run() -> bangumi_api::Result<()> {
//! use bangumi_api::{BangumiClient, ClientConfig, SubjectImageType};
//!
//! let client = BangumiClient::new(ClientConfig::new().with_access_token("token"))?;
//! let subject = client.subject(8).get().await?;
//! let cover = client.subject(8).image(SubjectImageType::Large);
//! println!("{} -> {}", subject.name, cover);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod transport;
pub mod types;

pub use client::BangumiClient;
pub use config::{ClientConfig, BANGUMI_BASE, USER_AGENT};
pub use error::{BangumiError, ErrorResponse, Result};
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
pub use types::{
    AvatarType, CollectionType, EpisodeCollectionType, EpisodeType, ImageType, ResponseGroup,
    SearchSort, SubjectImageType, SubjectType,
};
