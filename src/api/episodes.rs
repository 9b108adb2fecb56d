use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{Episode, Paged};
use crate::params::EpisodesQuery;

#[derive(Debug, Clone, Copy)]
pub struct EpisodesApi<'a> {
    client: &'a BangumiClient,
}

impl<'a> EpisodesApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &EpisodesQuery) -> Result<Paged<Episode>> {
        self.client.get("/v0/episodes").query(query)?.send().await
    }

    pub async fn episode(&self, episode_id: u32) -> Result<Episode> {
        self.client
            .get(format!("/v0/episodes/{episode_id}"))
            .send()
            .await
    }
}
