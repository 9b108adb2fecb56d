use serde_json::Value;

use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{Paged, UserEpisodeCollection};
use crate::params::{
    CollectionEpisodesQuery, PatchEpisodesCollection, PatchSubjectCollection,
    PutEpisodeCollection,
};
use crate::types::EpisodeCollectionType;

const PREFIX: &str = "/v0/users/-/collections";

/// Collections of the authenticated user. Every call needs an access token.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsApi<'a> {
    client: &'a BangumiClient,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient) -> Self {
        Self { client }
    }

    /// Updates the collection state of a subject. Episode progress of non-book
    /// subjects should go through [`CollectionsApi::patch_episodes_in_subject`].
    pub async fn patch_subject(
        &self,
        subject_id: u32,
        patch: &PatchSubjectCollection,
    ) -> Result<Value> {
        self.client
            .patch(format!("{PREFIX}/{subject_id}"))
            .json(patch)?
            .send_value()
            .await
    }

    pub async fn episodes_in_subject(
        &self,
        subject_id: u32,
        query: &CollectionEpisodesQuery,
    ) -> Result<Paged<UserEpisodeCollection>> {
        self.client
            .get(format!("{PREFIX}/{subject_id}/episodes"))
            .query(query)?
            .send()
            .await
    }

    pub async fn patch_episodes_in_subject(
        &self,
        subject_id: u32,
        patch: &PatchEpisodesCollection,
    ) -> Result<Value> {
        self.client
            .patch(format!("{PREFIX}/{subject_id}/episodes"))
            .json(patch)?
            .send_value()
            .await
    }

    pub async fn episode(&self, episode_id: u32) -> Result<UserEpisodeCollection> {
        self.client
            .get(format!("{PREFIX}/-/episodes/{episode_id}"))
            .send()
            .await
    }

    pub async fn put_episode(
        &self,
        episode_id: u32,
        collection_type: EpisodeCollectionType,
    ) -> Result<Value> {
        self.client
            .put(format!("{PREFIX}/-/episodes/{episode_id}"))
            .json(&PutEpisodeCollection { collection_type })?
            .send_value()
            .await
    }
}
