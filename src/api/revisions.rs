use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{Paged, Revision, RevisionDetail};
use crate::params::Paging;

const PREFIX: &str = "/v0/revisions";

#[derive(Debug, Clone, Copy)]
pub struct RevisionsApi<'a> {
    client: &'a BangumiClient,
}

impl<'a> RevisionsApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient) -> Self {
        Self { client }
    }

    async fn list(
        &self,
        kind: &str,
        id_param: &str,
        id: u32,
        paging: &Paging,
    ) -> Result<Paged<Revision>> {
        self.client
            .get(format!("{PREFIX}/{kind}"))
            .param(id_param, id)
            .query(paging)?
            .send()
            .await
    }

    pub async fn persons(&self, person_id: u32, paging: &Paging) -> Result<Paged<Revision>> {
        self.list("persons", "person_id", person_id, paging).await
    }

    pub async fn characters(&self, character_id: u32, paging: &Paging) -> Result<Paged<Revision>> {
        self.list("characters", "character_id", character_id, paging)
            .await
    }

    pub async fn subjects(&self, subject_id: u32, paging: &Paging) -> Result<Paged<Revision>> {
        self.list("subjects", "subject_id", subject_id, paging).await
    }

    pub async fn episodes(&self, episode_id: u32, paging: &Paging) -> Result<Paged<Revision>> {
        self.list("episodes", "episode_id", episode_id, paging).await
    }
}

/// One revision, looked up under the entity kind it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct RevisionApi<'a> {
    client: &'a BangumiClient,
    revision_id: u32,
}

impl<'a> RevisionApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, revision_id: u32) -> Self {
        Self {
            client,
            revision_id,
        }
    }

    async fn fetch(&self, kind: &str) -> Result<RevisionDetail> {
        self.client
            .get(format!("{PREFIX}/{kind}/{}", self.revision_id))
            .send()
            .await
    }

    pub async fn persons(&self) -> Result<RevisionDetail> {
        self.fetch("persons").await
    }

    pub async fn characters(&self) -> Result<RevisionDetail> {
        self.fetch("characters").await
    }

    pub async fn subjects(&self) -> Result<RevisionDetail> {
        self.fetch("subjects").await
    }

    pub async fn episodes(&self) -> Result<RevisionDetail> {
        self.fetch("episodes").await
    }
}
