use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{RelatedCharacter, RelatedPerson, Subject, SubjectRelation};
use crate::types::SubjectImageType;

#[derive(Debug, Clone, Copy)]
pub struct SubjectApi<'a> {
    client: &'a BangumiClient,
    subject_id: u32,
}

impl<'a> SubjectApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, subject_id: u32) -> Self {
        Self { client, subject_id }
    }

    pub async fn get(&self) -> Result<Subject> {
        self.client
            .get(format!("/v0/subjects/{}", self.subject_id))
            .send()
            .await
    }

    /// URL of the cover image. The endpoint answers with a redirect, so the
    /// URL is meant to be followed directly rather than fetched as JSON.
    pub fn image(&self, size: SubjectImageType) -> String {
        self.client.absolute_url(&format!(
            "/v0/subjects/{}/image?type={}",
            self.subject_id,
            size.as_str()
        ))
    }

    pub async fn persons(&self) -> Result<Vec<RelatedPerson>> {
        self.client
            .get(format!("/v0/subjects/{}/persons", self.subject_id))
            .send()
            .await
    }

    pub async fn characters(&self) -> Result<Vec<RelatedCharacter>> {
        self.client
            .get(format!("/v0/subjects/{}/characters", self.subject_id))
            .send()
            .await
    }

    /// Sequels, prequels, adaptations and other related subjects.
    pub async fn relations(&self) -> Result<Vec<SubjectRelation>> {
        self.client
            .get(format!("/v0/subjects/{}/subjects", self.subject_id))
            .send()
            .await
    }
}
