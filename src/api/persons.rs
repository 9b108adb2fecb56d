use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{CastEntry, Person, RelatedSubject};
use crate::types::ImageType;

#[derive(Debug, Clone, Copy)]
pub struct PersonApi<'a> {
    client: &'a BangumiClient,
    person_id: u32,
}

impl<'a> PersonApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, person_id: u32) -> Self {
        Self { client, person_id }
    }

    pub async fn get(&self) -> Result<Person> {
        self.client
            .get(format!("/v0/persons/{}", self.person_id))
            .send()
            .await
    }

    pub fn image(&self, size: ImageType) -> String {
        self.client.absolute_url(&format!(
            "/v0/persons/{}/image?type={}",
            self.person_id,
            size.as_str()
        ))
    }

    pub async fn subjects(&self) -> Result<Vec<RelatedSubject>> {
        self.client
            .get(format!("/v0/persons/{}/subjects", self.person_id))
            .send()
            .await
    }

    pub async fn characters(&self) -> Result<Vec<CastEntry>> {
        self.client
            .get(format!("/v0/persons/{}/characters", self.person_id))
            .send()
            .await
    }
}
