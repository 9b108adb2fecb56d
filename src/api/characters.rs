use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{CastEntry, Character, RelatedSubject};
use crate::types::ImageType;

#[derive(Debug, Clone, Copy)]
pub struct CharacterApi<'a> {
    client: &'a BangumiClient,
    character_id: u32,
}

impl<'a> CharacterApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, character_id: u32) -> Self {
        Self {
            client,
            character_id,
        }
    }

    pub async fn get(&self) -> Result<Character> {
        self.client
            .get(format!("/v0/characters/{}", self.character_id))
            .send()
            .await
    }

    /// Redirecting image URL; see [`SubjectApi::image`](crate::api::SubjectApi::image).
    pub fn image(&self, size: ImageType) -> String {
        self.client.absolute_url(&format!(
            "/v0/characters/{}/image?type={}",
            self.character_id,
            size.as_str()
        ))
    }

    pub async fn subjects(&self) -> Result<Vec<RelatedSubject>> {
        self.client
            .get(format!("/v0/characters/{}/subjects", self.character_id))
            .send()
            .await
    }

    /// Voice actors and other persons behind the character, per subject.
    pub async fn persons(&self) -> Result<Vec<CastEntry>> {
        self.client
            .get(format!("/v0/characters/{}/persons", self.character_id))
            .send()
            .await
    }
}
