use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{Paged, User, UserSubjectCollection};
use crate::params::UserCollectionsQuery;
use crate::types::AvatarType;

#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a BangumiClient,
    username: &'a str,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, username: &'a str) -> Self {
        Self { client, username }
    }

    fn prefix(&self) -> String {
        format!("/v0/users/{}", urlencoding::encode(self.username))
    }

    pub async fn info(&self) -> Result<User> {
        self.client.get(self.prefix()).send().await
    }

    /// Redirecting avatar URL, meant to be followed directly.
    pub fn avatar(&self, size: AvatarType) -> String {
        self.client
            .absolute_url(&format!("{}/avatar?type={}", self.prefix(), size.as_str()))
    }

    /// Private collections are only visible with the owner's access token.
    pub async fn collections(
        &self,
        query: &UserCollectionsQuery,
    ) -> Result<Paged<UserSubjectCollection>> {
        self.client
            .get(format!("{}/collections", self.prefix()))
            .query(query)?
            .send()
            .await
    }

    pub async fn collection(&self, subject_id: u32) -> Result<UserSubjectCollection> {
        self.client
            .get(format!("{}/collections/{subject_id}", self.prefix()))
            .send()
            .await
    }
}
