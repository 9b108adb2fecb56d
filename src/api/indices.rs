use serde_json::Value;

use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{Index, IndexSubject, Paged};
use crate::params::{AddIndexSubject, EditIndex, EditIndexSubject, IndexSubjectsQuery};

const PREFIX: &str = "/v0/indices";

#[derive(Debug, Clone, Copy)]
pub struct IndicesApi<'a> {
    client: &'a BangumiClient,
}

impl<'a> IndicesApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient) -> Self {
        Self { client }
    }

    /// Creates an empty index owned by the current user.
    pub async fn create(&self) -> Result<Index> {
        self.client.post(PREFIX).send().await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IndexApi<'a> {
    client: &'a BangumiClient,
    index_id: u32,
}

impl<'a> IndexApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, index_id: u32) -> Self {
        Self { client, index_id }
    }

    pub async fn get(&self) -> Result<Index> {
        self.client
            .get(format!("{PREFIX}/{}", self.index_id))
            .send()
            .await
    }

    pub async fn edit(&self, edit: &EditIndex) -> Result<Index> {
        self.client
            .put(format!("{PREFIX}/{}", self.index_id))
            .json(edit)?
            .send()
            .await
    }

    pub async fn subjects(&self, query: &IndexSubjectsQuery) -> Result<Paged<IndexSubject>> {
        self.client
            .get(format!("{PREFIX}/{}/subjects", self.index_id))
            .query(query)?
            .send()
            .await
    }

    pub async fn add_subject(&self, entry: &AddIndexSubject) -> Result<Value> {
        self.client
            .post(format!("{PREFIX}/{}/subjects", self.index_id))
            .json(entry)?
            .send_value()
            .await
    }

    pub async fn put_subject(&self, subject_id: u32, edit: &EditIndexSubject) -> Result<Value> {
        self.client
            .put(format!("{PREFIX}/{}/subjects/{subject_id}", self.index_id))
            .json(edit)?
            .send_value()
            .await
    }

    pub async fn delete_subject(&self, subject_id: u32) -> Result<Value> {
        self.client
            .delete(format!("{PREFIX}/{}/subjects/{subject_id}", self.index_id))
            .send_value()
            .await
    }

    /// Adds the index to the current user's collected indices.
    pub async fn collect(&self) -> Result<Value> {
        self.client
            .post(format!("{PREFIX}/{}/collect", self.index_id))
            .send_value()
            .await
    }

    pub async fn uncollect(&self) -> Result<Value> {
        self.client
            .delete(format!("{PREFIX}/{}/collect", self.index_id))
            .send_value()
            .await
    }
}
