use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::{
    CharacterApi, CollectionsApi, EpisodesApi, IndexApi, IndicesApi, PersonApi, RevisionApi,
    RevisionsApi, SearchApi, SubjectApi, UserApi,
};
use crate::config::ClientConfig;
use crate::error::{body_to_value, BangumiError, ErrorResponse, Result};
use crate::models::{CalendarDay, User};
use crate::transport::{ApiRequest, ReqwestTransport, Transport};

/// Entry point for every endpoint.
///
/// Cloning is cheap; clones share the configuration and transport.
#[derive(Clone)]
pub struct BangumiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for BangumiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BangumiClient")
            .field("base_url", &self.config.base_url())
            .field("authenticated", &self.config.access_token().is_some())
            .finish()
    }
}

impl BangumiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn anonymous() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Daily airing schedule, one entry per weekday.
    pub async fn calendar(&self) -> Result<Vec<CalendarDay>> {
        self.get("/calendar").send().await
    }

    /// The user the access token belongs to.
    pub async fn me(&self) -> Result<User> {
        self.get("/v0/me").send().await
    }

    pub fn search<'a>(&'a self, keyword: &'a str) -> SearchApi<'a> {
        SearchApi::new(self, keyword)
    }

    pub fn subject(&self, subject_id: u32) -> SubjectApi<'_> {
        SubjectApi::new(self, subject_id)
    }

    pub fn episodes(&self) -> EpisodesApi<'_> {
        EpisodesApi::new(self)
    }

    pub fn character(&self, character_id: u32) -> CharacterApi<'_> {
        CharacterApi::new(self, character_id)
    }

    pub fn person(&self, person_id: u32) -> PersonApi<'_> {
        PersonApi::new(self, person_id)
    }

    /// `username` may be a UID only for users who never set a username.
    pub fn user<'a>(&'a self, username: &'a str) -> UserApi<'a> {
        UserApi::new(self, username)
    }

    /// Collections of the user owning the access token.
    pub fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }

    /// Edit history listings, filtered by entity id.
    pub fn revisions(&self) -> RevisionsApi<'_> {
        RevisionsApi::new(self)
    }

    /// A single historical revision.
    pub fn revision(&self, revision_id: u32) -> RevisionApi<'_> {
        RevisionApi::new(self, revision_id)
    }

    /// Index creation; use [`BangumiClient::index`] for an existing index.
    pub fn indices(&self) -> IndicesApi<'_> {
        IndicesApi::new(self)
    }

    pub fn index(&self, index_id: u32) -> IndexApi<'_> {
        IndexApi::new(self, index_id)
    }

    /// Absolute URL for redirecting endpoints such as images and avatars.
    pub(crate) fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    pub(crate) fn get(&self, path: impl Into<String>) -> Call<'_> {
        Call::new(self, Method::GET, path.into())
    }

    pub(crate) fn post(&self, path: impl Into<String>) -> Call<'_> {
        Call::new(self, Method::POST, path.into())
    }

    pub(crate) fn put(&self, path: impl Into<String>) -> Call<'_> {
        Call::new(self, Method::PUT, path.into())
    }

    pub(crate) fn patch(&self, path: impl Into<String>) -> Call<'_> {
        Call::new(self, Method::PATCH, path.into())
    }

    pub(crate) fn delete(&self, path: impl Into<String>) -> Call<'_> {
        Call::new(self, Method::DELETE, path.into())
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Vec<u8>> {
        debug!(
            method = %request.method,
            path = %request.path,
            query = request.query.len(),
            "Bangumi request"
        );
        let path = request.path.clone();
        let res = self.transport.send(request).await?;
        debug!(status = res.status, path = %path, "Bangumi response");

        if !res.is_success() {
            warn!("Bangumi API returned {} for {}", res.status, path);
            return Err(BangumiError::Status(ErrorResponse::new(
                res.status,
                res.status_text,
                &res.body,
            )));
        }
        Ok(res.body)
    }
}

/// One pending request. Built by the namespace methods, consumed by `send`.
pub(crate) struct Call<'a> {
    client: &'a BangumiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl<'a> Call<'a> {
    fn new(client: &'a BangumiClient, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends the set fields of `params` as query pairs.
    pub(crate) fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self> {
        self.query.extend(query_pairs(params)?);
        Ok(self)
    }

    pub(crate) fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(BangumiError::Encode)?);
        Ok(self)
    }

    fn into_request(self) -> (&'a BangumiClient, ApiRequest) {
        let client = self.client;
        let request = ApiRequest {
            method: self.method,
            base_url: client.config.base_url().to_string(),
            path: self.path,
            query: self.query,
            headers: client.config.default_headers(),
            body: self.body,
        };
        (client, request)
    }

    /// Sends the request and decodes the body as `T`.
    pub(crate) async fn send<T: DeserializeOwned>(self) -> Result<T> {
        let (client, request) = self.into_request();
        let path = request.path.clone();
        let body = client.dispatch(request).await?;
        serde_json::from_slice(&body).map_err(|source| BangumiError::Decode { path, source })
    }

    /// Sends the request and returns the body as raw JSON, `null` when empty.
    pub(crate) async fn send_value(self) -> Result<Value> {
        let (client, request) = self.into_request();
        let body = client.dispatch(request).await?;
        Ok(body_to_value(&body))
    }
}

/// Flattens a params struct into query pairs. `null` fields are dropped.
fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params).map_err(BangumiError::Encode)?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(BangumiError::Encode(serde::ser::Error::custom(format!(
                "query parameters must serialize to an object, got {}",
                other
            ))))
        }
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
