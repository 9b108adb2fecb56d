use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

/// A fully-formed request, described as plain data so any transport can send it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub base_url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Base URL and path, without the query string.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back whatever the server answered.
///
/// Non-2xx statuses are responses, not errors; only failures to complete the
/// exchange belong in `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build Bangumi HTTP client")?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = request.url();
        let mut builder = self.client.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = builder
            .send()
            .await
            .with_context(|| format!("Bangumi request to {} failed", url))?;
        let status = res.status();
        let body = res
            .bytes()
            .await
            .with_context(|| format!("Failed to read Bangumi response body from {}", url))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ApiRequest {
        ApiRequest {
            method: Method::GET,
            base_url: "https://api.bgm.tv".to_string(),
            path: "/v0/episodes".to_string(),
            query: vec![
                ("subject_id".to_string(), "8".to_string()),
                ("limit".to_string(), "10".to_string()),
            ],
            headers: vec![("User-Agent".to_string(), "test/1.0".to_string())],
            body: None,
        }
    }

    #[test]
    fn url_excludes_query() {
        assert_eq!(request().url(), "https://api.bgm.tv/v0/episodes");
    }

    #[test]
    fn lookups_find_query_and_headers() {
        let req = request();
        assert_eq!(req.query_param("limit"), Some("10"));
        assert_eq!(req.query_param("offset"), None);
        assert_eq!(req.header("user-agent"), Some("test/1.0"));
    }

    #[test]
    fn success_range_is_2xx() {
        let mut res = RawResponse {
            status: 204,
            status_text: "No Content".to_string(),
            body: Vec::new(),
        };
        assert!(res.is_success());
        res.status = 302;
        assert!(!res.is_success());
    }
}
