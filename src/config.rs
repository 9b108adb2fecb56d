use std::env;
use tracing::{debug, info};

pub const BANGUMI_BASE: &str = "https://api.bgm.tv";
pub const USER_AGENT: &str = concat!(
    "Rewrite0/BangumiApi/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/Rewrite0/BangumiApi)"
);

const ACCESS_TOKEN_VAR: &str = "BANGUMI_ACCESS_TOKEN";
const BASE_URL_VAR: &str = "BANGUMI_BASE_URL";

/// Fixed settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    access_token: Option<String>,
    user_agent: String,
    send_user_agent: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BANGUMI_BASE.to_string(),
            access_token: None,
            user_agent: USER_AGENT.to_string(),
            // Browsers refuse to let scripts set User-Agent.
            send_user_agent: !cfg!(target_arch = "wasm32"),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `.env` when present, then reads `BANGUMI_ACCESS_TOKEN` and `BANGUMI_BASE_URL`.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {:?}", path),
            Err(e) => debug!("No .env file loaded ({}) - relying on environment", e),
        }
        let mut config = Self::default();
        if let Ok(token) = env::var(ACCESS_TOKEN_VAR) {
            config = config.with_access_token(token);
        }
        if let Ok(base) = env::var(BASE_URL_VAR) {
            if !base.trim().is_empty() {
                info!("Using Bangumi base URL override {}", base.trim());
                config = config.with_base_url(base.trim());
            }
        }
        config
    }

    /// Tokens can be generated at https://next.bgm.tv/demo/access-token.
    /// A blank token leaves the client anonymous.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn send_user_agent(mut self, send: bool) -> Self {
        self.send_user_agent = send;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub(crate) fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(2);
        if self.send_user_agent {
            headers.push(("User-Agent".to_string(), self.user_agent.clone()));
        }
        if let Some(token) = &self.access_token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }
}
