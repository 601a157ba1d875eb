//! HTTP client for the Q&A API: `/menu`, `/questions/{subject}`, `/answer?question=`.

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::messages::{self, Reply};

/// Client error. `Api` carries the server's own `error` text unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Api(String),
}

/// Q&A API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base: Url,
}

impl Client {
    /// Build a client for `base_url` (e.g. `https://chatbot-hnls.vercel.app`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", base.scheme())));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".into()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetch the list of subjects.
    pub async fn menu(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["menu"]);
        let value = self.get_json(url).await?;
        into_result(messages::labels_from_json(&value))
    }

    /// Fetch the questions of `subject`.
    pub async fn questions(&self, subject: &str) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint(&["questions", subject]);
        let value = self.get_json(url).await?;
        into_result(messages::labels_from_json(&value))
    }

    /// Fetch the answer to `question`.
    pub async fn answer(&self, question: &str) -> Result<String, ClientError> {
        let mut url = self.endpoint(&["answer"]);
        url.query_pairs_mut().append_pair("question", question);
        let value = self.get_json(url).await?;
        into_result(messages::answer_from_json(&value))
    }

    /// Base URL with `segments` appended, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always writable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, url: Url) -> Result<Value, ClientError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ClientError::Decode(format!("invalid JSON in response (HTTP {}): {}", status, e))
        })
    }
}

fn into_result<T>(decoded: Result<Reply<T>, String>) -> Result<T, ClientError> {
    match decoded.map_err(ClientError::Decode)? {
        Reply::Data(data) => Ok(data),
        Reply::Error(message) => Err(ClientError::Api(message)),
    }
}
