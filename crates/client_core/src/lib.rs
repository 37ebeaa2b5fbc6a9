use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    domain::Username,
    error::ApiErrorBody,
    resume::{Repository, ResumePayload},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub mod config;
pub mod controller;
pub mod platform;

pub use config::{load_settings, ClientSettings, SettingsError};
pub use controller::{Completion, FetchTicket, Notice, RequestState, ResumeController};
pub use platform::{MemoryPlatform, Platform, PlatformError, PrintJob};

pub const DEFAULT_RESUME_ERROR: &str = "Failed to fetch GitHub user data";
pub const DEFAULT_PROJECTS_ERROR: &str = "Failed to fetch GitHub repositories";
/// Shown when a transport failure carries no usable description.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Failed to fetch user data. Please try again.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("resume api base url '{0}' cannot carry path segments")]
    InvalidBaseUrl(String),
}

impl FetchError {
    /// Text surfaced inline next to the search entry.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            TRANSPORT_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Picks the best human-readable message out of a non-2xx response body.
///
/// Order: the JSON `message` field, then the raw body text, then
/// `default_message`.
pub fn error_message_from_body(body: &str, default_message: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.message() {
            return message.to_string();
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        default_message.to_string()
    } else {
        raw.to_string()
    }
}

#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn fetch_resume(&self, username: &Username) -> Result<ResumePayload, FetchError>;
    async fn fetch_projects(&self, username: &Username) -> Result<Vec<Repository>, FetchError>;
}

/// HTTP client for the resume backend.
///
/// `base_url` already includes the `/api` prefix, e.g. `http://localhost:8000/api`.
#[derive(Debug, Clone)]
pub struct ResumeClient {
    http: Client,
    base_url: Url,
}

impl ResumeClient {
    pub fn new(base_url: Url) -> Result<Self, FetchError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: Url) -> Result<Self, FetchError> {
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn resume_url(&self, username: &Username) -> Url {
        self.endpoint(username, "resume")
    }

    pub fn projects_url(&self, username: &Username) -> Url {
        self.endpoint(username, "projects")
    }

    fn endpoint(&self, username: &Username, resource: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            // The trailing empty segment keeps the backend's trailing slash.
            segments
                .pop_if_empty()
                .extend(["github", "user", username.as_str(), resource, ""]);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        default_message: &str,
    ) -> Result<T, FetchError> {
        debug!(%url, "requesting resume api");
        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&body, default_message);
            warn!(%url, %status, %message, "resume api returned an error");
            return Err(FetchError::Api { status, message });
        }

        let body = response.text().await.map_err(FetchError::Transport)?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            endpoint: url.path().to_string(),
            source,
        })
    }
}

#[async_trait]
impl ResumeApi for ResumeClient {
    async fn fetch_resume(&self, username: &Username) -> Result<ResumePayload, FetchError> {
        self.get_json(self.resume_url(username), DEFAULT_RESUME_ERROR)
            .await
    }

    async fn fetch_projects(&self, username: &Username) -> Result<Vec<Repository>, FetchError> {
        self.get_json(self.projects_url(username), DEFAULT_PROJECTS_ERROR)
            .await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
