use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{
    domain::{SignupRequest, SubmissionResult},
    error::SubmissionError,
    protocol::JSON_CONTENT_TYPE,
};
use tracing::{debug, warn};

pub mod controller;
pub mod settings;

pub use controller::{
    events::{Key, UiEvent},
    ui_state::{Panel, PanelVisibility, UiState},
    workflow::{SignupController, SubmissionOutcome, WorkflowState},
};
pub use settings::{load_settings, Settings, SettingsError, DEFAULT_ENDPOINT};

/// Sends one signup to the waitlist endpoint.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, request: &SignupRequest) -> Result<SubmissionResult, SubmissionError>;
}

pub struct WaitlistClient {
    http: Client,
    endpoint: String,
}

impl WaitlistClient {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        // Cookies set by the endpoint are replayed on later submissions.
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> reqwest::Result<Self> {
        Self::new(settings.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for WaitlistClient {
    async fn submit(&self, request: &SignupRequest) -> Result<SubmissionResult, SubmissionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "signup request did not reach server");
                SubmissionError::unreachable(err)
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "signup response received");

        let body = response
            .bytes()
            .await
            .map_err(SubmissionError::invalid_response)?;
        let body: serde_json::Value =
            serde_json::from_slice(&body).map_err(SubmissionError::invalid_response)?;

        if !status.is_success() {
            return Err(SubmissionError::rejected(status.as_u16(), body));
        }

        Ok(SubmissionResult(body))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
