//! HTTP client for the video and form endpoints.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

use super::models::{FormOutcome, FormTarget, VideoKind, VideoPayload};
use super::traits::VideoApi;

/// Marks requests as AJAX for the backend
const REQUESTED_WITH: &str = "XMLHttpRequest";

/// Reqwest-backed [`VideoApi`] implementation.
///
/// Carries no request timeout: a hung request keeps the caller's loading
/// overlay up, matching the page this models. Responses are parsed as JSON
/// regardless of HTTP status, since the backend ships its failure payloads
/// with 404 and 400 statuses.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl ApiClient {
    /// Build a client against the configured base URL
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            csrf_token: None,
        }
    }

    /// Attach the csrftoken read from the page's cookie header
    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf_token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static(REQUESTED_WITH));

        if let Some(token) = &self.csrf_token {
            match HeaderValue::from_str(token) {
                Ok(value) => {
                    headers.insert("X-CSRFToken", value);
                }
                Err(_) => warn!("csrf token contains invalid header characters, skipping"),
            }
        }

        headers
    }
}

#[async_trait]
impl VideoApi for ApiClient {
    async fn fetch_video(&self, kind: VideoKind, id: u64) -> Result<VideoPayload, ApiError> {
        let url = self.url(&kind.endpoint(id));
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(ApiError::from)?;

        let payload = response
            .json::<VideoPayload>()
            .await
            .map_err(ApiError::from)?;
        Ok(payload)
    }

    async fn submit_form(
        &self,
        target: FormTarget,
        fields: Vec<(&'static str, String)>,
    ) -> Result<FormOutcome, ApiError> {
        let url = self.url(target.endpoint());
        debug!("POST {} ({} fields)", url, fields.len());

        let mut form = reqwest::multipart::Form::new();
        for (key, value) in fields {
            form = form.text(key, value);
        }

        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)?;

        let outcome = response
            .json::<FormOutcome>()
            .await
            .map_err(ApiError::from)?;
        Ok(outcome)
    }
}
