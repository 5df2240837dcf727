//! The seam between the page engine and the remote API.

use async_trait::async_trait;

use crate::error::ApiError;

use super::models::{FormOutcome, FormTarget, VideoKind, VideoPayload};

/// Remote API surface the page engine talks to.
///
/// `ApiClient` implements this over HTTP; engine tests drive it with
/// in-memory stubs instead.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Fetch the playable video metadata for one record
    async fn fetch_video(&self, kind: VideoKind, id: u64) -> Result<VideoPayload, ApiError>;

    /// Deliver a form submission as multipart form data
    async fn submit_form(
        &self,
        target: FormTarget,
        fields: Vec<(&'static str, String)>,
    ) -> Result<FormOutcome, ApiError>;
}
