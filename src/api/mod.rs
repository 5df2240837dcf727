//! # API Module
//!
//! Talks to the site backend: video metadata lookups and background form
//! delivery. The engine consumes the [`VideoApi`] trait so tests can swap
//! the HTTP client for a stub.

pub mod client;
pub mod cookies;
pub mod models;
pub mod traits;

pub use client::ApiClient;
pub use cookies::{cookie_value, csrf_token};
pub use models::{ApplicationForm, ContactForm, FormOutcome, FormTarget, VideoKind, VideoPayload};
pub use traits::VideoApi;

pub use crate::error::ApiError;
