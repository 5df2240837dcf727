//! # Vitrina
//!
//! Headless presentation engine for marketing landing pages: video embeds,
//! an autoplaying carousel, background API loaders, form delivery, and the
//! decorative layers behind them.
//!
//! The library models the behavior of a course platform's landing pages
//! without any DOM: renderers subscribe to state and markup, the engine
//! drives loading and navigation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitrina::{
//!     api::{ApiClient, VideoKind},
//!     config::Config,
//!     engine::PageEngine,
//!     page::PageHooks,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let api = ApiClient::new(&config.api);
//!
//! let mut engine = PageEngine::new(config, PageHooks::default(), Box::new(api));
//! engine.play_video(VideoKind::Course, 3).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`embed`] - Video URL resolution and embed markup
//! - [`slider`] - Autoplaying carousel with its timer machinery
//! - [`api`] - Remote API client, wire models, and cookie parsing
//! - [`engine`] - Page engine wiring modal, toasts, forms, and carousel
//! - [`notify`] - Toast rack and loading overlay
//! - [`decor`] - Particles, parallax, and animated counters
//! - [`config`] - Configuration management
//!
//! ## Custom API Transports
//!
//! The engine talks to anything implementing the [`VideoApi`](api::VideoApi)
//! trait, which keeps tests and offline tooling off the network:
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use vitrina::api::{ApiError, FormOutcome, FormTarget, VideoApi, VideoKind, VideoPayload};
//!
//! struct CannedApi;
//!
//! #[async_trait]
//! impl VideoApi for CannedApi {
//!     async fn fetch_video(&self, _kind: VideoKind, _id: u64) -> Result<VideoPayload, ApiError> {
//!         Ok(VideoPayload::default())
//!     }
//!
//!     async fn submit_form(
//!         &self,
//!         _target: FormTarget,
//!         _fields: Vec<(&'static str, String)>,
//!     ) -> Result<FormOutcome, ApiError> {
//!         Ok(FormOutcome::default())
//!     }
//! }
//! ```

pub mod api;
pub mod config;
pub mod decor;
pub mod embed;
pub mod engine;
pub mod error;
pub mod notify;
pub mod page;
pub mod slider;

// Re-export commonly used types for convenience
pub use crate::{
    api::{ApiClient, VideoApi},
    config::Config,
    engine::PageEngine,
    error::{Result, VitrinaError},
};
