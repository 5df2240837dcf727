//! # Video Embed Module
//!
//! Resolves video URLs and uploaded files into embeddable markup: provider
//! detection (YouTube, Vimeo, generic), ID extraction, and iframe/video tag
//! construction.

pub mod markup;
pub mod resolver;
pub mod source;

pub use markup::render;
pub use resolver::{extract_vimeo_id, extract_youtube_id, Provider};
pub use source::VideoSource;
