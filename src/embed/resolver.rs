//! Provider detection and video ID extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The four YouTube URL shapes the page accepts, tried in order.
    static ref YOUTUBE_PATTERNS: [Regex; 4] = [
        Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"youtube\.com/watch\?.*[&?]v=([a-zA-Z0-9_-]{11})").unwrap(),
    ];
    static ref VIMEO_PATTERN: Regex =
        Regex::new(r"(?i)vimeo\.com.*(?:videos|video|channels|)/(\d+)").unwrap();
}

/// Which player a remote URL should load in
#[derive(Debug, Clone, PartialEq)]
pub enum Provider {
    YouTube { id: String },
    Vimeo { id: String },
    /// Anything else is trusted to be embeddable as-is
    Generic { url: String },
}

impl Provider {
    /// Classify a remote URL: YouTube first, then Vimeo, then generic.
    pub fn classify(url: &str) -> Self {
        if let Some(id) = extract_youtube_id(url) {
            return Self::YouTube { id };
        }
        if let Some(id) = extract_vimeo_id(url) {
            return Self::Vimeo { id };
        }
        Self::Generic {
            url: url.to_string(),
        }
    }
}

/// Extract the 11-character YouTube video ID from a URL.
///
/// Accepts short links, embed links, plain watch links, and watch links with
/// extra query parameters. Empty or whitespace-only input yields `None`;
/// surrounding whitespace is ignored. The patterns are unanchored, so a
/// longer run of ID characters yields its first 11.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    for pattern in YOUTUBE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(url) {
            if let Some(id) = captures.get(1) {
                return Some(id.as_str().to_string());
            }
        }
    }

    None
}

/// Extract the numeric Vimeo video ID from a URL.
///
/// Matches `vimeo.com` (any case) followed by an optional `video`/`videos`/
/// `channels` segment and a run of digits.
pub fn extract_vimeo_id(url: &str) -> Option<String> {
    VIMEO_PATTERN
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}
