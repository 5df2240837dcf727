//! Page hooks and the video modal.

use crate::slider::{SlideItem, TrackMetrics};

/// Carousel elements measured off the page
#[derive(Debug, Clone)]
pub struct SliderHooks {
    pub items: Vec<SlideItem>,
    pub metrics: TrackMetrics,
}

/// Optional page elements the features hang off.
///
/// A missing hook means the page simply does not carry that feature; the
/// engine skips it silently, never treating absence as an error.
#[derive(Debug, Clone, Default)]
pub struct PageHooks {
    pub video_modal: bool,
    pub toast_container: bool,
    pub loading_overlay: bool,
    pub application_form: bool,
    pub contact_form: bool,
    pub particles_host: bool,
    pub slider: Option<SliderHooks>,
}

/// The video modal: holds the embed markup while open.
///
/// Closing clears the content outright so playback stops rather than
/// continuing behind a hidden modal.
#[derive(Debug, Default)]
pub struct VideoModal {
    content: Option<String>,
}

impl VideoModal {
    /// Open with embed markup, replacing whatever was showing
    pub fn open(&mut self, markup: &str) {
        self.content = Some(format!("<div class=\"video-container\">{markup}</div>"));
    }

    /// Hide the modal and drop its content
    pub fn close(&mut self) {
        self.content = None;
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
