//! Track layout: centering offsets and per-frame render state.

use serde::Serialize;

use super::state::SliderCore;

/// Easing applied to every track movement
pub const TRACK_TRANSITION: &str = "transform 1.2s cubic-bezier(0.4, 0, 0.2, 1)";

/// Measured widths of the track and its cards
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackMetrics {
    /// Visible slider width (px)
    pub container_width: f32,

    /// Width of one card (px)
    pub item_width: f32,

    /// Horizontal gap between cards (px)
    pub gap: f32,
}

impl TrackMetrics {
    pub fn new(container_width: f32, item_width: f32, gap: f32) -> Self {
        Self {
            container_width,
            item_width,
            gap,
        }
    }

    /// Track offset that centers the active card.
    ///
    /// Half the container, minus half a card, minus the full span of every
    /// card before the active one.
    pub fn centering_offset(&self, active: usize) -> f32 {
        let span = self.item_width + self.gap;
        self.container_width / 2.0 - self.item_width / 2.0 - active as f32 * span
    }
}

/// One rendered state of the carousel.
///
/// Carries everything a renderer needs to apply: where the track sits, which
/// card and indicator are highlighted, and whether the arrows are usable.
#[derive(Debug, Clone, Serialize)]
pub struct SliderFrame {
    pub active: usize,
    pub len: usize,
    pub offset_px: f32,
    pub controls_enabled: bool,
}

impl SliderFrame {
    /// Snapshot the core against the current metrics
    pub fn snapshot(core: &SliderCore, metrics: &TrackMetrics) -> Self {
        Self {
            active: core.active(),
            len: core.len(),
            offset_px: metrics.centering_offset(core.active()),
            controls_enabled: core.len() > 1,
        }
    }

    /// Whether the card (and its indicator) at `index` is the highlighted one
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }

    /// CSS transition the renderer applies alongside the offset
    pub fn transition(&self) -> &'static str {
        TRACK_TRANSITION
    }
}
