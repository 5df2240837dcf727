//! Async carousel controller: autoplay, hover pause, visibility, resize.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::SliderConfig;

use super::layout::{SliderFrame, TrackMetrics};
use super::state::{SlideItem, SliderCore};

/// Where the controller's timer currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPhase {
    /// No autoplay timer armed
    Idle,

    /// Timer armed and advancing on schedule
    AutoPlaying,

    /// Timer armed but ticks are suppressed (pointer over the track)
    Paused,
}

struct SliderInner {
    core: SliderCore,
    metrics: TrackMetrics,
    timings: SliderConfig,
    paused: bool,
    autoplay: Option<JoinHandle<()>>,
    pending_start: Option<JoinHandle<()>>,
    pending_resize: Option<JoinHandle<()>>,
    frames_tx: watch::Sender<SliderFrame>,
}

impl SliderInner {
    fn publish(&self) {
        let _ = self
            .frames_tx
            .send(SliderFrame::snapshot(&self.core, &self.metrics));
    }

    fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.abort();
        }
    }
}

impl Drop for SliderInner {
    fn drop(&mut self) {
        for handle in [
            self.autoplay.take(),
            self.pending_start.take(),
            self.pending_resize.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.abort();
        }
    }
}

fn lock_shared(shared: &Arc<Mutex<SliderInner>>) -> MutexGuard<'_, SliderInner> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Carousel controller owning the autoplay timer.
///
/// Clones share the same state and timer. There is at most one live timer
/// per controller at any moment: every arm cancels the previous one first.
/// Spawned tasks hold the shared state weakly, so dropping the last clone
/// stops them all and closes the frame channel.
/// Must be created inside a Tokio runtime.
#[derive(Clone)]
pub struct SliderController {
    inner: Arc<Mutex<SliderInner>>,
    frames_rx: watch::Receiver<SliderFrame>,
}

impl SliderController {
    /// Build a controller, render the first card, and schedule the first
    /// autoplay start.
    ///
    /// With zero items the controller is a terminal no-op shell. With a
    /// single item the frame renders but no timer is ever armed and the
    /// controls stay disabled.
    pub fn new(items: Vec<SlideItem>, metrics: TrackMetrics, timings: SliderConfig) -> Self {
        let core = SliderCore::new(items);
        let startup = timings.startup_delay();
        let (frames_tx, frames_rx) = watch::channel(SliderFrame::snapshot(&core, &metrics));

        let inner = Arc::new(Mutex::new(SliderInner {
            core,
            metrics,
            timings,
            paused: false,
            autoplay: None,
            pending_start: None,
            pending_resize: None,
            frames_tx,
        }));

        let controller = Self { inner, frames_rx };
        controller.schedule_start(startup);
        controller
    }

    /// Latest layout frame plus change notifications
    pub fn frames(&self) -> watch::Receiver<SliderFrame> {
        self.frames_rx.clone()
    }

    pub fn active(&self) -> usize {
        self.locked().core.active()
    }

    pub fn len(&self) -> usize {
        self.locked().core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked().core.is_empty()
    }

    pub fn phase(&self) -> SliderPhase {
        let inner = self.locked();
        match (&inner.autoplay, inner.paused) {
            (None, _) => SliderPhase::Idle,
            (Some(_), true) => SliderPhase::Paused,
            (Some(_), false) => SliderPhase::AutoPlaying,
        }
    }

    /// Step to the next card and restart the autoplay countdown
    pub fn next(&self) {
        let mut inner = self.locked();
        inner.core.advance();
        inner.publish();
        Self::arm_autoplay(&mut inner, &self.inner);
    }

    /// Step to the previous card and restart the autoplay countdown
    pub fn prev(&self) {
        let mut inner = self.locked();
        inner.core.retreat();
        inner.publish();
        Self::arm_autoplay(&mut inner, &self.inner);
    }

    /// Land on a card (modulo the item count) and restart the countdown
    pub fn jump_to(&self, index: usize) {
        let mut inner = self.locked();
        inner.core.jump_to(index);
        inner.publish();
        Self::arm_autoplay(&mut inner, &self.inner);
    }

    /// Suppress ticks while the pointer is over the track.
    ///
    /// The timer keeps running; its ticks are no-ops until [`resume`].
    ///
    /// [`resume`]: Self::resume
    pub fn pause(&self) {
        self.locked().paused = true;
    }

    /// Clear the hover pause; arms a timer only when none is running
    pub fn resume(&self) {
        let mut inner = self.locked();
        inner.paused = false;
        if inner.autoplay.is_none() {
            Self::arm_autoplay(&mut inner, &self.inner);
        }
    }

    /// Page visibility change: hidden cancels the timer outright, visible
    /// restarts it after the configured resume delay.
    ///
    /// A resume already scheduled keeps its course when the page hides
    /// again before it fires.
    pub fn set_visibility(&self, visible: bool) {
        if visible {
            let delay = self.locked().timings.resume_delay();
            self.schedule_start(delay);
        } else {
            debug!("carousel: page hidden, autoplay cancelled");
            self.locked().stop_autoplay();
        }
    }

    /// Page-load fallback: arm the timer if nothing armed it yet
    pub fn ensure_autoplay(&self) {
        let mut inner = self.locked();
        if inner.autoplay.is_none() {
            Self::arm_autoplay(&mut inner, &self.inner);
        }
    }

    /// Debounced container resize; recenters the current card once the
    /// events go quiet. Index and timer state are untouched.
    pub fn resize(&self, container_width: f32) {
        let mut inner = self.locked();
        if let Some(handle) = inner.pending_resize.take() {
            handle.abort();
        }

        let delay = inner.timings.resize_debounce();
        let task_state = Arc::downgrade(&self.inner);
        inner.pending_resize = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = task_state.upgrade() {
                let mut inner = lock_shared(&shared);
                inner.metrics.container_width = container_width;
                inner.publish();
            }
        }));
    }

    /// Arm the recurring autoplay timer, cancelling any previous one.
    ///
    /// Clears the pause flag. Never arms for a single-card (or empty)
    /// carousel. The tick loop keeps only a weak handle on the shared
    /// state and exits once the last controller clone is gone.
    fn arm_autoplay(inner: &mut SliderInner, shared: &Arc<Mutex<SliderInner>>) {
        inner.stop_autoplay();
        if inner.core.len() <= 1 {
            return;
        }

        inner.paused = false;
        let delay = inner.timings.autoplay_delay();
        let task_state = Arc::downgrade(shared);
        inner.autoplay = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(delay).await;
                let shared = match task_state.upgrade() {
                    Some(shared) => shared,
                    None => break,
                };
                let mut inner = lock_shared(&shared);
                if !inner.paused && inner.core.len() > 1 {
                    inner.core.advance();
                    inner.publish();
                }
            }
        }));
        debug!("carousel: autoplay armed every {:?}", delay);
    }

    /// Schedule a delayed autoplay start, replacing any start already
    /// pending. Skipped entirely for carousels that never autoplay.
    fn schedule_start(&self, delay: Duration) {
        let mut inner = self.locked();
        if inner.core.len() <= 1 {
            return;
        }

        if let Some(handle) = inner.pending_start.take() {
            handle.abort();
        }

        let task_state = Arc::downgrade(&self.inner);
        inner.pending_start = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = task_state.upgrade() {
                let mut inner = lock_shared(&shared);
                Self::arm_autoplay(&mut inner, &shared);
            }
        }));
    }

    fn locked(&self) -> MutexGuard<'_, SliderInner> {
        lock_shared(&self.inner)
    }
}
