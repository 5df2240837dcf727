//! Toast notifications and the loading overlay.
//!
//! Both are plain state machines driven by the engine: the rack tracks live
//! toasts with their auto-dismiss deadlines, the overlay tracks its fade.
//! Callers pass the current time in, which keeps every transition testable
//! without a clock.

use std::time::{Duration, Instant};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS class on the toast element
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon the toast leads with
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
        }
    }

    /// Title used when the caller does not supply one
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Success => "Muvaffaqiyatli!",
            Self::Error => "Xatolik!",
            Self::Info => "Ma'lumot",
        }
    }
}

/// Handle for dismissing a toast before its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastId(u64);

/// One live notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    deadline: Instant,
}

impl Toast {
    /// Markup for the toast element.
    ///
    /// The renderer adds the `show` class a beat after insertion and keeps
    /// the element for its 400ms leave animation after removal; neither
    /// concerns the rack.
    pub fn markup(&self) -> String {
        let title = self
            .title
            .as_deref()
            .unwrap_or_else(|| self.kind.default_title());

        format!(
            "<div class=\"toast {kind}\">\
             <i class=\"{icon} toast-icon\"></i>\
             <div class=\"toast-content\">\
             <div class=\"toast-title\">{title}</div>\
             <div class=\"toast-message\">{message}</div>\
             </div>\
             <button class=\"toast-close\" aria-label=\"Close\">&times;</button>\
             </div>",
            kind = self.kind.class(),
            icon = self.kind.icon_class(),
            title = title,
            message = self.message,
        )
    }
}

/// Queue of live toasts with deadline-based auto-dismissal
#[derive(Debug)]
pub struct ToastRack {
    toasts: Vec<Toast>,
    duration: Duration,
    next_id: u64,
}

impl ToastRack {
    /// A rack whose toasts live for `duration` unless closed earlier
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
            next_id: 0,
        }
    }

    /// Enqueue a toast; it auto-dismisses `duration` after `now`
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        title: Option<String>,
        now: Instant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            kind,
            title,
            message: message.into(),
            deadline: now + self.duration,
        });
        id
    }

    /// Close a toast early; cancels its auto-dismissal
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop and return every toast whose deadline has passed
    pub fn sweep(&mut self, now: Instant) -> Vec<Toast> {
        let (expired, live) = self
            .toasts
            .drain(..)
            .partition(|toast| toast.deadline <= now);
        self.toasts = live;
        expired
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Loading overlay lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Shown,
    /// Fade-out begun; fully hidden once the fade elapses
    Fading { since: Instant },
}

/// The full-page loading overlay.
///
/// `show` is immediate; hiding is two-step: `begin_hide` starts the fade
/// and a later `sweep` completes it once the fade duration has passed.
#[derive(Debug)]
pub struct LoadingOverlay {
    state: OverlayState,
    fade: Duration,
}

impl LoadingOverlay {
    pub fn new(fade: Duration) -> Self {
        Self {
            state: OverlayState::Hidden,
            fade,
        }
    }

    pub fn show(&mut self) {
        self.state = OverlayState::Shown;
    }

    /// Start fading out. No-op when already hidden or fading; an earlier
    /// fade keeps its original start.
    pub fn begin_hide(&mut self, now: Instant) {
        if self.state == OverlayState::Shown {
            self.state = OverlayState::Fading { since: now };
        }
    }

    /// Complete the fade once its duration has elapsed
    pub fn sweep(&mut self, now: Instant) {
        if let OverlayState::Fading { since } = self.state {
            if now.duration_since(since) >= self.fade {
                self.state = OverlayState::Hidden;
            }
        }
    }

    /// Visible covers both fully shown and still fading
    pub fn is_visible(&self) -> bool {
        self.state != OverlayState::Hidden
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }
}
