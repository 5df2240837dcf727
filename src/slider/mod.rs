//! # Carousel Module
//!
//! The certificate carousel: a pure state core, centering track layout, and
//! an async controller that owns the autoplay timer.
//!
//! The controller publishes [`SliderFrame`]s on a watch channel; renderers
//! subscribe and apply whatever the latest frame says.

pub mod controller;
pub mod layout;
pub mod state;

pub use controller::{SliderController, SliderPhase};
pub use layout::{SliderFrame, TrackMetrics};
pub use state::{SlideItem, SliderCore};
