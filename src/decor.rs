//! Decorative layer parameters: particles, parallax, scroll state, counters.
//!
//! Pure generators for the page's ambient effects. The animation itself is
//! the renderer's business; these produce the numbers it applies.

use rand::Rng;
use serde::Serialize;

use crate::config::DecorConfig;

/// Particle palette, white plus the site's accent colors
pub const PARTICLE_COLORS: [&str; 5] = [
    "rgba(255, 255, 255, 0.3)",
    "rgba(37, 99, 235, 0.25)",
    "rgba(245, 158, 11, 0.25)",
    "rgba(16, 185, 129, 0.25)",
    "rgba(59, 130, 246, 0.25)",
];

/// Stat counter animation length
const COUNTER_DURATION_MS: f64 = 2000.0;

/// Nominal frame budget the counter steps by
const COUNTER_FRAME_MS: f64 = 16.0;

/// How many particles a viewport gets
pub fn particle_count(viewport_width: u32, config: &DecorConfig) -> usize {
    if viewport_width < config.mobile_breakpoint {
        10
    } else if viewport_width < config.tablet_breakpoint {
        15
    } else {
        20
    }
}

/// One floating particle
#[derive(Debug, Clone, Serialize)]
pub struct ParticleSpec {
    /// Horizontal position, percent of container width
    pub left_pct: f32,

    /// Animation start delay (s)
    pub delay_s: f32,

    /// Float cycle length (s)
    pub duration_s: f32,

    /// Square size (px); smaller on mobile
    pub size_px: f32,

    pub color: &'static str,

    /// Box-shadow glow; omitted on mobile
    pub glow: Option<String>,
}

/// Generate the particle field for a viewport
pub fn particles<R: Rng>(
    viewport_width: u32,
    config: &DecorConfig,
    rng: &mut R,
) -> Vec<ParticleSpec> {
    let mobile = viewport_width < config.mobile_breakpoint;
    let count = particle_count(viewport_width, config);

    (0..count)
        .map(|_| {
            let size_px = if mobile {
                rng.gen_range(1.0..2.0)
            } else {
                rng.gen_range(2.0..4.0)
            };
            let color = PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())];
            let glow = if mobile {
                None
            } else {
                Some(format!("0 0 {}px {}", size_px * 1.5, color))
            };

            ParticleSpec {
                left_pct: rng.gen_range(0.0..100.0),
                delay_s: rng.gen_range(0.0..20.0),
                duration_s: rng.gen_range(15.0..25.0),
                size_px,
                color,
                glow,
            }
        })
        .collect()
}

/// Vertical offsets for the hero's floating shapes.
///
/// At most four shapes move, each at its own speed. Returns `None` on
/// mobile widths and once the hero has scrolled out of view.
pub fn parallax_offsets(
    scroll_y: f32,
    viewport_width: u32,
    viewport_height: f32,
    shape_count: usize,
    config: &DecorConfig,
) -> Option<Vec<f32>> {
    if viewport_width < config.mobile_breakpoint || scroll_y >= viewport_height {
        return None;
    }

    let moved = shape_count.min(4);
    Some(
        (0..moved)
            .map(|i| {
                let speed = 0.2 + (i % 3) as f32 * 0.05;
                -(scroll_y * speed)
            })
            .collect(),
    )
}

/// Scroll progress bar width, percent of the scrollable height
pub fn scroll_progress(offset: f32, scrollable_height: f32) -> f32 {
    if scrollable_height <= 0.0 {
        return 0.0;
    }
    (offset / scrollable_height * 100.0).clamp(0.0, 100.0)
}

/// Whether the scroll-to-top button shows
pub fn scroll_top_visible(offset: f32) -> bool {
    offset > 300.0
}

/// Whether the navbar switches to its scrolled styling
pub fn navbar_scrolled(offset: f32) -> bool {
    offset > 50.0
}

/// Animated stat counter: yields the displayed value frame by frame.
///
/// Steps by `target / 125` (a 2s run at ~60fps), floors intermediate
/// frames, and always ends exactly on the target.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u64,
    current: f64,
    increment: f64,
    done: bool,
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
            done: false,
        }
    }
}

impl Iterator for Counter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        if self.current < self.target as f64 {
            Some(self.current.floor() as u64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn particle_count_adapts_to_viewport() {
        let config = DecorConfig::default();
        assert_eq!(particle_count(375, &config), 10);
        assert_eq!(particle_count(767, &config), 10);
        assert_eq!(particle_count(768, &config), 15);
        assert_eq!(particle_count(1023, &config), 15);
        assert_eq!(particle_count(1024, &config), 20);
        assert_eq!(particle_count(1920, &config), 20);
    }

    #[test]
    fn particles_stay_inside_their_ranges() {
        let config = DecorConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);

        for spec in particles(1920, &config, &mut rng) {
            assert!((0.0..100.0).contains(&spec.left_pct));
            assert!((0.0..20.0).contains(&spec.delay_s));
            assert!((15.0..25.0).contains(&spec.duration_s));
            assert!((2.0..4.0).contains(&spec.size_px));
            assert!(PARTICLE_COLORS.contains(&spec.color));

            let glow = spec.glow.expect("desktop particles glow");
            assert!(glow.starts_with("0 0 "));
            assert!(glow.ends_with(spec.color));
        }
    }

    #[test]
    fn mobile_particles_are_small_and_glowless() {
        let config = DecorConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);

        let specs = particles(375, &config, &mut rng);
        assert_eq!(specs.len(), 10);
        for spec in specs {
            assert!((1.0..2.0).contains(&spec.size_px));
            assert!(spec.glow.is_none());
        }
    }

    #[test]
    fn parallax_speeds_cycle_over_three_values() {
        let config = DecorConfig::default();
        let offsets = parallax_offsets(100.0, 1920, 900.0, 6, &config).unwrap();

        // Only the first four shapes move; speeds 0.2, 0.25, 0.3, then back.
        assert_eq!(offsets.len(), 4);
        assert!((offsets[0] - (-20.0)).abs() < 1e-3);
        assert!((offsets[1] - (-25.0)).abs() < 1e-3);
        assert!((offsets[2] - (-30.0)).abs() < 1e-3);
        assert!((offsets[3] - (-20.0)).abs() < 1e-3);
    }

    #[test]
    fn parallax_is_disabled_on_mobile_and_past_the_hero() {
        let config = DecorConfig::default();
        assert!(parallax_offsets(100.0, 500, 900.0, 4, &config).is_none());
        assert!(parallax_offsets(900.0, 1920, 900.0, 4, &config).is_none());
        assert!(parallax_offsets(899.0, 1920, 900.0, 4, &config).is_some());
    }

    #[test]
    fn scroll_progress_is_a_clamped_percentage() {
        assert_eq!(scroll_progress(0.0, 2000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0), 25.0);
        assert_eq!(scroll_progress(2000.0, 2000.0), 100.0);
        assert_eq!(scroll_progress(2500.0, 2000.0), 100.0, "overscroll clamps");
        assert_eq!(scroll_progress(100.0, 0.0), 0.0, "nothing scrollable");
    }

    #[test]
    fn scroll_flags_flip_at_their_thresholds() {
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(51.0));
    }

    #[test]
    fn counter_reaches_the_target_exactly() {
        let frames: Vec<u64> = Counter::new(1000).collect();

        assert_eq!(frames.len(), 125);
        assert_eq!(*frames.last().unwrap(), 1000);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]), "monotonic");
        assert!(frames.iter().all(|&v| v <= 1000), "no overshoot");
        assert_eq!(frames[0], 8);
    }

    #[test]
    fn zero_target_counter_yields_a_single_zero() {
        let frames: Vec<u64> = Counter::new(0).collect();
        assert_eq!(frames, vec![0]);
    }
}
