use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for Vitrina
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    pub api: ApiConfig,

    /// Carousel timing and layout settings
    pub slider: SliderConfig,

    /// Notification and overlay settings
    pub toast: ToastConfig,

    /// Decorative layer settings
    pub decor: DecorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            slider: SliderConfig::default(),
            toast: ToastConfig::default(),
            decor: DecorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.slider.validate()?;
        self.toast.validate()?;
        self.decor.validate()?;
        Ok(())
    }
}

/// Remote API configuration
///
/// Deliberately carries no timeout knob: a request that hangs keeps the
/// loading overlay up, matching the page this models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the video and form endpoints hang off
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ApiConfig {
    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".to_string(),
                value: self.base_url.clone(),
            }
            .into());
        }

        Ok(())
    }
}

/// Carousel timing and track layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Delay between automatic advances (ms)
    pub autoplay_delay_ms: u64,

    /// Delay before autoplay first starts after init (ms)
    pub startup_delay_ms: u64,

    /// Delay before autoplay restarts when the page becomes visible again (ms)
    pub resume_delay_ms: u64,

    /// Debounce window for container resize events (ms)
    pub resize_debounce_ms: u64,

    /// Horizontal gap between track items (px, 1.8rem on the page)
    pub item_gap_px: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 6000,
            startup_delay_ms: 800,
            resume_delay_ms: 300,
            resize_debounce_ms: 250,
            item_gap_px: 28.8,
        }
    }
}

impl SliderConfig {
    /// Delay between automatic advances
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }

    /// Delay before autoplay first starts
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// Delay before autoplay restarts after a visibility change
    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    /// Debounce window for resize events
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.autoplay_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "slider.autoplay_delay_ms".to_string(),
                value: self.autoplay_delay_ms.to_string(),
            }
            .into());
        }

        if self.item_gap_px < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "slider.item_gap_px".to_string(),
                value: self.item_gap_px.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Notification and loading overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays up before auto-dismissal (ms)
    pub duration_ms: u64,

    /// Overlay fade-out length before it is fully hidden (ms)
    pub overlay_fade_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            overlay_fade_ms: 500,
        }
    }
}

impl ToastConfig {
    /// How long a toast stays up before auto-dismissal
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Overlay fade-out length
    pub fn overlay_fade(&self) -> Duration {
        Duration::from_millis(self.overlay_fade_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "toast.duration_ms".to_string(),
                value: self.duration_ms.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Decorative layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorConfig {
    /// Widths below this are treated as mobile (px)
    pub mobile_breakpoint: u32,

    /// Widths below this (and at or above mobile) are treated as tablet (px)
    pub tablet_breakpoint: u32,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            tablet_breakpoint: 1024,
        }
    }
}

impl DecorConfig {
    fn validate(&self) -> Result<()> {
        if self.mobile_breakpoint >= self.tablet_breakpoint {
            return Err(ConfigError::InvalidValue {
                key: "decor.breakpoints".to_string(),
                value: format!("{}-{}", self.mobile_breakpoint, self.tablet_breakpoint),
            }
            .into());
        }

        Ok(())
    }
}
