#![forbid(unsafe_code)]

//! Application configuration.
//!
//! Every tunable lives in one [`AppConfig`] loaded from TOML at startup.
//! Missing keys fall back to defaults, so an empty file is a valid config.
//!
//! ```toml
//! tick_ms = 16
//!
//! [motion]
//! curve = "eased"
//! snap_duration_ms = 350
//! easing = "ease_in_out"
//! gradient_period_ms = 5000
//!
//! [gesture]
//! drag_threshold = 1
//! tap_tolerance = 1
//! long_press_ms = 500
//!
//! [logging]
//! filter = "info"
//! json = false
//! file = "insight.log"
//!
//! [memo]
//! phrase = "..."
//! words_per_second = 3.0
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use insight_core::animation::Easing;
use insight_core::gesture::GestureConfig;
use insight_widgets::PanelMotion;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level AppConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Frame interval; also the input poll timeout.
    pub tick_ms: u64,
    pub motion: MotionConfig,
    pub gesture: GestureSettings,
    pub logging: LoggingConfig,
    pub memo: MemoConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: 16,
            motion: MotionConfig::default(),
            gesture: GestureSettings::default(),
            logging: LoggingConfig::default(),
            memo: MemoConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Collect every out-of-range value, not just the first.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.tick_ms == 0 {
            errors.push("tick_ms must be > 0".into());
        }
        if self.motion.snap_duration_ms == 0 {
            errors.push("motion.snap_duration_ms must be > 0".into());
        }
        if self.motion.gradient_period_ms == 0 {
            errors.push("motion.gradient_period_ms must be > 0".into());
        }
        if !(self.motion.spring_stiffness.is_finite() && self.motion.spring_stiffness > 0.0) {
            errors.push(format!(
                "motion.spring_stiffness must be finite and > 0, got {}",
                self.motion.spring_stiffness
            ));
        }
        // An undamped spring oscillates forever and the panel never rests.
        if !(self.motion.spring_damping.is_finite() && self.motion.spring_damping > 0.0) {
            errors.push(format!(
                "motion.spring_damping must be finite and > 0, got {}",
                self.motion.spring_damping
            ));
        }
        if self.gesture.long_press_ms == 0 {
            errors.push("gesture.long_press_ms must be > 0".into());
        }
        if self.gesture.drag_threshold == 0 {
            errors.push("gesture.drag_threshold must be > 0".into());
        }
        if !(self.memo.words_per_second.is_finite() && self.memo.words_per_second > 0.0) {
            errors.push(format!(
                "memo.words_per_second must be finite and > 0, got {}",
                self.memo.words_per_second
            ));
        }

        errors
    }

    /// `self` if valid, otherwise every problem at once.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    #[must_use]
    pub fn panel_motion(&self) -> PanelMotion {
        match self.motion.curve {
            MotionCurve::Eased => PanelMotion::Eased {
                duration: Duration::from_millis(self.motion.snap_duration_ms),
                easing: self.motion.easing,
            },
            MotionCurve::Spring => PanelMotion::Spring {
                stiffness: self.motion.spring_stiffness,
                damping: self.motion.spring_damping,
            },
        }
    }

    #[must_use]
    pub fn gradient_period(&self) -> Duration {
        Duration::from_millis(self.motion.gradient_period_ms)
    }

    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            drag_threshold: self.gesture.drag_threshold,
            tap_tolerance: self.gesture.tap_tolerance,
            long_press_threshold: Duration::from_millis(self.gesture.long_press_ms),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Snap animation model for the schedule panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionCurve {
    #[default]
    Eased,
    Spring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub curve: MotionCurve,
    pub snap_duration_ms: u64,
    pub easing: Easing,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub gradient_period_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            curve: MotionCurve::Eased,
            snap_duration_ms: 350,
            easing: Easing::EaseInOut,
            spring_stiffness: 170.0,
            spring_damping: 26.0,
            gradient_period_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Cells of travel before a press becomes a drag.
    pub drag_threshold: u16,
    /// Cells a tap may wander between press and release.
    pub tap_tolerance: u16,
    pub long_press_ms: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        let defaults = GestureConfig::default();
        Self {
            drag_threshold: defaults.drag_threshold,
            tap_tolerance: defaults.tap_tolerance,
            long_press_ms: defaults.long_press_threshold.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `INSIGHT_LOG` overrides it.
    pub filter: String,
    pub json: bool,
    /// Log file. Without one, logging is off while the UI owns the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
            json: false,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    /// Words the scripted transcriber "hears".
    pub phrase: String,
    pub words_per_second: f64,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            phrase: "Revise the laws of motion before the physics test on Friday".into(),
            words_per_second: 3.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// TOML serialization error.
    Serialize(toml::ser::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Serialize(e) => write!(f, "TOML serialize error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
