#![forbid(unsafe_code)]

//! Placeholder statistics bars.

/// Sample values shown on the statistics screen.
pub const SAMPLE_DATA: [f64; 4] = [6.0, 9.0, 4.0, 8.0];

/// Value that fills a whole track.
pub const SAMPLE_MAX: f64 = 10.0;

/// Height of a full bar, in layout units.
pub const TRACK_HEIGHT: f64 = 150.0;

/// `track × value / max`, clamped to `[0, track]`.
///
/// Non-positive or NaN `max` yields 0, as does a NaN value.
#[must_use]
pub fn bar_height(value: f64, max: f64, track: f64) -> f64 {
    if max.is_nan() || max <= 0.0 || value.is_nan() || track.is_nan() || track <= 0.0 {
        return 0.0;
    }
    (track * value / max).clamp(0.0, track)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    values: Vec<f64>,
    max: f64,
    track: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(SAMPLE_DATA.to_vec(), SAMPLE_MAX)
    }
}

impl BarChart {
    #[must_use]
    pub fn new(values: Vec<f64>, max: f64) -> Self {
        Self {
            values,
            max,
            track: TRACK_HEIGHT,
        }
    }

    #[must_use]
    pub fn track(mut self, track: f64) -> Self {
        self.track = track;
        self
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Heights in track units.
    #[must_use]
    pub fn heights(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|&v| bar_height(v, self.max, self.track))
            .collect()
    }

    /// Heights scaled to `rows` whole cells, rounded to nearest.
    #[must_use]
    pub fn heights_in_rows(&self, rows: u16) -> Vec<u16> {
        self.values
            .iter()
            .map(|&v| bar_height(v, self.max, f64::from(rows)).round() as u16)
            .collect()
    }
}
