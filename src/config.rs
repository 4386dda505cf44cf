//! Tuning knobs for the visibility pipeline.

use crate::error::SightError;
use crate::tolerance::{EPSILON, OFFSET_ANGLE};

/// Settings shared by every stage of a visibility recompute.
///
/// With the `serde` feature the struct can be read from TOML; missing keys
/// fall back to the defaults.
///
/// ```
/// use sightline::VisibilityConfig;
///
/// let config = VisibilityConfig::default().with_max_range(250.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_range, Some(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisibilityConfig {
    /// Distance below which points, lines and contacts are considered equal.
    pub tolerance: f64,
    /// Angle in degrees between a corner ray and the rays swept past it.
    pub offset_angle: f64,
    /// Light power: how far the observer sees. `None` is unbounded.
    pub max_range: Option<f64>,
    /// Keep the resolved rays after a recompute, for debug overlays.
    pub keep_rays: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            offset_angle: OFFSET_ANGLE,
            max_range: None,
            keep_rays: true,
        }
    }
}

impl VisibilityConfig {
    /// Sets the distance tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the corner offset angle in degrees.
    pub fn with_offset_angle(mut self, degrees: f64) -> Self {
        self.offset_angle = degrees;
        self
    }

    /// Limits how far the observer sees.
    pub fn with_max_range(mut self, range: f64) -> Self {
        self.max_range = Some(range);
        self
    }

    /// Chooses whether resolved rays are kept after a recompute.
    pub fn with_keep_rays(mut self, keep: bool) -> Self {
        self.keep_rays = keep;
        self
    }

    /// Checks that every setting is finite and in range.
    pub fn validate(&self) -> Result<(), SightError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SightError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.offset_angle.is_finite() && self.offset_angle > 0.0 && self.offset_angle < 1.0) {
            return Err(SightError::InvalidConfig(format!(
                "offset_angle must be in (0, 1) degrees, got {}",
                self.offset_angle
            )));
        }
        if let Some(range) = self.max_range {
            if !(range.is_finite() && range > 0.0) {
                return Err(SightError::InvalidConfig(format!(
                    "max_range must be positive, got {}",
                    range
                )));
            }
        }
        Ok(())
    }

    /// Parses a TOML document and validates the result.
    ///
    /// ```
    /// use sightline::VisibilityConfig;
    ///
    /// let config = VisibilityConfig::from_toml_str("max_range = 300.0\nkeep_rays = false").unwrap();
    /// assert_eq!(config.max_range, Some(300.0));
    /// assert!(!config.keep_rays);
    /// assert_eq!(config.tolerance, sightline::tolerance::EPSILON);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self, SightError> {
        let config: Self =
            toml::from_str(source).map_err(|e| SightError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
