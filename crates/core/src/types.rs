//! Shared value types for generation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Aspect ratio
// ---------------------------------------------------------------------------

/// Output aspect ratio for a generated video.
///
/// The provider model accepts exactly these three values; anything else is
/// rejected during request validation before a network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Landscape, `16:9`.
    #[serde(rename = "16:9")]
    Landscape,
    /// Portrait, `9:16`.
    #[serde(rename = "9:16")]
    Portrait,
    /// Square, `1:1`.
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// The wire representation expected by the provider (`16:9` etc.).
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
        }
    }

    /// All valid aspect ratios, in the order the UI presents them.
    pub const ALL: &'static [AspectRatio] =
        &[AspectRatio::Landscape, AspectRatio::Portrait, AspectRatio::Square];
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Landscape
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(AspectRatio::Landscape),
            "9:16" => Ok(AspectRatio::Portrait),
            "1:1" => Ok(AspectRatio::Square),
            other => Err(CoreError::Validation(format!(
                "Invalid aspect ratio '{other}'. Must be one of: 16:9, 9:16, 1:1"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// CFG scale
// ---------------------------------------------------------------------------

/// Minimum accepted CFG (classifier-free guidance) scale.
pub const CFG_SCALE_MIN: f64 = 0.1;
/// Maximum accepted CFG scale.
pub const CFG_SCALE_MAX: f64 = 1.0;
/// Default CFG scale when the caller does not choose one.
pub const CFG_SCALE_DEFAULT: f64 = 0.5;

/// Guidance-scale value, bounded to `[CFG_SCALE_MIN, CFG_SCALE_MAX]`.
///
/// Higher values make the model follow the prompt more strictly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CfgScale(f64);

impl CfgScale {
    /// Construct a validated CFG scale.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(CFG_SCALE_MIN..=CFG_SCALE_MAX).contains(&value) {
            return Err(CoreError::Validation(format!(
                "CFG scale must be between {CFG_SCALE_MIN} and {CFG_SCALE_MAX}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Raw numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for CfgScale {
    fn default() -> Self {
        Self(CFG_SCALE_DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn aspect_ratio_round_trips_through_str() {
        for ratio in AspectRatio::ALL {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), *ratio);
        }
    }

    #[test]
    fn aspect_ratio_rejects_unknown_value() {
        assert_matches!(
            "4:3".parse::<AspectRatio>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn aspect_ratio_serializes_to_wire_form() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9:16\"");
    }

    #[test]
    fn cfg_scale_accepts_bounds() {
        assert!(CfgScale::new(CFG_SCALE_MIN).is_ok());
        assert!(CfgScale::new(CFG_SCALE_MAX).is_ok());
        assert_eq!(CfgScale::new(0.5).unwrap().value(), 0.5);
    }

    #[test]
    fn cfg_scale_rejects_out_of_range() {
        assert_matches!(CfgScale::new(0.0), Err(CoreError::Validation(_)));
        assert_matches!(CfgScale::new(1.5), Err(CoreError::Validation(_)));
        assert_matches!(CfgScale::new(f64::NAN), Err(CoreError::Validation(_)));
    }

    #[test]
    fn cfg_scale_default_is_midpoint() {
        assert_eq!(CfgScale::default().value(), CFG_SCALE_DEFAULT);
    }
}
