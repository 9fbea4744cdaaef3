//! Pixel scroll offsets of a two-dimensional scrollable component.

use crate::error::ParsePositionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal and vertical scroll offsets in pixels, measured from the
/// left and top border of the scrollable component.
///
/// Offsets are conventionally `>= 0`; negative values only show up on
/// surfaces that support over-scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    left: f64,
    top: f64,
}

impl ScrollPosition {
    /// Scrolled all the way to the top-left corner.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Left / horizontal / x offset.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Top / vertical / y offset.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// True when both axes lie strictly within `tolerance` of `other`.
    ///
    /// Browsers round scroll offsets to device pixels, so a value read back
    /// after a write rarely matches bit for bit.
    pub fn approx_eq(&self, other: &ScrollPosition, tolerance: f64) -> bool {
        (self.left - other.left).abs() < tolerance && (self.top - other.top).abs() < tolerance
    }
}

impl fmt::Display for ScrollPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole numbers: `50.0,100.0`.
        write!(f, "{:?},{:?}", self.left, self.top)
    }
}

impl FromStr for ScrollPosition {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, top) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| ParsePositionError::InvalidNumber(part.trim().to_string()))
        };
        Ok(Self::new(parse(left)?, parse(top)?))
    }
}

impl From<(f64, f64)> for ScrollPosition {
    fn from((left, top): (f64, f64)) -> Self {
        Self::new(left, top)
    }
}
