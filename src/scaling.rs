use std::num::NonZeroU32;

use log::warn;

use crate::constants::{DEFAULT_MAXIMUM_LEVEL, SCALE_MAX};
use crate::error::{IndicatorError, Result};

const DEFAULT_MAXIMUM: NonZeroU32 = match NonZeroU32::new(DEFAULT_MAXIMUM_LEVEL) {
    Some(maximum) => maximum,
    None => panic!("default maximum level must be positive"),
};

/// Maps raw levels onto the normalized range `[0, SCALE_MAX]`.
///
/// The `logarithmic` flag has an inverted sense: `true` selects the straight linear mapping,
/// `false` selects the `log10(9x + 1)` curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelScale {
    maximum_level: NonZeroU32,
    logarithmic: bool,
}

impl Default for LevelScale {
    fn default() -> Self {
        Self {
            maximum_level: DEFAULT_MAXIMUM,
            logarithmic: false,
        }
    }
}

impl LevelScale {
    /// Create a scale for raw levels in `[0, maximum_level]`.
    ///
    /// Fails with [`IndicatorError::InvalidConfiguration`] when `maximum_level` is zero.
    pub fn new(maximum_level: u32, logarithmic: bool) -> Result<Self> {
        let maximum_level = Self::validate_maximum(maximum_level)?;
        Ok(Self {
            maximum_level,
            logarithmic,
        })
    }

    pub(crate) fn validate_maximum(maximum_level: u32) -> Result<NonZeroU32> {
        NonZeroU32::new(maximum_level).ok_or_else(|| {
            warn!("rejecting maximum level of zero");
            IndicatorError::InvalidConfiguration("maximum level must be positive".to_string())
        })
    }

    pub fn maximum_level(&self) -> u32 {
        self.maximum_level.get()
    }

    pub fn is_logarithmic(&self) -> bool {
        self.logarithmic
    }

    pub(crate) fn set_maximum_level(&mut self, maximum_level: NonZeroU32) {
        self.maximum_level = maximum_level;
    }

    pub(crate) fn set_logarithmic(&mut self, logarithmic: bool) {
        self.logarithmic = logarithmic;
    }

    /// Convert a raw level to a normalized position. Levels above the maximum are clamped.
    pub fn scale_level(&self, level: u32) -> u32 {
        let maximum = self.maximum_level.get();
        let level = level.min(maximum);

        if self.logarithmic {
            // 64-bit intermediate, level * SCALE_MAX overflows u32 for large maxima
            let position = u64::from(level) * u64::from(SCALE_MAX) / u64::from(maximum);
            return position as u32;
        }

        let ratio = 9.0 * f64::from(level) / f64::from(maximum);
        let position = ((ratio + 1.0).log10() * f64::from(SCALE_MAX)).round();
        (position as u32).min(SCALE_MAX)
    }
}
