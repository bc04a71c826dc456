use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTIVE_COLOR, BACKGROUND_COLOR, DEFAULT_MAXIMUM_LEVEL, INACTIVE_COLOR, OUTLINE_COLOR,
};

/// Colors used to paint a [`LevelIndicator`](crate::LevelIndicator).
///
/// - `background`: marker notch when the marker sits inside the filled bar
/// - `active` / `inactive`: bar fill and marker tick, picked by the active flag
/// - `outline`: one cell border around the bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub active: Color,
    pub inactive: Color,
    pub outline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            active: ACTIVE_COLOR,
            inactive: INACTIVE_COLOR,
            outline: OUTLINE_COLOR,
        }
    }
}

impl Palette {
    /// Foreground color for the given active flag.
    pub fn foreground(&self, active: bool) -> Color {
        if active {
            self.active
        } else {
            self.inactive
        }
    }
}

/// Construction-time settings for a [`LevelIndicator`](crate::LevelIndicator).
///
/// Every field is optional when deserializing; missing ones take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub maximum_level: u32,
    /// `true` selects the linear mapping, see [`LevelScale`](crate::LevelScale).
    pub logarithmic: bool,
    pub palette: Palette,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            maximum_level: DEFAULT_MAXIMUM_LEVEL,
            logarithmic: false,
            palette: Palette::default(),
        }
    }
}
