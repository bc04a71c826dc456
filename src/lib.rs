mod config;
mod constants;
mod error;
mod indicator;
mod redraw;
mod rendering;
mod scaling;
mod state;
mod surface;

pub use config::{IndicatorConfig, Palette};
pub use constants::{DEFAULT_MAXIMUM_LEVEL, SCALE_MAX};
pub use error::{IndicatorError, Result};
pub use indicator::LevelIndicator;
pub use redraw::{RedrawFlag, RedrawRequest};
pub use rendering::ClippedBuffer;
pub use scaling::LevelScale;
pub use state::IndicatorState;
pub use surface::{DrawCommand, Surface};
