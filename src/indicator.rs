//! The [`LevelIndicator`] widget displays a horizontal level bar with a marker threshold.
use log::debug;

use crate::config::{IndicatorConfig, Palette};
use crate::error::Result;
use crate::redraw::{RedrawFlag, RedrawRequest};
use crate::scaling::LevelScale;
use crate::state::IndicatorState;

/// A widget to display a signal level against a marker threshold.
///
/// Raw levels given to [`LevelIndicator::set_current_level`] and
/// [`LevelIndicator::set_marker_level`] are clamped to the maximum level and normalized to
/// `[0, SCALE_MAX]`. Every setter that changes a visible position asks the host for a redraw
/// through the [`RedrawRequest`] hook; setting an unchanged value requests nothing.
///
/// The indicator is painted onto any [`Surface`](crate::Surface), or rendered directly as a
/// ratatui [`Widget`](ratatui::widgets::Widget).
#[derive(Debug, Clone)]
pub struct LevelIndicator<R: RedrawRequest = RedrawFlag> {
    pub(crate) scale: LevelScale,
    pub(crate) state: IndicatorState,
    pub(crate) palette: Palette,
    redraw: R,
}

impl Default for LevelIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelIndicator {
    /// Create an inactive indicator using the curve mapping and a maximum level of 32767.
    pub fn new() -> Self {
        Self {
            scale: LevelScale::default(),
            state: IndicatorState::default(),
            palette: Palette::default(),
            redraw: RedrawFlag::default(),
        }
    }

    /// Create an indicator from a [`IndicatorConfig`].
    ///
    /// Fails with [`IndicatorError::InvalidConfiguration`](crate::IndicatorError) when the
    /// configured maximum level is zero.
    pub fn from_config(config: IndicatorConfig) -> Result<Self> {
        let scale = LevelScale::new(config.maximum_level, config.logarithmic)?;
        debug!(
            "level indicator configured: maximum_level={}, logarithmic={}",
            config.maximum_level, config.logarithmic
        );
        Ok(Self {
            scale,
            state: IndicatorState::default(),
            palette: config.palette,
            redraw: RedrawFlag::default(),
        })
    }
}

impl<R: RedrawRequest> LevelIndicator<R> {
    /// Replace the redraw hook.
    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn redraw_hook<H: RedrawRequest>(self, redraw: H) -> LevelIndicator<H> {
        LevelIndicator {
            scale: self.scale,
            state: self.state,
            palette: self.palette,
            redraw,
        }
    }

    /// Set the colors of the [`LevelIndicator`].
    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Restore the curve mapping and zero both positions.
    ///
    /// The maximum level and the active flag are left untouched. Always requests a redraw.
    pub fn reset(&mut self) {
        self.scale.set_logarithmic(false);
        self.state.marker_position = 0;
        self.state.current_position = 0;
        debug!("level indicator reset");
        self.redraw.request_redraw();
    }

    /// Select the active or inactive foreground color. Takes effect on the next paint.
    pub fn set_active(&mut self, active: bool) {
        self.state.active = active;
    }

    /// Select the scaling mode for subsequent levels.
    ///
    /// Note the inverted sense: `true` selects the linear mapping, `false` the curve.
    /// Stored positions are not rescaled.
    pub fn set_logarithmic(&mut self, logarithmic: bool) {
        self.scale.set_logarithmic(logarithmic);
    }

    /// Change the raw level that maps to `SCALE_MAX`.
    ///
    /// Both stored positions are rescaled by feeding their normalized values back through the
    /// new scale. The raw levels are not retained so repeated changes accumulate rounding.
    ///
    /// Fails with [`IndicatorError::InvalidConfiguration`](crate::IndicatorError) when `level`
    /// is zero, leaving the indicator unchanged.
    pub fn set_maximum_level(&mut self, level: u32) -> Result<()> {
        let maximum = LevelScale::validate_maximum(level)?;
        if maximum.get() == self.scale.maximum_level() {
            return Ok(());
        }

        self.scale.set_maximum_level(maximum);
        self.state.marker_position = self.scale.scale_level(self.state.marker_position);
        self.state.current_position = self.scale.scale_level(self.state.current_position);
        debug!(
            "maximum level set to {}: marker={}, current={}",
            level, self.state.marker_position, self.state.current_position
        );
        self.redraw.request_redraw();
        Ok(())
    }

    /// Set the marker threshold from a raw level.
    pub fn set_marker_level(&mut self, level: u32) {
        let position = self.scale.scale_level(level);
        if self.state.marker_position == position {
            return;
        }

        self.state.marker_position = position;
        self.redraw.request_redraw();
    }

    /// Set the current level from a raw level.
    pub fn set_current_level(&mut self, level: u32) {
        let position = self.scale.scale_level(level);
        if self.state.current_position == position {
            return;
        }

        self.state.current_position = position;
        self.redraw.request_redraw();
    }

    /// Raw level that maps to `SCALE_MAX`.
    pub fn maximum_level(&self) -> u32 {
        self.scale.maximum_level()
    }

    /// Normalized marker position in `[0, SCALE_MAX]`.
    pub fn marker_position(&self) -> u32 {
        self.state.marker_position
    }

    /// Normalized current position in `[0, SCALE_MAX]`.
    pub fn current_position(&self) -> u32 {
        self.state.current_position
    }

    /// Whether the active foreground color is used.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Whether the linear mapping is selected (see [`LevelIndicator::set_logarithmic`]).
    pub fn is_logarithmic(&self) -> bool {
        self.scale.is_logarithmic()
    }

    /// Snapshot of the normalized state.
    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// The redraw hook.
    pub fn redraw(&self) -> &R {
        &self.redraw
    }

    /// The redraw hook, mutably, e.g. to [`RedrawFlag::take`] a pending request.
    pub fn redraw_mut(&mut self) -> &mut R {
        &mut self.redraw
    }
}
