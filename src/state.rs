/// Normalized state of a [`LevelIndicator`](crate::LevelIndicator).
///
/// The state consists of:
/// - [`marker_position`]: the threshold marker, in `[0, SCALE_MAX]`
/// - [`current_position`]: the right edge of the filled bar, in `[0, SCALE_MAX]`
/// - [`active`]: selects the active or inactive foreground color
///
/// Raw levels are not retained, only their normalized positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorState {
    pub marker_position: u32,
    pub current_position: u32,
    pub active: bool,
}
