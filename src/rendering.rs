use ratatui::prelude::{symbols, Buffer, Color, Rect, Widget};

use crate::constants::SCALE_MAX;
use crate::indicator::LevelIndicator;
use crate::redraw::RedrawRequest;
use crate::surface::{DrawCommand, Surface};

impl<R: RedrawRequest> Widget for LevelIndicator<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl<R: RedrawRequest> Widget for &LevelIndicator<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.paint(&mut ClippedBuffer::new(buf, area), area);
    }
}

impl<R: RedrawRequest> LevelIndicator<R> {
    /// Issue the draw calls for the current state onto `surface`, within `bounds`.
    ///
    /// The bar is filled from the left up to the current position. A marker ahead of the fill is
    /// drawn as a foreground tick; a marker inside the fill is cut out as a background notch.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, bounds: Rect) {
        let foreground = self.palette.foreground(self.state.active);

        // --- OUTLINE ---
        surface.stroke_rect(bounds, self.palette.outline);

        let inner_y = bounds.y.saturating_add(1);
        let inner_height = bounds.height.saturating_sub(1);

        // --- LEVEL BAR ---
        let level = Self::pixel_offset(self.state.current_position, bounds.width);
        if level > 0 {
            surface.fill_rect(
                Rect {
                    x: bounds.x.saturating_add(1),
                    y: inner_y,
                    width: level.saturating_add(1),
                    height: inner_height,
                },
                foreground,
            );
        }

        // --- MARKER ---
        if self.state.marker_position > 0 {
            let mark = Self::pixel_offset(self.state.marker_position, bounds.width);
            let color = if mark < level {
                self.palette.background
            } else {
                foreground
            };
            surface.fill_rect(
                Rect {
                    x: bounds.x.saturating_add(mark),
                    y: inner_y,
                    width: 2,
                    height: inner_height.saturating_sub(1),
                },
                color,
            );
        }
    }

    /// The draw calls [`LevelIndicator::paint`] would issue, in order.
    pub fn draw_commands(&self, bounds: Rect) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        self.paint(&mut commands, bounds);
        commands
    }

    fn pixel_offset(position: u32, width: u16) -> u16 {
        // position <= SCALE_MAX, so the result never exceeds width
        (position * u32::from(width) / SCALE_MAX) as u16
    }
}

/// A [`Buffer`] surface that only paints cells inside `clip`.
///
/// The fill and the marker may extend up to two cells past the right edge of the bounds, so
/// widget rendering clips to the area it was given.
pub struct ClippedBuffer<'a> {
    buf: &'a mut Buffer,
    clip: Rect,
}

impl<'a> ClippedBuffer<'a> {
    pub fn new(buf: &'a mut Buffer, clip: Rect) -> Self {
        let clip = clip.intersection(buf.area);
        Self { buf, clip }
    }
}

impl Surface for ClippedBuffer<'_> {
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        paint_cells(self.buf, rect, self.clip, color, true);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        paint_cells(self.buf, rect, self.clip, color, false);
    }
}

/// Paints cells with a full block at terminal cell resolution, clipped to the buffer area.
impl Surface for Buffer {
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let clip = self.area;
        paint_cells(self, rect, clip, color, true);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let clip = self.area;
        paint_cells(self, rect, clip, color, false);
    }
}

fn paint_cells(buf: &mut Buffer, rect: Rect, clip: Rect, color: Color, edges_only: bool) {
    let area = rect.intersection(clip);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let on_edge = x == rect.left()
                || x == rect.right() - 1
                || y == rect.top()
                || y == rect.bottom() - 1;
            if !edges_only || on_edge {
                buf[(x, y)].set_symbol(symbols::block::FULL).set_fg(color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IndicatorConfig, Palette};
    use crate::constants::{ACTIVE_COLOR, BACKGROUND_COLOR, INACTIVE_COLOR, OUTLINE_COLOR};

    /// Linear indicator whose positions equal the raw levels.
    fn identity_indicator() -> LevelIndicator {
        LevelIndicator::from_config(IndicatorConfig {
            maximum_level: SCALE_MAX,
            logarithmic: true,
            palette: Palette::default(),
        })
        .unwrap()
    }

    fn bounds() -> Rect {
        Rect::new(0, 0, 100, 10)
    }

    fn outline(rect: Rect) -> DrawCommand {
        DrawCommand::StrokeRect {
            rect,
            color: OUTLINE_COLOR,
        }
    }

    #[test]
    fn empty_indicator_draws_outline_only() {
        let indicator = LevelIndicator::new();
        assert_eq!(indicator.draw_commands(bounds()), vec![outline(bounds())]);
    }

    #[test]
    fn half_scale_fill_width() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(5000);

        let commands = indicator.draw_commands(bounds());

        assert_eq!(
            commands,
            vec![
                outline(bounds()),
                DrawCommand::FillRect {
                    rect: Rect::new(1, 1, 51, 9),
                    color: INACTIVE_COLOR,
                },
            ]
        );
    }

    #[test]
    fn active_flag_selects_fill_color() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(5000);
        indicator.set_active(true);

        let commands = indicator.draw_commands(bounds());

        assert!(matches!(
            commands[1],
            DrawCommand::FillRect { color, .. } if color == ACTIVE_COLOR
        ));
    }

    #[test]
    fn marker_inside_fill_is_a_notch() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(8000);
        indicator.set_marker_level(3000);

        let commands = indicator.draw_commands(bounds());

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(30, 1, 2, 8),
                color: BACKGROUND_COLOR,
            }
        );
    }

    #[test]
    fn marker_ahead_of_fill_is_a_tick() {
        let mut indicator = identity_indicator();
        indicator.set_active(true);
        indicator.set_current_level(5000);
        indicator.set_marker_level(9000);

        let commands = indicator.draw_commands(bounds());

        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(90, 1, 2, 8),
                color: ACTIVE_COLOR,
            }
        );
    }

    #[test]
    fn marker_at_fill_edge_is_a_tick() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(5000);
        indicator.set_marker_level(5000);

        let commands = indicator.draw_commands(bounds());

        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(50, 1, 2, 8),
                color: INACTIVE_COLOR,
            }
        );
    }

    #[test]
    fn marker_without_fill() {
        let mut indicator = identity_indicator();
        indicator.set_marker_level(2500);

        let commands = indicator.draw_commands(bounds());

        assert_eq!(
            commands,
            vec![
                outline(bounds()),
                DrawCommand::FillRect {
                    rect: Rect::new(25, 1, 2, 8),
                    color: INACTIVE_COLOR,
                },
            ]
        );
    }

    #[test]
    fn bounds_offset_moves_marker() {
        let mut indicator = identity_indicator();
        indicator.set_marker_level(5000);
        let bounds = Rect::new(10, 4, 40, 3);

        let commands = indicator.draw_commands(bounds);

        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(30, 5, 2, 1),
                color: INACTIVE_COLOR,
            }
        );
    }

    #[test]
    fn degenerate_bounds_do_not_underflow() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(SCALE_MAX);
        indicator.set_marker_level(SCALE_MAX);

        let commands = indicator.draw_commands(Rect::new(0, 0, 10, 0));

        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(1, 1, 11, 0),
                color: INACTIVE_COLOR,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(10, 1, 2, 0),
                color: INACTIVE_COLOR,
            }
        );
    }

    #[test]
    fn render_into_buffer() {
        let mut indicator = identity_indicator();
        indicator.set_active(true);
        indicator.set_current_level(5000);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        Widget::render(&indicator, area, &mut buf);

        // outline
        assert_eq!(buf[(0, 1)].fg, OUTLINE_COLOR);
        assert_eq!(buf[(19, 1)].fg, OUTLINE_COLOR);
        assert_eq!(buf[(15, 0)].fg, OUTLINE_COLOR);
        // bar covers columns 1..=11
        assert_eq!(buf[(1, 1)].symbol(), symbols::block::FULL);
        assert_eq!(buf[(11, 1)].fg, ACTIVE_COLOR);
        assert_eq!(buf[(5, 2)].fg, ACTIVE_COLOR);
        // past the bar the interior is untouched
        assert_eq!(buf[(15, 1)].symbol(), " ");
    }

    #[test]
    fn render_clips_to_buffer() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(SCALE_MAX);
        indicator.set_marker_level(SCALE_MAX);
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        Widget::render(&indicator, area, &mut buf);

        assert_eq!(buf[(7, 1)].fg, INACTIVE_COLOR);
    }

    #[test]
    fn render_stays_inside_widget_area() {
        let mut indicator = identity_indicator();
        indicator.set_current_level(SCALE_MAX);
        indicator.set_marker_level(SCALE_MAX);
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 3));

        Widget::render(&indicator, area, &mut buf);

        for y in 0..3 {
            for x in area.right()..20 {
                assert_eq!(buf[(x, y)].symbol(), " ", "cell ({}, {}) painted", x, y);
            }
        }
        assert_eq!(buf[(9, 1)].fg, INACTIVE_COLOR);
    }

    #[test]
    fn replayed_commands_match_paint() {
        let mut indicator = identity_indicator();
        indicator.set_active(true);
        indicator.set_current_level(7000);
        indicator.set_marker_level(4000);
        let area = Rect::new(0, 0, 30, 4);

        let mut painted = Buffer::empty(area);
        indicator.paint(&mut painted, area);

        let mut replayed = Buffer::empty(area);
        for command in indicator.draw_commands(area) {
            command.apply(&mut replayed);
        }

        assert_eq!(painted, replayed);
    }
}
