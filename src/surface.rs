use ratatui::{layout::Rect, style::Color};

/// A 2D drawing target supplied by the host for the duration of one paint.
pub trait Surface {
    /// Outline `rect` with a one unit wide border.
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Fill the whole of `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    StrokeRect { rect: Rect, color: Color },
    FillRect { rect: Rect, color: Color },
}

impl DrawCommand {
    /// Replay this call onto a surface.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match *self {
            DrawCommand::StrokeRect { rect, color } => surface.stroke_rect(rect, color),
            DrawCommand::FillRect { rect, color } => surface.fill_rect(rect, color),
        }
    }
}

/// Records draw calls instead of executing them.
impl Surface for Vec<DrawCommand> {
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::StrokeRect { rect, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }
}
