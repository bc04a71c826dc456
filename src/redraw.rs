/// Host hook asked to schedule a repaint whenever the indicator's visible state changes.
///
/// Requests are fire-and-forget. Closures implement this trait, so a host can pass
/// anything from an event-loop waker to a plain counter.
pub trait RedrawRequest {
    fn request_redraw(&mut self);
}

impl<F: FnMut()> RedrawRequest for F {
    fn request_redraw(&mut self) {
        (*self)()
    }
}

/// Default hook: coalesces any number of requests into one pending flag.
///
/// Hosts that redraw on their own schedule call [`RedrawFlag::take`] before drawing a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawFlag {
    pending: bool,
}

impl RedrawFlag {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns whether a redraw was requested and clears the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl RedrawRequest for RedrawFlag {
    fn request_redraw(&mut self) {
        self.pending = true;
    }
}
