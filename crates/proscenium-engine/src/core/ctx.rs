use crate::paint::Color;
use crate::time::FrameTime;

/// Minimal drawing surface handed to the game for one frame.
///
/// The runtime records the requested clear and presents it once the frame
/// callback returns. Later clears within the same frame replace earlier ones.
pub trait Canvas {
    fn clear(&mut self, color: Color);
}

/// Per-frame context passed to `core::App::render`.
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    pub canvas: &'a mut dyn Canvas,
}

impl<'a> FrameCtx<'a> {
    pub fn new(time: FrameTime, canvas: &'a mut dyn Canvas) -> Self {
        Self { time, canvas }
    }
}
