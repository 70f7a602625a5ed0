use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Lifecycle contract implemented by the game layer.
///
/// The runtime invokes every hook serially on the event-loop thread:
/// `create` once at startup, then any number of `resize`, `render` (each
/// followed by `frame_presented`), `pause` and `resume`, then `dispose` once
/// at shutdown.
pub trait App {
    /// Called once after the window and GPU surface exist.
    fn create(&mut self);

    /// Called when the drawable size changes, in physical pixels.
    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called once per presented frame.
    fn render(&mut self, frame: &mut FrameCtx<'_>) -> AppControl;

    /// Called after the frame produced by `render` has been presented, or
    /// skipped because the surface was unavailable.
    fn frame_presented(&mut self) {}

    /// Called when the application loses the foreground.
    fn pause(&mut self) {}

    /// Called when the application returns to the foreground.
    fn resume(&mut self) {}

    /// Called once at shutdown. No further hooks run afterwards.
    fn dispose(&mut self);
}
