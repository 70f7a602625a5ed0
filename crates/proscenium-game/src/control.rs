use crate::config::valid_time_scale;
use crate::pacing::FpsLimit;
use crate::status::EngineStatus;
use crate::switcher::StageSwitcher;

/// Handle through which the active stage steers the engine during `update`.
///
/// Stage loads go straight into the pending slot and take effect at the top of
/// the next frame. Exit is buffered and reported to the runtime once the frame
/// completes.
pub struct StageControl<'a> {
    switcher: &'a mut StageSwitcher,
    time_scale: &'a mut f32,
    fps_limit: &'a mut FpsLimit,
    exit: &'a mut bool,
    status: EngineStatus,
}

impl<'a> StageControl<'a> {
    pub(crate) fn new(
        switcher: &'a mut StageSwitcher,
        time_scale: &'a mut f32,
        fps_limit: &'a mut FpsLimit,
        exit: &'a mut bool,
        status: EngineStatus,
    ) -> Self {
        Self {
            switcher,
            time_scale,
            fps_limit,
            exit,
            status,
        }
    }

    /// Queues the stage registered under `name` for the next frame.
    ///
    /// Returns `false` and changes nothing when the name is unknown.
    pub fn load_stage(&mut self, name: &str) -> bool {
        self.switcher.request(name)
    }

    /// Name of the stage queued for the next frame, if any.
    pub fn pending_stage(&self) -> Option<&str> {
        self.switcher.pending_name()
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn time_scale(&self) -> f32 {
        *self.time_scale
    }

    /// Takes effect from the next update. Negative or non-finite values are ignored.
    pub fn set_time_scale(&mut self, scale: f32) {
        if valid_time_scale(scale) {
            *self.time_scale = scale;
        } else {
            log::warn!("ignoring invalid time scale {scale}");
        }
    }

    pub fn fps_limit(&self) -> FpsLimit {
        *self.fps_limit
    }

    /// Applies to the pacing of the current frame already.
    pub fn set_fps_limit(&mut self, fps: u32) {
        *self.fps_limit = FpsLimit::new(fps);
    }

    /// Asks the runtime to shut down after this frame.
    pub fn exit(&mut self) {
        *self.exit = true;
    }
}
