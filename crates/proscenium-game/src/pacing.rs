use std::time::Duration;

use thiserror::Error;

/// Frame-rate cap.
///
/// `limit_fps == 0` disables pacing. Otherwise the frame budget is
/// `1000 / limit_fps` milliseconds, floored: 3 fps gives a 333 ms budget,
/// slightly faster than a true 3 fps.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FpsLimit {
    limit_fps: u32,
    max_frame_millis: u64,
}

impl FpsLimit {
    pub fn new(fps: u32) -> Self {
        if fps == 0 {
            Self::disabled()
        } else {
            Self {
                limit_fps: fps,
                max_frame_millis: 1000 / u64::from(fps),
            }
        }
    }

    pub const fn disabled() -> Self {
        Self {
            limit_fps: 0,
            max_frame_millis: 0,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.limit_fps > 0
    }

    pub fn limit_fps(&self) -> u32 {
        self.limit_fps
    }

    pub fn max_frame_millis(&self) -> u64 {
        self.max_frame_millis
    }

    /// Delay left in the frame budget after `elapsed` of work.
    ///
    /// `None` when pacing is disabled or the frame already used its budget.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        if !self.is_enabled() {
            return None;
        }

        Duration::from_millis(self.max_frame_millis)
            .checked_sub(elapsed)
            .filter(|d| !d.is_zero())
    }
}

#[derive(Debug, Error)]
pub enum PacingError {
    #[error("pacing sleep interrupted: {0}")]
    Interrupted(String),
}

/// Blocks the render thread to hold the frame rate down.
///
/// Failures are best-effort: the caller logs them and carries on with the frame.
pub trait Pacer {
    fn sleep(&mut self, duration: Duration) -> Result<(), PacingError>;
}

/// Sleeps the calling thread.
#[derive(Debug, Default, Copy, Clone)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) -> Result<(), PacingError> {
        std::thread::sleep(duration);
        Ok(())
    }
}
