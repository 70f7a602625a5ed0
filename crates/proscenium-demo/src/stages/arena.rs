use proscenium_engine::core::Canvas;
use proscenium_engine::paint::Color;
use proscenium_game::{EngineStatus, EventPayload, Stage, StageControl};

use super::status_change;

const ROUND_SECS: f32 = 6.0;
/// Point in the round where time slows down.
const SLOW_MOTION_AT: f32 = 3.0;

/// Cycles through hues; the second half of the round runs in slow motion.
#[derive(Debug, Default)]
pub struct ArenaStage {
    elapsed: f32,
    frames: u64,
    paused: bool,
    size: (u32, u32),
}

impl ArenaStage {
    fn hue_color(&self) -> Color {
        let h = (self.elapsed / ROUND_SECS).fract() * 6.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        Color::from_straight(r * 0.6, g * 0.6, b * 0.6, 1.0)
    }
}

impl Stage for ArenaStage {
    fn create(&mut self) {
        log::info!("arena: round starts");
    }

    fn update(&mut self, delta: f32, ctl: &mut StageControl<'_>) {
        self.elapsed += delta;
        self.frames += 1;

        if self.elapsed >= SLOW_MOTION_AT && ctl.time_scale() == 1.0 {
            log::info!("arena: slow motion");
            ctl.set_time_scale(0.5);
        }

        if self.elapsed >= ROUND_SECS && ctl.pending_stage().is_none() {
            ctl.load_stage("outro");
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let color = if self.paused { Color::BLACK } else { self.hue_color() };
        canvas.clear(color);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn dispose(&mut self) {
        log::info!(
            "arena: round over after {} frames at {}x{}",
            self.frames,
            self.size.0,
            self.size.1
        );
    }

    fn trigger_event(&mut self, name: &str, payload: &EventPayload) {
        match status_change(name, payload) {
            Some(EngineStatus::Pause) => self.paused = true,
            Some(EngineStatus::Resume | EngineStatus::Run) => self.paused = false,
            _ => {}
        }
    }
}
