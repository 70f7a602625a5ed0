use proscenium_engine::core::Canvas;
use proscenium_engine::paint::Color;
use proscenium_game::{EventPayload, Stage, StageControl};

use super::status_change;

/// Seconds before the title hands over to the arena.
const HOLD_SECS: f32 = 3.0;

/// Slow breathing between two blues.
#[derive(Debug, Default)]
pub struct TitleStage {
    elapsed: f32,
    handed_over: bool,
}

impl Stage for TitleStage {
    fn create(&mut self) {
        log::info!("title: press nothing, the arena opens in {HOLD_SECS}s");
    }

    fn update(&mut self, delta: f32, ctl: &mut StageControl<'_>) {
        self.elapsed += delta;

        if !self.handed_over && self.elapsed >= HOLD_SECS {
            self.handed_over = ctl.load_stage("arena");
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let t = 0.5 + 0.5 * (self.elapsed * std::f32::consts::PI).sin();
        let deep = Color::from_srgb_u8(10, 20, 60, 255);
        let light = Color::from_srgb_u8(40, 90, 180, 255);
        canvas.clear(deep.lerp(light, t));
    }

    fn trigger_event(&mut self, name: &str, payload: &EventPayload) {
        if let Some(status) = status_change(name, payload) {
            log::info!("title: engine is now {status}");
        }
    }
}
