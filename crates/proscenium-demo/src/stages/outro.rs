use proscenium_engine::core::Canvas;
use proscenium_engine::paint::Color;
use proscenium_game::{Stage, StageControl};

const FADE_SECS: f32 = 1.5;

/// Fades to black, then asks the runtime to quit.
#[derive(Debug, Default)]
pub struct OutroStage {
    elapsed: f32,
}

impl Stage for OutroStage {
    fn update(&mut self, delta: f32, ctl: &mut StageControl<'_>) {
        // Undo the arena's slow motion.
        if self.elapsed == 0.0 {
            ctl.set_time_scale(1.0);
        }

        self.elapsed += delta;
        if self.elapsed >= FADE_SECS {
            ctl.exit();
        }
    }

    fn render(&mut self, canvas: &mut dyn Canvas) {
        let warm = Color::from_srgb_u8(200, 120, 40, 255);
        canvas.clear(warm.lerp(Color::BLACK, self.elapsed / FADE_SECS));
    }
}
