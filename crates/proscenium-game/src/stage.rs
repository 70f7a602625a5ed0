use proscenium_engine::core::Canvas;

use crate::control::StageControl;
use crate::status::EngineStatus;

/// Name of the event broadcast to the active stage on every status change.
pub const STATUS_EVENT: &str = "game:status";

/// Payload attached to a stage event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    None,
    Status(EngineStatus),
    Text(String),
    Json(serde_json::Value),
}

/// A self-contained unit of game content (title screen, level, menu, ...).
///
/// The engine owns the active stage and calls these hooks in order:
/// `create` once, then any number of `update`/`render`/`resize`/`pause`/
/// `resume`, then `dispose` once. A disposed stage is dropped, never reused.
///
/// A stage that was built but replaced before activation is dropped without
/// `create` or `dispose` being called; keep resource acquisition in `create`.
pub trait Stage {
    /// Acquire resources. Runs before the first `update`.
    fn create(&mut self) {}

    /// Advance the simulation by `delta` seconds (already time-scaled).
    fn update(&mut self, delta: f32, ctl: &mut StageControl<'_>);

    fn render(&mut self, canvas: &mut dyn Canvas);

    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    /// Release resources. The next stage's `create` runs only after this returns.
    fn dispose(&mut self) {}

    /// Receives engine and user events, e.g. [`STATUS_EVENT`].
    fn trigger_event(&mut self, name: &str, payload: &EventPayload) {
        let _ = (name, payload);
    }
}

/// Factory producing fresh stage instances.
pub trait StageBuilder {
    fn build(&self) -> Box<dyn Stage>;
}

impl<F> StageBuilder for F
where
    F: Fn() -> Box<dyn Stage>,
{
    fn build(&self) -> Box<dyn Stage> {
        self()
    }
}
