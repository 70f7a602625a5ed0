//! Demo stages: title -> arena -> outro -> exit.

mod arena;
mod outro;
mod title;

use proscenium_game::{EngineStatus, EventPayload, Stage, StageRegistry, STATUS_EVENT};

pub use arena::ArenaStage;
pub use outro::OutroStage;
pub use title::TitleStage;

pub fn register_all(registry: &mut StageRegistry) {
    registry.register("title", || Box::new(TitleStage::default()) as Box<dyn Stage>);
    registry.register("arena", || Box::new(ArenaStage::default()) as Box<dyn Stage>);
    registry.register("outro", || Box::new(OutroStage::default()) as Box<dyn Stage>);
}

/// Extracts the new status from a `game:status` event.
fn status_change(name: &str, payload: &EventPayload) -> Option<EngineStatus> {
    match payload {
        EventPayload::Status(status) if name == STATUS_EVENT => Some(*status),
        _ => None,
    }
}
