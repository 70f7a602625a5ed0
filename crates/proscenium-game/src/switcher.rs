use crate::registry::StageRegistry;
use crate::stage::Stage;

/// A built stage waiting for the next frame boundary.
pub struct PendingStage {
    pub name: String,
    pub stage: Box<dyn Stage>,
}

/// Registry plus the single pending-swap slot.
///
/// Requests only fill the slot; the loop driver empties it at the top of the
/// next frame, so a stage never changes under a running update or render.
pub struct StageSwitcher {
    registry: StageRegistry,
    pending: Option<PendingStage>,
}

impl StageSwitcher {
    pub fn new(registry: StageRegistry) -> Self {
        Self {
            registry,
            pending: None,
        }
    }

    pub fn registry(&self) -> &StageRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut StageRegistry {
        &mut self.registry
    }

    /// Builds the stage registered under `name` and queues it.
    ///
    /// Returns `false`, leaving the slot untouched, when `name` is unknown.
    /// A stage already queued is dropped without `create` or `dispose`.
    pub fn request(&mut self, name: &str) -> bool {
        let Some(stage) = self.registry.build(name) else {
            log::warn!("cannot load stage `{name}`: no builder registered");
            return false;
        };

        let previous = self.pending.replace(PendingStage {
            name: name.to_string(),
            stage,
        });

        if let Some(previous) = previous {
            log::debug!("stage `{}` superseded by `{name}` before activation", previous.name);
        }
        log::debug!("stage `{name}` queued for next frame");
        true
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.name.as_str())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Removes and returns the queued stage, leaving the slot empty.
    pub fn take_pending(&mut self) -> Option<PendingStage> {
        self.pending.take()
    }
}
