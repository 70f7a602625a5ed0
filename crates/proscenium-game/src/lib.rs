//! Proscenium game layer.
//!
//! A [`Game`] owns exactly one active [`Stage`] and drives it from the engine's
//! lifecycle callbacks. Stages are built on demand from builders registered in
//! a [`StageRegistry`] and swapped in at the top of the next frame.
//!
//! ```rust,ignore
//! let mut registry = StageRegistry::new();
//! registry.register("title", || Box::new(TitleStage::default()) as Box<dyn Stage>);
//! registry.register("level", || Box::new(LevelStage::default()) as Box<dyn Stage>);
//!
//! let game = Game::new(registry, "title", &GameConfig::default())?;
//! Runtime::run(RuntimeConfig::default(), GpuInit::default(), game)?;
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod game;
pub mod pacing;
pub mod perf;
pub mod registry;
pub mod stage;
pub mod status;
pub mod switcher;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, GameConfig, WindowConfig};
pub use control::StageControl;
pub use error::GameError;
pub use game::{Game, CLEAR_SENTINEL};
pub use pacing::{FpsLimit, Pacer, PacingError, ThreadPacer};
pub use perf::{FrameCounters, PerfCounter};
pub use registry::StageRegistry;
pub use stage::{EventPayload, Stage, StageBuilder, STATUS_EVENT};
pub use status::EngineStatus;
pub use switcher::{PendingStage, StageSwitcher};
