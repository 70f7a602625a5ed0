use std::path::PathBuf;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use proscenium_engine::device::GpuInit;
use proscenium_engine::logging::{init_logging, LoggingConfig};
use proscenium_engine::window::{Runtime, RuntimeConfig};
use proscenium_game::{Game, GameConfig, StageRegistry};

mod stages;

const DEFAULT_CONFIG: &str = "config.json";
const DEFAULT_STAGE: &str = "title";

fn main() -> Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    // Logging depends on the config, so a missing file is reported afterwards.
    let (config, found) = match GameConfig::from_path(&path) {
        Ok(config) => (config, true),
        Err(e) if e.is_not_found() => (GameConfig::default(), false),
        Err(e) => return Err(e).with_context(|| format!("failed to load {}", path.display())),
    };

    init_logging(LoggingConfig::with_filter(config.log_filter.clone()));

    if !found {
        log::warn!("{} not found, using default configuration", path.display());
    }

    let mut registry = StageRegistry::new();
    stages::register_all(&mut registry);

    let initial = config.initial_stage.as_deref().unwrap_or(DEFAULT_STAGE);
    let game = Game::new(registry, initial, &config)?;

    let runtime = RuntimeConfig {
        title: config.window.title.clone(),
        initial_size: LogicalSize::new(config.window.width, config.window.height),
    };

    // With a frame cap the game paces itself; vsync would stack a second limit on top.
    let gpu_init = GpuInit {
        present_mode: if config.fps_limit > 0 {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        },
        ..GpuInit::default()
    };

    Runtime::run(runtime, gpu_init, game)
}
