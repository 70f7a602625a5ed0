//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the game layer. It keeps winit and wgpu types out of game code and gives
//! every frame a consistent context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{Canvas, FrameCtx};
