//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and maps
//! window events onto the `core::App` lifecycle.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
