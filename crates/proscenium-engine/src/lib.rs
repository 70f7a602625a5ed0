//! Proscenium engine crate.
//!
//! Host-side runtime for the game shell: window + event loop, GPU surface,
//! frame timing and logging. Game logic plugs in through [`core::App`].

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod logging;
pub mod paint;
