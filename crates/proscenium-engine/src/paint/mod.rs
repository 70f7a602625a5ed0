//! Color model shared between the game layer and the runtime.

pub mod color;

pub use color::Color;
