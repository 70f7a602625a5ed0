//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - clearing and presenting one frame per redraw

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuInit, SurfaceErrorAction};
