//! Rendering: CPU framebuffer, wall and sprite passes, composition.
//!
//! Re-exports:
//! - `framebuffer`: CPU pixel buffer and texture upload
//! - `frame`: flat draw primitives, HUD snapshot, rasterizer
//! - `render3d`: wall pass and frame composition
//! - `sprites`: enemy billboards (painter's order)
//! - `minimap`: top-down overview

pub mod frame;
pub mod framebuffer;
pub mod minimap;
pub mod render3d;
pub mod sprites;
