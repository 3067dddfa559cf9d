//! Flat draw primitives and frame rasterization.
//!
//! The renderer is pure: it turns simulation state into an ordered list
//! of filled rectangles plus a HUD snapshot. Painting that list into the
//! CPU framebuffer happens here, nowhere else.
use raylib::prelude::Color;

use crate::render::framebuffer::Framebuffer;

#[derive(Debug, Clone, Copy)]
pub struct DrawRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub color: Color,
}

/// Minimal state snapshot for HUD text; the core renders no text itself.
#[derive(Debug, Clone, Copy)]
pub struct HudSnapshot {
    pub health: i32,
    pub ammo: i32,
    pub enemies_alive: usize,
}

#[derive(Debug, Clone)]
pub struct Frame {
    /// Back-to-front draw order; earlier rects are painted over.
    pub rects: Vec<DrawRect>,
    pub hud: HudSnapshot,
}

/// Linear distance falloff into an 8-bit shade.
#[inline]
pub fn shade(depth: f32, falloff: f32) -> u8 {
    (255.0 - depth * falloff).clamp(0.0, 255.0) as u8
}

/// Paint a composed frame into the framebuffer, in order.
pub fn rasterize(fb: &mut Framebuffer, frame: &Frame) {
    for r in &frame.rects {
        fb.fill_rect(r.x, r.y, r.w, r.h, r.color);
    }
}
