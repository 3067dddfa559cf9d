//! Enemy billboards: view-cone cull, painter's sort, projection.
//!
//! Sprites draw after the wall pass and are ordered far to near among
//! themselves; no depth buffer is involved.
use raylib::prelude::*;

use crate::core::config::ViewConfig;
use crate::core::enemy::Enemy;
use crate::core::geometry::normalize_angle_delta;
use crate::core::player::Player;
use crate::render::frame::{shade, DrawRect};

/// Extra margin past the view cone so sprites don't pop at the edge.
const CONE_MARGIN: f32 = 0.5;
/// Distance floor, mirroring the wall pass.
const MIN_DIST: f32 = 0.1;
/// Brightness falls off faster for sprites than for walls.
const SPRITE_FALLOFF: f32 = 30.0;

#[derive(Debug, Clone, Copy)]
pub struct SpriteQuad {
    pub dist: f32,
    /// Horizontal screen center, pixels.
    pub screen_x: f32,
    /// Square side, pixels.
    pub size: f32,
    pub body: Color,
    pub head: Color,
}

/// Project every live enemy inside the widened view cone, farthest
/// first.
pub fn visible_sprites(player: &Player, enemies: &[Enemy], view: &ViewConfig) -> Vec<SpriteQuad> {
    let sw = view.screen_width as f32;
    let sh = view.screen_height as f32;

    let mut quads = Vec::new();
    for enemy in enemies.iter().filter(|e| e.alive) {
        let dx = enemy.pos.x - player.pos.x;
        let dy = enemy.pos.y - player.pos.y;
        let offset = normalize_angle_delta(dy.atan2(dx) - player.angle);
        if offset.abs() >= view.fov * 0.5 + CONE_MARGIN {
            continue;
        }
        let dist = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
        let b = shade(dist, SPRITE_FALLOFF);
        quads.push(SpriteQuad {
            dist,
            screen_x: (view.fov * 0.5 + offset) / view.fov * sw,
            size: (sh / dist).min(sh),
            body: Color::new(b, 0, 0, 255),
            head: Color::new(b, b / 2, 0, 255),
        });
    }
    quads.sort_by(|a, b| b.dist.partial_cmp(&a.dist).unwrap_or(std::cmp::Ordering::Equal));
    quads
}

impl SpriteQuad {
    /// Body slab plus a head block, as flat fill primitives.
    pub fn rects(&self, view: &ViewConfig) -> [DrawRect; 2] {
        let sh = view.screen_height as i32;
        let size = self.size as i32;
        let x = (self.screen_x - self.size * 0.5) as i32;
        let y = (sh - size) / 2;
        let head = (size / 4).max(1);
        [
            DrawRect { x, y, w: size, h: size, color: self.body },
            DrawRect {
                x: (self.screen_x - head as f32 * 0.5) as i32,
                y,
                w: head,
                h: head,
                color: self.head,
            },
        ]
    }
}
