//! Wall pass and frame composition (flat-shaded columns, sky/ground).
use raylib::prelude::*;

use crate::core::config::ViewConfig;
use crate::core::enemy::Enemy;
use crate::core::geometry::cast_ray;
use crate::core::map::GridMap;
use crate::core::player::Player;
use crate::render::frame::{shade, DrawRect, Frame, HudSnapshot};
use crate::render::sprites;

const SKY: Color = Color::new(64, 64, 64, 255);
const GROUND: Color = Color::new(128, 128, 128, 255);

/// Depth floor so the projection cannot blow up at point blank.
const MIN_DEPTH: f32 = 0.1;
/// Brightness falloff per world unit for walls.
const WALL_FALLOFF: f32 = 25.0;

/// One screen column of wall: perpendicular depth, projected height,
/// flat shade.
#[derive(Debug, Clone, Copy)]
pub struct RenderColumn {
    pub depth: f32,
    pub height: f32,
    pub color: Color,
}

/// Cast one ray per view column and project a wall slice for each.
/// Depth is perpendicular (fisheye-corrected against the view axis).
pub fn wall_columns(
    map: &GridMap,
    player: &Player,
    view: &ViewConfig,
    max_depth: f32,
) -> Vec<RenderColumn> {
    let sh = view.screen_height as f32;
    let mut columns = Vec::with_capacity(view.num_columns as usize);
    for i in 0..view.num_columns {
        let ray_angle = player.angle - view.fov * 0.5 + i as f32 * view.delta_angle;
        let hit = cast_ray(map, player.pos, ray_angle, max_depth);
        let depth = (hit.depth * (ray_angle - player.angle).cos()).max(MIN_DEPTH);
        let height = (sh / depth).min(sh * 2.0);
        let b = shade(depth, WALL_FALLOFF);
        columns.push(RenderColumn {
            depth,
            height,
            color: Color::new(b, b / 2, b / 2, 255),
        });
    }
    columns
}

/// Compose a full frame: sky and ground halves, wall columns, then enemy
/// billboards back to front. Pure with respect to all of its inputs.
pub fn compose(
    map: &GridMap,
    player: &Player,
    enemies: &[Enemy],
    view: &ViewConfig,
    max_depth: f32,
) -> Frame {
    let sw = view.screen_width as i32;
    let sh = view.screen_height as i32;

    let mut rects = Vec::with_capacity(2 + view.num_columns as usize);
    rects.push(DrawRect { x: 0, y: 0, w: sw, h: sh / 2, color: SKY });
    rects.push(DrawRect { x: 0, y: sh / 2, w: sw, h: sh - sh / 2, color: GROUND });

    let col_w = (view.screen_width / view.num_columns).max(1) as i32;
    for (i, col) in wall_columns(map, player, view, max_depth).iter().enumerate() {
        let h = col.height as i32;
        rects.push(DrawRect {
            x: i as i32 * col_w,
            y: (sh - h) / 2,
            w: col_w + 1, // one extra pixel closes rounding seams
            h,
            color: col.color,
        });
    }

    for quad in sprites::visible_sprites(player, enemies, view) {
        rects.extend(quad.rects(view));
    }

    Frame {
        rects,
        hud: HudSnapshot {
            health: player.health,
            ammo: player.ammo,
            enemies_alive: enemies.iter().filter(|e| e.alive).count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_column_per_view_ray() {
        let map = GridMap::default_arena();
        let player = Player::new(1.5, 1.5, 0.0);
        let view = ViewConfig::new(200, 150);
        let cols = wall_columns(&map, &player, &view, 20.0);
        assert_eq!(cols.len(), 200);
    }

    #[test]
    fn point_blank_depth_is_floored() {
        let map = GridMap::default_arena();
        // nose against the west border wall
        let player = Player::new(1.02, 1.5, std::f32::consts::PI);
        let view = ViewConfig::new(100, 100);
        let cols = wall_columns(&map, &player, &view, 20.0);
        let center = &cols[50];
        assert!(center.depth >= MIN_DEPTH);
        assert!(center.height <= 200.0); // clamped at twice the screen
    }

    #[test]
    fn closer_walls_render_taller_and_brighter() {
        let map = GridMap::default_arena();
        let view = ViewConfig::new(100, 100);
        let near = wall_columns(&map, &Player::new(8.0, 1.5, 0.0), &view, 20.0);
        let far = wall_columns(&map, &Player::new(3.0, 1.5, 0.0), &view, 20.0);
        assert!(near[50].height > far[50].height);
        assert!(near[50].color.r > far[50].color.r);
    }

    #[test]
    fn frame_layers_scene_then_sprites() {
        let map = GridMap::default_arena();
        let player = Player::new(1.5, 1.5, 0.0);
        let enemies = vec![Enemy::new(4.5, 1.5)];
        let view = ViewConfig::new(120, 90);
        let frame = compose(&map, &player, &enemies, &view, 20.0);
        // halves + one rect per column + body and head for the sprite
        assert_eq!(frame.rects.len(), 2 + 120 + 2);
        assert_eq!(frame.hud.enemies_alive, 1);
        assert_eq!(frame.hud.health, 100);
        assert_eq!(frame.hud.ammo, 100);
    }
}
