//! Top-down overview drawn over the 3D frame.
use raylib::prelude::*;

use crate::core::enemy::Enemy;
use crate::core::map::GridMap;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;

const SIZE: i32 = 150;
const MARGIN: i32 = 10;

pub fn draw_minimap(fb: &mut Framebuffer, map: &GridMap, player: &Player, enemies: &[Enemy]) {
    let scale = SIZE as f32 / map.width().max(map.height()) as f32;
    let cell = scale.ceil() as i32;
    let ox = fb.width as i32 - SIZE - MARGIN;
    let oy = MARGIN;

    fb.fill_rect(ox - 2, oy - 2, SIZE + 4, SIZE + 4, Color::BLACK);
    for row in 0..map.height() {
        for col in 0..map.width() {
            if map.is_wall(col, row) {
                fb.fill_rect(
                    ox + (col as f32 * scale) as i32,
                    oy + (row as f32 * scale) as i32,
                    cell,
                    cell,
                    Color::WHITE,
                );
            }
        }
    }

    let px = ox as f32 + player.pos.x * scale;
    let py = oy as f32 + player.pos.y * scale;
    fb.fill_rect(px as i32 - 1, py as i32 - 1, 3, 3, Color::GREEN);
    fb.set_current_color(Color::GREEN);
    for t in 1..=10 {
        let x = px + player.angle.cos() * t as f32;
        let y = py + player.angle.sin() * t as f32;
        fb.set_pixel(x as u32, y as u32);
    }

    for enemy in enemies.iter().filter(|e| e.alive) {
        let ex = ox as f32 + enemy.pos.x * scale;
        let ey = oy as f32 + enemy.pos.y * scale;
        fb.fill_rect(ex as i32 - 1, ey as i32 - 1, 2, 2, Color::RED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimap_marks_the_player_cell() {
        let map = GridMap::default_arena();
        let player = Player::new(1.5, 1.5, 0.0);
        let mut fb = Framebuffer::new(400, 300);
        draw_minimap(&mut fb, &map, &player, &[]);
        let scale = SIZE as f32 / 10.0;
        let px = (400 - SIZE - MARGIN) as f32 + 1.5 * scale;
        let py = MARGIN as f32 + 1.5 * scale;
        assert_eq!(fb.get_pixel(px as u32, py as u32), Color::GREEN);
    }
}
