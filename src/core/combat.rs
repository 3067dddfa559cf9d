//! Hit-scan fire resolution.
use crate::core::config::SimConfig;
use crate::core::enemy::Enemy;
use crate::core::geometry::{line_of_sight, normalize_angle_delta};
use crate::core::map::GridMap;
use crate::core::player::Player;

/// Resolve one fire request. With ammo left, exactly one round is spent
/// whatever the outcome; with none, nothing happens. The closest live
/// enemy inside the aim cone, inside weapon range and with a clear line
/// of sight takes the hit.
pub fn shoot(map: &GridMap, player: &mut Player, enemies: &mut [Enemy], cfg: &SimConfig) -> bool {
    if !player.spend_ammo() {
        return false;
    }

    let mut target: Option<usize> = None;
    let mut best = cfg.weapon_range;
    for (i, enemy) in enemies.iter().enumerate() {
        if !enemy.alive {
            continue;
        }
        let dx = enemy.pos.x - player.pos.x;
        let dy = enemy.pos.y - player.pos.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= best {
            continue;
        }
        let offset = normalize_angle_delta(dy.atan2(dx) - player.angle);
        if offset.abs() >= cfg.aim_cone {
            continue;
        }
        if !line_of_sight(map, player.pos, enemy.pos) {
            continue;
        }
        best = dist;
        target = Some(i);
    }

    match target {
        Some(i) => {
            enemies[i].take_damage(cfg.shot_damage);
            true
        }
        None => false,
    }
}
