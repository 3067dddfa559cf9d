//! The per-tick simulation: movement, collision, contact attacks.
//!
//! Resolution order is a contract: the player moves and rotates first,
//! then each enemy in list order, then a pending fire request. Collision
//! checks read whatever positions are current at that point, so the
//! order is observable.
use raylib::prelude::Vector2;

use crate::core::combat;
use crate::core::config::SimConfig;
use crate::core::enemy::Enemy;
use crate::core::input::InputIntent;
use crate::core::map::GridMap;
use crate::core::player::Player;

/// Attack-reach tolerance over `attack_range`: the clamped approach step
/// lands on the boundary only up to float error.
const CONTACT_SLACK: f32 = 1e-3;

/// What one tick did, for glue-side cues (sound, logging). The core
/// itself never acts on this.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickOutcome {
    pub fired: bool,
    pub hit: bool,
    /// Contact damage the player took this tick.
    pub damage_taken: i32,
    /// Enemies that died to this tick's shot.
    pub kills: u32,
}

pub struct Simulation {
    pub map: GridMap,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub config: SimConfig,
    ticks: u64,
}

impl Simulation {
    pub fn new(map: GridMap, spawn: Vector2, config: SimConfig) -> Self {
        Self {
            map,
            player: Player::new(spawn.x, spawn.y, 0.0),
            enemies: Vec::new(),
            config,
            ticks: 0,
        }
    }

    /// Enemies keep their index for life; death only flips the flag.
    pub fn spawn_enemy(&mut self, x: f32, y: f32) {
        self.enemies.push(Enemy::new(x, y));
    }

    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    pub fn cleared(&self) -> bool {
        self.alive_enemies() == 0
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one fixed step.
    pub fn tick(&mut self, intent: &InputIntent) -> TickOutcome {
        let mut out = TickOutcome::default();
        self.player_step(intent);
        out.damage_taken = self.enemy_steps();
        if intent.fire {
            let before = self.alive_enemies();
            out.fired = true;
            out.hit = combat::shoot(&self.map, &mut self.player, &mut self.enemies, &self.config);
            out.kills = (before - self.alive_enemies()) as u32;
        }
        self.ticks += 1;
        out
    }

    fn player_step(&mut self, intent: &InputIntent) {
        self.player.turn(intent.turn);

        let (sin, cos) = self.player.angle.sin_cos();
        let mut dx = intent.forward * cos - intent.strafe * sin;
        let mut dy = intent.forward * sin + intent.strafe * cos;
        let mag = (dx * dx + dy * dy).sqrt();
        if mag <= 0.0 {
            return; // zero intent is a no-op, never an error
        }
        dx /= mag;
        dy /= mag;

        let step = self.config.player_speed * self.config.dt();
        let cand = Vector2::new(self.player.pos.x + dx * step, self.player.pos.y + dy * step);
        if self.blocked_for_player(cand) {
            return;
        }
        self.player.pos = cand;
    }

    fn blocked_for_player(&self, cand: Vector2) -> bool {
        if self.map.is_solid_at(cand.x, cand.y) {
            return true;
        }
        let sep = self.config.min_separation;
        self.enemies
            .iter()
            .any(|e| e.alive && dist(cand, e.pos) < sep)
    }

    /// Move or attack each live enemy in list order. Returns the total
    /// contact damage applied to the player.
    fn enemy_steps(&mut self) -> i32 {
        let dt = self.config.dt();
        let speed = self.config.enemy_speed;
        let attack_range = self.config.attack_range;
        let contact_damage = self.config.contact_damage;
        let cooldown_ticks = self.config.attack_cooldown_ticks;

        let mut damage = 0;
        for idx in 0..self.enemies.len() {
            if !self.enemies[idx].alive {
                continue;
            }
            // the cooldown runs every tick, floored at zero
            self.enemies[idx].attack_cooldown =
                self.enemies[idx].attack_cooldown.saturating_sub(1);

            let pos = self.enemies[idx].pos;
            let dx = self.player.pos.x - pos.x;
            let dy = self.player.pos.y - pos.y;
            let d = (dx * dx + dy * dy).sqrt();

            if d > attack_range + CONTACT_SLACK {
                // Approach, clamped at the attack boundary so the
                // candidate never lands inside the separation radius of
                // the player.
                let step = (speed * dt).min(d - attack_range);
                let cand = Vector2::new(pos.x + dx / d * step, pos.y + dy / d * step);
                if !self.blocked_for_enemy(idx, cand) {
                    self.enemies[idx].pos = cand;
                }
            } else if self.enemies[idx].attack_cooldown == 0 {
                self.player.take_damage(contact_damage);
                damage += contact_damage;
                self.enemies[idx].attack_cooldown = cooldown_ticks;
            }
        }
        damage
    }

    fn blocked_for_enemy(&self, idx: usize, cand: Vector2) -> bool {
        if self.map.is_solid_at(cand.x, cand.y) {
            return true;
        }
        let sep = self.config.min_separation;
        if dist(cand, self.player.pos) < sep {
            return true;
        }
        self.enemies
            .iter()
            .enumerate()
            .any(|(j, e)| j != idx && e.alive && dist(cand, e.pos) < sep)
    }
}

#[inline]
fn dist(a: Vector2, b: Vector2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation {
        Simulation::new(
            GridMap::default_arena(),
            Vector2::new(1.5, 1.5),
            SimConfig::default(),
        )
    }

    #[test]
    fn zero_intent_leaves_the_player_in_place() {
        let mut s = sim();
        let before = s.player.pos;
        let angle = s.player.angle;
        s.tick(&InputIntent::default());
        assert_eq!(s.player.pos.x, before.x);
        assert_eq!(s.player.pos.y, before.y);
        assert_eq!(s.player.angle, angle);
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn walls_reject_the_move() {
        let mut s = sim();
        // walk west into the border for two seconds
        let intent = InputIntent {
            forward: -1.0,
            ..Default::default()
        };
        for _ in 0..120 {
            s.tick(&intent);
        }
        assert!(s.player.pos.x >= 1.0);
        assert!(!s.map.is_solid_at(s.player.pos.x, s.player.pos.y));
    }

    #[test]
    fn live_actors_never_resolve_into_walls() {
        let mut s = sim();
        s.spawn_enemy(8.5, 8.5);
        s.spawn_enemy(5.5, 3.5);
        s.spawn_enemy(3.5, 7.5);
        for i in 0..600u32 {
            let intent = InputIntent {
                forward: if i % 3 == 0 { 1.0 } else { 0.0 },
                strafe: if i % 5 == 0 { -1.0 } else { 0.0 },
                turn: 0.05,
                fire: false,
            };
            s.tick(&intent);
            assert!(!s.map.is_solid_at(s.player.pos.x, s.player.pos.y));
            for e in s.enemies.iter().filter(|e| e.alive) {
                assert!(!s.map.is_solid_at(e.pos.x, e.pos.y));
            }
        }
    }

    #[test]
    fn separation_holds_after_every_movement_pass() {
        let mut s = sim();
        s.spawn_enemy(2.5, 1.5);
        s.spawn_enemy(3.5, 1.5);
        s.spawn_enemy(2.5, 3.5);
        let sep = s.config.min_separation;
        for _ in 0..600 {
            s.tick(&InputIntent::default());
            let mut points: Vec<Vector2> = vec![s.player.pos];
            points.extend(s.enemies.iter().filter(|e| e.alive).map(|e| e.pos));
            for i in 0..points.len() {
                for j in (i + 1)..points.len() {
                    assert!(
                        dist(points[i], points[j]) >= sep - 1e-3,
                        "actors {i} and {j} are {} apart",
                        dist(points[i], points[j])
                    );
                }
            }
        }
    }

    #[test]
    fn enemies_walk_toward_the_player() {
        let mut s = sim();
        s.spawn_enemy(7.5, 1.5); // open row between enemy and player
        let start = dist(s.enemies[0].pos, s.player.pos);
        for _ in 0..60 {
            s.tick(&InputIntent::default());
        }
        let end = dist(s.enemies[0].pos, s.player.pos);
        assert!(end < start - 1.0, "enemy only closed {start} -> {end}");
    }

    #[test]
    fn contact_attack_applies_once_per_cooldown() {
        let mut s = sim();
        s.spawn_enemy(1.7, 1.5); // 0.2 away, inside attack range
        s.tick(&InputIntent::default());
        assert_eq!(s.player.health, 90);
        assert_eq!(s.enemies[0].attack_cooldown, 60);
        for _ in 0..59 {
            s.tick(&InputIntent::default());
        }
        assert_eq!(s.player.health, 90, "cooldown must gate the next hit");
        s.tick(&InputIntent::default());
        assert_eq!(s.player.health, 80);
    }

    #[test]
    fn dead_enemies_neither_move_nor_attack() {
        let mut s = sim();
        s.spawn_enemy(1.7, 1.5);
        s.enemies[0].take_damage(60);
        let frozen = s.enemies[0].pos;
        for _ in 0..120 {
            s.tick(&InputIntent::default());
        }
        assert_eq!(s.player.health, 100);
        assert_eq!(s.enemies[0].pos.x, frozen.x);
        assert_eq!(s.enemies[0].pos.y, frozen.y);
        assert!(s.cleared());
    }

    #[test]
    fn fire_intent_resolves_through_combat() {
        let mut s = sim();
        s.spawn_enemy(5.5, 1.5); // straight ahead along an open row
        let out = s.tick(&InputIntent {
            fire: true,
            ..Default::default()
        });
        assert!(out.fired);
        assert!(out.hit);
        assert_eq!(s.player.ammo, 99);
        assert_eq!(s.enemies[0].health, 25);
    }
}
