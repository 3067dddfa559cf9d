//! Enemy state. Movement and attacks live in the simulation; this type
//! only owns the per-enemy data and the damage rule.
use raylib::prelude::Vector2;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vector2,
    pub health: i32,
    pub alive: bool,
    /// Ticks until the next contact attack is allowed.
    pub attack_cooldown: u32,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            health: 50,
            alive: true,
            attack_cooldown: 0,
        }
    }

    /// Dead enemies ignore further damage; the alive flag flips at most
    /// once.
    pub fn take_damage(&mut self, amount: i32) {
        if !self.alive {
            return;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dies_exactly_on_the_killing_hit() {
        let mut e = Enemy::new(5.5, 5.5);
        e.take_damage(25);
        assert!(e.alive);
        assert_eq!(e.health, 25);
        e.take_damage(25);
        assert!(!e.alive);
        assert!(e.health <= 0);
    }

    #[test]
    fn damage_after_death_is_ignored() {
        let mut e = Enemy::new(5.5, 5.5);
        e.take_damage(60);
        assert!(!e.alive);
        let frozen = e.health;
        e.take_damage(25);
        assert_eq!(e.health, frozen);
        assert!(!e.alive);
    }
}
