//! Simulation and view configuration. Everything that used to be a
//! module-level constant is injected here, so several simulations can
//! coexist (the tests do exactly that).
use std::f32::consts::FRAC_PI_3;

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: u32,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Enemy speed in world units per second.
    pub enemy_speed: f32,
    /// No two live actors come closer than this, in world units.
    pub min_separation: f32,
    /// Contact attacks reach this far.
    pub attack_range: f32,
    pub contact_damage: i32,
    pub attack_cooldown_ticks: u32,
    /// Hit-scan aim cone half-angle, radians.
    pub aim_cone: f32,
    pub weapon_range: f32,
    pub shot_damage: i32,
    pub max_ray_depth: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            player_speed: 3.0,
            enemy_speed: 1.2,
            min_separation: 0.3,
            attack_range: 0.3,
            contact_damage: 10,
            attack_cooldown_ticks: 60,
            aim_cone: 0.1,
            weapon_range: 10.0,
            shot_damage: 25,
            max_ray_depth: 20.0,
        }
    }
}

impl SimConfig {
    /// Fixed step duration in seconds.
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

/// Projection parameters. The field of view is fixed; column count and
/// screen size follow the window, and the per-ray angular increment is
/// recomputed here because ray casting depends on it.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fov: f32,
    pub num_columns: u32,
    pub delta_angle: f32,
}

impl ViewConfig {
    pub fn new(width: u32, height: u32) -> Self {
        let mut view = Self {
            screen_width: width,
            screen_height: height,
            fov: FRAC_PI_3,
            num_columns: 1,
            delta_angle: 0.0,
        };
        view.resize(width, height);
        view
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        // one ray per pixel column, capped for wide windows
        self.num_columns = width.clamp(1, 800);
        self.delta_angle = self.fov / self.num_columns as f32;
    }
}
