// main.rs

mod audio;
mod core;
mod render;

use raylib::prelude::*;
use rand::Rng;

use crate::audio::AudioManager;
use crate::core::config::{SimConfig, ViewConfig};
use crate::core::input::InputIntent;
use crate::core::map::GridMap;
use crate::core::sim::Simulation;
use crate::render::frame::{rasterize, HudSnapshot};
use crate::render::framebuffer::Framebuffer;
use crate::render::minimap::draw_minimap;
use crate::render::render3d::compose;

const MAP_PATH: &str = "map.txt";
const MOUSE_SENS: f32 = 0.003;
const PLAYER_SPAWN: (f32, f32) = (1.5, 1.5);

/// Spawn points for the built-in arena.
const ARENA_SPAWNS: [(f32, f32); 5] = [
    (8.5, 8.5),
    (5.5, 3.5),
    (3.5, 7.5),
    (7.5, 6.5),
    (1.5, 5.5),
];

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let (map, custom_map) = load_map();
    log::info!("arena {}x{}", map.width(), map.height());

    let window_width = 800;
    let window_height = 600;
    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title("Gridfire")
        .resizable()
        .build();
    window.disable_cursor();

    let mut view = ViewConfig::new(window_width as u32, window_height as u32);
    let mut sim = Simulation::new(
        map,
        Vector2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        SimConfig::default(),
    );
    if custom_map {
        for (x, y) in scatter_spawns(&sim.map, 5) {
            sim.spawn_enemy(x, y);
        }
    } else {
        for (x, y) in ARENA_SPAWNS {
            sim.spawn_enemy(x, y);
        }
    }
    log::info!("{} enemies spawned", sim.enemies.len());

    let mut framebuffer = Framebuffer::new(view.screen_width, view.screen_height);
    let mut screen_tex = make_screen_texture(&mut window, &raylib_thread, &view);

    let audio = AudioManager::new();
    if audio.is_none() {
        log::warn!("no audio output, running silent");
    }

    let mut accumulator = 0.0f32;
    let mut end_announced = false;

    while !window.window_should_close() {
        if window.is_window_resized() {
            view.resize(
                window.get_screen_width() as u32,
                window.get_screen_height() as u32,
            );
            framebuffer = Framebuffer::new(view.screen_width, view.screen_height);
            screen_tex = make_screen_texture(&mut window, &raylib_thread, &view);
        }

        let mut intent = gather_input(&mut window);

        // Fixed-step simulation behind an accumulator: rendering rate
        // never changes what the ticks compute.
        accumulator += window.get_frame_time();
        if accumulator > 0.25 {
            accumulator = 0.25; // don't spiral after a stall
        }
        let step = sim.config.dt();
        while accumulator >= step {
            accumulator -= step;
            if !sim.player.is_alive() || sim.cleared() {
                break;
            }
            let out = sim.tick(&intent);
            // edges feed exactly one tick per frame
            intent.fire = false;
            intent.turn = 0.0;
            if let Some(audio) = &audio {
                if out.fired {
                    audio.play_fire();
                }
                if out.kills > 0 {
                    audio.play_enemy_down();
                }
                if out.damage_taken > 0 {
                    audio.play_player_hurt();
                }
            }
            if out.fired {
                log::debug!(
                    "shot {} (ammo {})",
                    if out.hit { "hit" } else { "missed" },
                    sim.player.ammo
                );
            }
            if out.damage_taken > 0 {
                log::debug!("player hit, hp {}", sim.player.health);
            }
        }

        let game_over = !sim.player.is_alive();
        let victory = !game_over && sim.cleared();
        if (game_over || victory) && !end_announced {
            end_announced = true;
            log::info!(
                "{} after {} ticks",
                if victory { "victory" } else { "game over" },
                sim.ticks()
            );
        }

        let frame = compose(
            &sim.map,
            &sim.player,
            &sim.enemies,
            &view,
            sim.config.max_ray_depth,
        );
        framebuffer.clear();
        rasterize(&mut framebuffer, &frame);
        draw_minimap(&mut framebuffer, &sim.map, &sim.player, &sim.enemies);
        framebuffer.upload_to_texture(&mut screen_tex);

        let fps_now = window.get_fps();
        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            d.draw_texture(&screen_tex, 0, 0, Color::WHITE);
            draw_hud(&mut d, &frame.hud, &view, fps_now);
            if game_over {
                draw_center_text(&mut d, &view, "GAME OVER", Color::RED);
            } else if victory {
                draw_center_text(&mut d, &view, "VICTORY!", Color::GREEN);
            }
        }
    }
}

fn load_map() -> (GridMap, bool) {
    match std::fs::read_to_string(MAP_PATH) {
        Ok(text) => match GridMap::parse(&text) {
            Ok(map) => (map, true),
            Err(err) => {
                log::warn!("{MAP_PATH}: {err}; using the built-in arena");
                (GridMap::default_arena(), false)
            }
        },
        Err(_) => (GridMap::default_arena(), false),
    }
}

/// Pick enemy spawn cells for a custom map: open cells away from the
/// player start.
fn scatter_spawns(map: &GridMap, count: usize) -> Vec<(f32, f32)> {
    let mut rng = rand::thread_rng();
    let mut free: Vec<(i32, i32)> = map
        .empty_cells()
        .into_iter()
        .filter(|&(col, row)| {
            let dx = col as f32 + 0.5 - PLAYER_SPAWN.0;
            let dy = row as f32 + 0.5 - PLAYER_SPAWN.1;
            dx * dx + dy * dy > 9.0
        })
        .collect();
    let mut spawns = Vec::new();
    for _ in 0..count {
        if free.is_empty() {
            break;
        }
        let i = rng.gen_range(0..free.len());
        let (col, row) = free.swap_remove(i);
        spawns.push((col as f32 + 0.5, row as f32 + 0.5));
    }
    spawns
}

fn gather_input(rl: &mut RaylibHandle) -> InputIntent {
    let mut intent = InputIntent::default();
    if rl.is_key_down(KeyboardKey::KEY_W) {
        intent.forward += 1.0;
    }
    if rl.is_key_down(KeyboardKey::KEY_S) {
        intent.forward -= 1.0;
    }
    if rl.is_key_down(KeyboardKey::KEY_D) {
        intent.strafe += 1.0;
    }
    if rl.is_key_down(KeyboardKey::KEY_A) {
        intent.strafe -= 1.0;
    }
    intent.turn = rl.get_mouse_delta().x * MOUSE_SENS;
    intent.fire = rl.is_key_pressed(KeyboardKey::KEY_SPACE)
        || rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    intent
}

fn make_screen_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    view: &ViewConfig,
) -> Texture2D {
    let image = Image::gen_image_color(
        view.screen_width as i32,
        view.screen_height as i32,
        Color::BLACK,
    );
    rl.load_texture_from_image(thread, &image)
        .expect("screen texture allocation failed")
}

fn draw_hud(d: &mut RaylibDrawHandle, hud: &HudSnapshot, view: &ViewConfig, fps: u32) {
    let hp_color = if hud.health > 30 { Color::GREEN } else { Color::RED };
    d.draw_text(&format!("HP: {}", hud.health), 10, 10, 30, hp_color);
    d.draw_text(&format!("Ammo: {}", hud.ammo), 10, 45, 30, Color::YELLOW);
    d.draw_text(
        &format!("Enemies: {}", hud.enemies_alive),
        10,
        80,
        20,
        Color::WHITE,
    );
    d.draw_text(&format!("FPS: {}", fps), 10, 105, 20, Color::WHITE);

    let cx = view.screen_width as i32 / 2;
    let cy = view.screen_height as i32 / 2;
    d.draw_rectangle(cx - 2, cy - 10, 4, 20, Color::WHITE);
    d.draw_rectangle(cx - 10, cy - 2, 20, 4, Color::WHITE);
}

fn draw_center_text(d: &mut RaylibDrawHandle, view: &ViewConfig, text: &str, color: Color) {
    let size = 60;
    let width = raylib::core::text::measure_text(text, size);
    d.draw_text(
        text,
        (view.screen_width as i32 - width) / 2,
        view.screen_height as i32 / 2 - size / 2,
        size,
        color,
    );
}
