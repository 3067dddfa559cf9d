//! Optional sound cues. Everything degrades silently: no output device
//! means no manager, missing asset files mean the cue just never plays.
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    fire: Option<Arc<Vec<u8>>>,
    enemy_down: Option<Arc<Vec<u8>>>,
    player_hurt: Option<Arc<Vec<u8>>>,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        let mut manager = Self {
            _stream,
            handle,
            sfx_sink,
            fire: None,
            enemy_down: None,
            player_hurt: None,
        };
        manager.fire = load_bytes("assets/fire.wav").map(Arc::new);
        manager.enemy_down = load_bytes("assets/enemy_down.wav").map(Arc::new);
        manager.player_hurt = load_bytes("assets/player_hurt.wav").map(Arc::new);
        Some(manager)
    }

    pub fn play_fire(&self) {
        self.play_data(self.fire.clone());
    }

    /// Kills get their own detached sink so overlapping cues all start
    /// immediately instead of queueing behind the shared one.
    pub fn play_enemy_down(&self) {
        if let Some(d) = self.enemy_down.clone() {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.detach();
                }
            }
        }
    }

    pub fn play_player_hurt(&self) {
        self.play_data(self.player_hurt.clone());
    }

    fn play_data(&self, data: Option<Arc<Vec<u8>>>) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                self.sfx_sink.append(dec);
            }
        }
    }
}
