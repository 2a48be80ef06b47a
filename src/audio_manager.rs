//! Shot and kill sound effects.
use std::{fs::File, io::Read, io::BufReader, sync::Arc};
use rodio::{OutputStream, OutputStreamHandle, Sink, Decoder};
use rodio::Source;
use std::io::Cursor;

use crate::game::FrameReport;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| load_bytes(p))
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    shot: Option<Arc<Vec<u8>>>,
    kill: Option<Arc<Vec<u8>>>,
    volume: f32,
}

impl AudioManager {
    /// `None` when there is no output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self { _stream, handle, shot: None, kill: None, volume: 0.8 })
    }

    pub fn load_sfx_auto(&mut self) {
        self.shot = load_bytes_any(&[
            "assets/sfx_shot.wav",
            "assets/sounds/shot.wav",
            "assets/sounds/shoot.wav",
        ]).map(Arc::new);
        self.kill = load_bytes_any(&[
            "assets/sfx_enemy_down.wav",
            "assets/sounds/enemy_down.wav",
            "assets/sounds/kill.wav",
        ]).map(Arc::new);
        if self.shot.is_none() || self.kill.is_none() {
            tracing::warn!(shot = self.shot.is_some(), kill = self.kill.is_some(), "some sound effects missing");
        }
    }

    /// Plays on a detached sink so overlapping shots all sound.
    fn play_data(&self, data: Option<Arc<Vec<u8>>>) {
        let Some(d) = data else { return };
        if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.volume));
                sink.detach();
            }
        }
    }

    pub fn play_shot(&self) { self.play_data(self.shot.clone()); }
    pub fn play_kill(&self) { self.play_data(self.kill.clone()); }

    pub fn on_frame(&self, report: &FrameReport) {
        if report.shot { self.play_shot(); }
        if report.kills > 0 { self.play_kill(); }
    }
}
