// main.rs
use std::path::PathBuf;

use clap::Parser;
use raylib::prelude::*;
use tracing_subscriber::EnvFilter;

use maze_raycaster::audio_manager::AudioManager;
use maze_raycaster::core::process_events::InputSnapshot;
use maze_raycaster::render::framebuffer::Framebuffer;
use maze_raycaster::{Config, Error, FrameReport, FrameSource, Game, Result};

#[derive(Parser, Debug)]
#[command(name = "maze_raycaster", about = "Wolfenstein-style maze raycaster")]
struct Cli {
    /// TOML settings file (may also define [[maps]])
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
}

/// Ventana raylib: entrada por tick y presentación del framebuffer.
struct RaylibHost {
    window: RaylibHandle,
    thread: RaylibThread,
    screen: Texture2D,
    audio: Option<AudioManager>,
}

impl FrameSource for RaylibHost {
    fn next_input(&mut self) -> Option<InputSnapshot> {
        if self.window.window_should_close() {
            return None;
        }
        Some(InputSnapshot::poll(&self.window))
    }

    fn present(&mut self, fb: &Framebuffer, report: &FrameReport) {
        if let Some(audio) = &self.audio {
            audio.on_frame(report);
        }
        fb.upload_to_texture(&mut self.screen);
        let fps_now = self.window.get_fps();
        let mut d = self.window.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        d.draw_texture(&self.screen, 0, 0, Color::WHITE);
        d.draw_text(&format!("FPS: {}", fps_now), 10, 10, 20, Color::GREEN);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(w) = cli.width { config.width = w; }
    if let Some(h) = cli.height { config.height = h; }

    let mut game = Game::new(&config)?;

    let (mut window, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Raycaster")
        .vsync()
        .build();

    let blank = Image::gen_image_color(config.width, config.height, Color::BLACK);
    let screen = window
        .load_texture_from_image(&thread, &blank)
        .map_err(|e| Error::Graphics(format!("{e:?}")))?;

    let audio = AudioManager::new().map(|mut a| {
        a.load_sfx_auto();
        a
    });
    if audio.is_none() {
        tracing::warn!("no audio output device, running silent");
    }

    let mut host = RaylibHost { window, thread, screen, audio };
    let frames = game.run(&mut host)?;
    tracing::info!(frames, "window closed");
    Ok(())
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            std::process::ExitCode::FAILURE
        }
    }
}
