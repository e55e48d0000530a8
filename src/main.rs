//! Headless demo host
//!
//! Runs the game with the autopilot at the fixed tick rate (or as fast as
//! possible with `--fast`), logging sound cues and frame statistics instead of
//! drawing. Settings and the best score live in `--data-dir`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;

use fruit_slash::audio::AudioSink;
use fruit_slash::consts::TICKS_PER_SECOND;
use fruit_slash::persistence::FileStore;
use fruit_slash::platform::{Autopilot, FramePacer};
use fruit_slash::renderer::{DrawItem, Renderer};
use fruit_slash::{App, AssetCatalog, Difficulty};

#[derive(Parser)]
#[command(name = "fruit-slash")]
#[command(about = "Swipe-to-slice arcade game (headless autopilot demo)")]
struct Args {
    /// Gameplay seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Run unthrottled instead of at 60 frames per second
    #[arg(long)]
    fast: bool,

    /// Directory holding settings.json and best_score.txt
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Override the saved difficulty (easy, normal, hard)
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

/// Counts draw items and logs a summary once per second of game time
#[derive(Default)]
struct HeadlessRenderer {
    frame_items: BTreeMap<&'static str, usize>,
    items_this_frame: usize,
    frames: u64,
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, item: &DrawItem<'_>) {
        if let DrawItem::Background(_) = item {
            self.end_frame();
        }
        *self.frame_items.entry(item.label()).or_default() += 1;
        self.items_this_frame += 1;
    }
}

impl HeadlessRenderer {
    fn end_frame(&mut self) {
        if self.items_this_frame == 0 {
            return;
        }
        self.frames += 1;
        if self.frames % TICKS_PER_SECOND as u64 == 0 {
            log::debug!("frame {}: {:?}", self.frames, self.frame_items);
        }
        self.frame_items.clear();
        self.items_this_frame = 0;
    }
}

/// Logs cues instead of playing them
struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, name: &str) {
        log::debug!("sound: {name}");
    }

    fn set_music(&mut self, track: Option<&str>) {
        match track {
            Some(track) => log::info!("music: {track}"),
            None => log::info!("music off"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Fruit Slash (headless) starting...");

    let store = FileStore::new(args.data_dir);
    let mut app = App::new(store, AssetCatalog::empty(), LogAudio, seed);
    if let Some(difficulty) = args.difficulty {
        app.change_difficulty(difficulty);
    }

    let mut pacer = if args.fast {
        FramePacer::unlimited()
    } else {
        FramePacer::new(TICKS_PER_SECOND)
    };
    let mut renderer = HeadlessRenderer::default();
    app.run(&mut Autopilot::default(), &mut renderer, &mut pacer, Some(args.ticks));
}
