//! Host application
//!
//! Owns the session plus everything around it (assets, settings, best score,
//! audio) and runs the single-threaded frame loop: poll input, one simulation
//! step, route events, draw, pace.

use crate::audio::{AudioRouter, AudioSink};
use crate::catalog::AssetCatalog;
use crate::highscores::BestScore;
use crate::persistence::FileStore;
use crate::platform::{FramePacer, InputEvent, InputSource, split_input};
use crate::renderer::{Renderer, WoodGrain, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Difficulty;

pub struct App<A: AudioSink> {
    state: GameState,
    catalog: AssetCatalog,
    background: WoodGrain,
    store: FileStore,
    settings: Settings,
    best: BestScore,
    /// Best score changed since it was last written
    best_dirty: bool,
    router: AudioRouter,
    audio: A,
    running: bool,
    frames: u64,
}

impl<A: AudioSink> App<A> {
    pub fn new(store: FileStore, catalog: AssetCatalog, mut audio: A, seed: u64) -> Self {
        let settings = Settings::load(&store);
        let best = BestScore::load(&store);
        let router = AudioRouter::new(&settings);
        router.sync_music(&mut audio);

        let state = GameState::new(seed, settings.difficulty, catalog.spawn_roster())
            .with_best_score(best.get());
        log::info!(
            "Session ready: player {}, {} mode, seed {}",
            settings.player_name,
            settings.difficulty.as_str(),
            seed
        );

        Self {
            state,
            catalog,
            background: WoodGrain::new(),
            store,
            settings,
            best,
            best_dirty: false,
            router,
            audio,
            running: true,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Request the loop to stop after the current frame
    pub fn close(&mut self) {
        self.running = false;
    }

    /// Switch modes; spawn timers restart, the running score stays
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.state.difficulty {
            return;
        }
        log::info!("Difficulty set to {}", difficulty.as_str());
        self.state.set_difficulty(difficulty);
        self.settings.difficulty = difficulty;
        self.save_settings();
    }

    pub fn toggle_music(&mut self) {
        self.settings.music_enabled = !self.settings.music_enabled;
        self.router
            .set_music_enabled(self.settings.music_enabled, &mut self.audio);
        self.save_settings();
    }

    pub fn toggle_sfx(&mut self) {
        self.settings.sfx_enabled = !self.settings.sfx_enabled;
        self.router.set_sfx_enabled(self.settings.sfx_enabled);
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save(&self.store) {
            log::warn!("Failed to save settings: {e}");
        }
    }

    fn flush_best(&mut self) {
        if !self.best_dirty {
            return;
        }
        match self.best.save(&self.store) {
            Ok(()) => self.best_dirty = false,
            Err(e) => log::warn!("Failed to save best score: {e}"),
        }
    }

    fn handle_host_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Close => self.close(),
            InputEvent::SetDifficulty(d) => self.change_difficulty(d),
            InputEvent::ToggleMusic => self.toggle_music(),
            InputEvent::ToggleSfx => self.toggle_sfx(),
            InputEvent::Press(_)
            | InputEvent::Move(_)
            | InputEvent::Release
            | InputEvent::Restart => {}
        }
    }

    fn handle_game_events(&mut self, events: &[GameEvent]) {
        self.router.dispatch(events, &mut self.audio);
        for event in events {
            match event {
                GameEvent::NewBest { score } => {
                    if self.best.submit(*score) {
                        self.best_dirty = true;
                    }
                }
                GameEvent::GameOver { .. } => self.flush_best(),
                _ => {}
            }
        }
    }

    /// One iteration of the loop (without pacing)
    pub fn frame<I: InputSource, R: Renderer>(&mut self, input: &mut I, renderer: &mut R) {
        let (tick_input, host) = split_input(&input.poll(&self.state));
        for event in host {
            self.handle_host_event(event);
        }

        tick(&mut self.state, &tick_input);
        let events = self.state.drain_events();
        self.handle_game_events(&events);

        draw_frame(
            &self.state,
            &self.catalog,
            &self.background,
            &self.settings.player_name,
            renderer,
        );
        self.frames += 1;
    }

    /// Run until closed or until `max_frames` have elapsed
    pub fn run<I: InputSource, R: Renderer>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
        pacer: &mut FramePacer,
        max_frames: Option<u64>,
    ) {
        while self.running {
            if max_frames.is_some_and(|max| self.frames >= max) {
                break;
            }
            self.frame(input, renderer);
            pacer.wait();
        }
        self.flush_best();
        log::info!(
            "Stopped after {} frames, score {}, best {}",
            self.frames,
            self.state.score,
            self.best.get()
        );
    }
}
