//! Audio routing
//!
//! The simulation only emits [`GameEvent`]s; this module turns them into named
//! sound cues and hands those to whatever [`AudioSink`] the host provides.
//! Missing cues are skipped silently.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Fruit or bomb launched
    Throw,
    /// Fruit sliced
    Splatter,
    /// Bomb sliced
    Boom,
    /// Fruit fell unsliced
    Failed,
}

impl SoundCue {
    /// Names to try in order; the first one the sink knows is played
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            SoundCue::Throw => &["throw"],
            SoundCue::Splatter => &["splatter", "slice"],
            SoundCue::Boom => &["boom", "bomb"],
            SoundCue::Failed => &["failed"],
        }
    }
}

/// Background music track name
pub const MENU_MUSIC: &str = "menu";

/// Playback backend
pub trait AudioSink {
    /// Whether a cue of this name is loaded
    fn has(&self, _name: &str) -> bool {
        true
    }

    fn play(&mut self, name: &str);

    /// Start the named loop, or stop music on `None`
    fn set_music(&mut self, _track: Option<&str>) {}
}

/// Sink that plays nothing (no audio device, or tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn has(&self, _name: &str) -> bool {
        false
    }

    fn play(&mut self, _name: &str) {}
}

/// Maps game events to cues and applies the sfx/music toggles
#[derive(Debug, Clone)]
pub struct AudioRouter {
    sfx_enabled: bool,
    music_enabled: bool,
    /// Game over has been announced; suppresses further "failed" cues
    run_over: bool,
}

impl AudioRouter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sfx_enabled: settings.sfx_enabled,
            music_enabled: settings.music_enabled,
            run_over: false,
        }
    }

    pub fn sfx_enabled(&self) -> bool {
        self.sfx_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn set_sfx_enabled(&mut self, enabled: bool) {
        self.sfx_enabled = enabled;
    }

    /// Toggle the background loop
    pub fn set_music_enabled<S: AudioSink>(&mut self, enabled: bool, sink: &mut S) {
        self.music_enabled = enabled;
        self.sync_music(sink);
    }

    /// Bring the sink's music in line with the current setting
    pub fn sync_music<S: AudioSink>(&self, sink: &mut S) {
        if self.music_enabled && sink.has(MENU_MUSIC) {
            sink.set_music(Some(MENU_MUSIC));
        } else {
            sink.set_music(None);
        }
    }

    /// Cue for one event, if any
    pub fn cue_for(&mut self, event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::Thrown { .. } => Some(SoundCue::Throw),
            GameEvent::FruitSliced { .. } => Some(SoundCue::Splatter),
            GameEvent::BombSliced { .. } => {
                self.run_over = true;
                Some(SoundCue::Boom)
            }
            GameEvent::FruitMissed { .. } if !self.run_over => Some(SoundCue::Failed),
            GameEvent::GameOver { .. } => {
                self.run_over = true;
                None
            }
            GameEvent::GameStarted | GameEvent::Restarted => {
                self.run_over = false;
                None
            }
            GameEvent::FruitMissed { .. } | GameEvent::NewBest { .. } => None,
        }
    }

    /// Play the cues for a batch of events
    pub fn dispatch<S: AudioSink>(&mut self, events: &[GameEvent], sink: &mut S) {
        for event in events {
            let Some(cue) = self.cue_for(event) else {
                continue;
            };
            if !self.sfx_enabled {
                continue;
            }
            match cue.names().iter().find(|name| sink.has(name)) {
                Some(name) => sink.play(name),
                None => log::trace!("No sound loaded for {:?}", cue),
            }
        }
    }
}
