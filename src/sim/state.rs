//! Session state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]. Rendering reads it and
//! never writes it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::debris::{Particle, SplitHalves};
use super::entity::Projectile;
use super::spawner::Spawner;
use super::swipe::SwipeTracker;
use crate::catalog::{FruitKind, RosterEntry};
use crate::consts::*;
use crate::tuning::Difficulty;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    BombSliced,
    LivesExhausted,
}

/// Current phase of the session
///
/// Exactly one phase is active; per-phase data lives on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the player to slice the title hot zone
    Title,
    /// Active gameplay
    Playing,
    /// Terminal flash after a bomb slice; simulation frozen
    BombFlash { center: Vec2, elapsed_ticks: u32 },
    /// Run ended, waiting for restart
    GameOver { cause: GameOverCause },
}

impl SessionPhase {
    /// True once the run is over (including the bomb flash leading into it)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionPhase::BombFlash { .. } | SessionPhase::GameOver { .. }
        )
    }
}

/// Heart pulse shown after a life is lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeLossPulse {
    /// Index of the heart that was just lost (0 = rightmost)
    pub heart: u8,
    pub remaining_ticks: u32,
}

impl LifeLossPulse {
    /// 0 at the start of the pulse, 1 at its end
    pub fn progress(&self) -> f32 {
        1.0 - self.remaining_ticks as f32 / LIFE_LOSS_TICKS.max(1) as f32
    }
}

/// Things that happened during a tick, drained by the host for audio and logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Title hot zone sliced, play begins
    GameStarted,
    /// A fruit or bomb was launched
    Thrown { bomb: bool },
    FruitSliced {
        fruit: FruitKind,
        pos: Vec2,
        combo: u32,
        points: u64,
    },
    BombSliced { pos: Vec2 },
    FruitMissed { lives_left: u8 },
    /// Best score beaten (host persists it)
    NewBest { score: u64 },
    GameOver { cause: GameOverCause },
    Restarted,
}

/// Title screen hot zone; slicing through it starts the game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleZone {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for TitleZone {
    fn default() -> Self {
        Self {
            center: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 50.0),
            radius: 90.0,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: SessionPhase,
    pub difficulty: Difficulty,
    pub score: u64,
    /// Best score ever seen; never decreases
    pub best_score: u64,
    pub lives: u8,
    pub combo: u32,
    /// Ticks until the combo lapses (0 = no active combo window)
    pub combo_timer: u32,
    pub spawner: Spawner,
    /// Airborne fruit (sorted by id)
    pub fruits: Vec<Projectile>,
    /// Airborne bombs (sorted by id)
    pub bombs: Vec<Projectile>,
    pub split_halves: Vec<SplitHalves>,
    pub particles: Vec<Particle>,
    pub swipe: SwipeTracker,
    pub life_loss: Option<LifeLossPulse>,
    pub title_zone: TitleZone,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Fruit types the spawner may pick from
    pub roster: Vec<RosterEntry>,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// New session on the title screen
    pub fn new(seed: u64, difficulty: Difficulty, roster: Vec<RosterEntry>) -> Self {
        Self {
            phase: SessionPhase::Title,
            difficulty,
            score: 0,
            best_score: 0,
            lives: MAX_LIVES,
            combo: 0,
            combo_timer: 0,
            spawner: Spawner::new(&difficulty.preset()),
            fruits: Vec::new(),
            bombs: Vec::new(),
            split_halves: Vec::new(),
            particles: Vec::new(),
            swipe: SwipeTracker::new(),
            life_loss: None,
            title_zone: TitleZone::default(),
            time_ticks: 0,
            roster,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn with_best_score(mut self, best: u64) -> Self {
        self.best_score = best;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a fresh run: empty field, full lives, zero score and combo,
    /// spawn timers at the difficulty's initial intervals. Best score is kept.
    pub fn reset(&mut self) {
        self.fruits.clear();
        self.bombs.clear();
        self.split_halves.clear();
        self.particles.clear();
        self.swipe.end();
        self.score = 0;
        self.lives = MAX_LIVES;
        self.combo = 0;
        self.combo_timer = 0;
        self.life_loss = None;
        self.spawner = Spawner::new(&self.difficulty.preset());
        self.phase = SessionPhase::Playing;
    }

    /// Switch difficulty; spawn parameters restart, the running score stays
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.spawner = Spawner::new(&difficulty.preset());
    }

    /// Add points and track the best score
    pub fn award(&mut self, points: u64) {
        self.score += points;
        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest {
                score: self.best_score,
            });
        }
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.fruits.sort_by_key(|f| f.id);
        self.bombs.sort_by_key(|b| b.id);
    }
}
