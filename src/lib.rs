//! Fruit Slash - a swipe-to-slice arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (physics, slicing, session state)
//! - `tuning`: Data-driven difficulty presets
//! - `catalog`: Fruit catalog and typed asset catalog
//! - `renderer`: Read-only draw list handed to an external renderer
//! - `audio`: Game event to sound cue routing
//! - `platform`: Input sources and fixed-rate frame pacing
//! - `persistence`: File storage for settings and best score

pub mod app;
pub mod audio;
pub mod catalog;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use catalog::{AssetCatalog, FruitKind};
pub use highscores::BestScore;
pub use settings::Settings;
pub use tuning::Difficulty;

/// Game configuration constants
///
/// All motion values are per tick; physics is tied to the fixed tick rate.
pub mod consts {
    /// Target simulation/draw rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const TOP_BAR_HEIGHT: f32 = 80.0;
    pub const BOTTOM_BAR_HEIGHT: f32 = 60.0;

    /// Play field (screen minus the HUD bars)
    pub const FIELD_WIDTH: f32 = SCREEN_WIDTH;
    pub const FIELD_TOP: f32 = TOP_BAR_HEIGHT;
    pub const FIELD_BOTTOM: f32 = SCREEN_HEIGHT - BOTTOM_BAR_HEIGHT;

    /// Spawn line, just below the visible field
    pub const SPAWN_Y: f32 = FIELD_BOTTOM + 30.0;
    /// Horizontal spawn margin from either screen edge
    pub const SPAWN_MARGIN_X: i32 = 80;

    /// Gravity applied to fruit each tick (bombs scale it down)
    pub const GRAVITY: f32 = 0.35;
    pub const BOMB_GRAVITY_SCALE: f32 = 0.8;
    /// Extra distance below the field a bomb may fall before removal
    pub const BOMB_MISS_MARGIN: f32 = 60.0;

    /// Radius used when no sprite size is known
    pub const DEFAULT_RADIUS: f32 = 30.0;
    pub const BOMB_RADIUS: f32 = 30.0;

    /// Session rules
    pub const MAX_LIVES: u8 = 3;
    pub const COMBO_TIMEOUT_TICKS: u32 = 120;
    /// 0.7 s of bomb flash before game over
    pub const BOMB_FLASH_TICKS: u32 = 42;
    /// 0.6 s heart pulse after losing a life
    pub const LIFE_LOSS_TICKS: u32 = 36;

    /// Debris
    pub const HALVES_LIFE_TICKS: u32 = 60;
    pub const HALVES_GRAVITY: f32 = 0.5;
    pub const PARTICLE_LIFE_TICKS: u32 = 30;
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    pub const JUICE_PARTICLES: usize = 5;
    pub const FRAGMENT_GROUPS: usize = 1;
    pub const FRAGMENT_PARTICLES: usize = 2;
}
