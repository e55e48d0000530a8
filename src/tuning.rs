//! Data-driven game balance
//!
//! Each difficulty is a plain preset struct; the simulation never branches on
//! the difficulty itself, only on the numbers it carries.

use serde::{Deserialize, Serialize};

/// Difficulty modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[serde(alias = "Kolay")]
    Easy,
    #[default]
    #[serde(alias = "Orta")]
    Normal,
    #[serde(alias = "Zor")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a mode name (English or the legacy Turkish names)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "kolay" => Some(Difficulty::Easy),
            "normal" | "orta" | "medium" => Some(Difficulty::Normal),
            "hard" | "zor" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Next mode in menu order (wraps)
    pub fn cycle(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn preset(&self) -> DifficultyPreset {
        match self {
            Difficulty::Easy => DifficultyPreset {
                fruit_schedule: SpawnSchedule {
                    interval: 90.0,
                    floor: 30.0,
                    acceleration: 0.3,
                },
                bomb_schedule: None,
                fruit_launch: LaunchRange {
                    vy_min: -12.0,
                    vy_max: -9.0,
                    vx_spread: 3.0,
                },
                bomb_launch: LaunchRange {
                    vy_min: -8.0,
                    vy_max: -6.0,
                    vx_spread: 4.0,
                },
            },
            Difficulty::Normal => DifficultyPreset {
                fruit_schedule: SpawnSchedule {
                    interval: 55.0,
                    floor: 30.0,
                    acceleration: 1.2,
                },
                bomb_schedule: Some(SpawnSchedule {
                    interval: 280.0,
                    floor: 180.0,
                    acceleration: 6.0,
                }),
                fruit_launch: LaunchRange {
                    vy_min: -18.0,
                    vy_max: -12.0,
                    vx_spread: 7.0,
                },
                bomb_launch: LaunchRange {
                    vy_min: -11.0,
                    vy_max: -9.0,
                    vx_spread: 4.0,
                },
            },
            Difficulty::Hard => DifficultyPreset {
                fruit_schedule: SpawnSchedule {
                    interval: 35.0,
                    floor: 20.0,
                    acceleration: 2.0,
                },
                bomb_schedule: Some(SpawnSchedule {
                    interval: 150.0,
                    floor: 100.0,
                    acceleration: 10.0,
                }),
                fruit_launch: LaunchRange {
                    vy_min: -22.0,
                    vy_max: -15.0,
                    vx_spread: 9.0,
                },
                bomb_launch: LaunchRange {
                    vy_min: -13.0,
                    vy_max: -10.0,
                    vx_spread: 4.0,
                },
            },
        }
    }
}

/// How often one spawn category fires and how fast it speeds up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    /// Initial ticks between spawns
    pub interval: f32,
    /// Interval never drops below this
    pub floor: f32,
    /// Interval reduction applied after every spawn
    pub acceleration: f32,
}

/// Launch velocity ranges (negative vy is upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchRange {
    pub vy_min: f32,
    pub vy_max: f32,
    /// Horizontal velocity drawn from [-vx_spread, vx_spread]
    pub vx_spread: f32,
}

/// Complete balance data for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPreset {
    pub fruit_schedule: SpawnSchedule,
    /// `None` disables bombs entirely
    pub bomb_schedule: Option<SpawnSchedule>,
    pub fruit_launch: LaunchRange,
    pub bomb_launch: LaunchRange,
}
