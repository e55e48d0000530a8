//! Spawn timers and launch generation
//!
//! Each category (fruit, bomb) counts ticks up to its interval. Every spawn
//! shortens the interval by the preset's acceleration, never below the floor,
//! which produces the difficulty ramp.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::RosterEntry;
use crate::consts::*;
use crate::tuning::{DifficultyPreset, LaunchRange, SpawnSchedule};

use super::entity::{Projectile, ProjectileKind};

/// Countdown for one spawn category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Ticks between spawns (shrinks over time)
    pub interval: f32,
    /// Ticks since the last spawn
    pub elapsed: u32,
    floor: f32,
    acceleration: f32,
}

impl SpawnTimer {
    pub fn new(schedule: SpawnSchedule) -> Self {
        Self {
            interval: schedule.interval,
            elapsed: 0,
            floor: schedule.floor,
            acceleration: schedule.acceleration,
        }
    }

    /// Count one tick. Returns true when a spawn is due; the timer then
    /// restarts with a shorter interval.
    pub fn advance(&mut self) -> bool {
        self.elapsed += 1;
        if (self.elapsed as f32) < self.interval {
            return false;
        }
        self.elapsed = 0;
        self.interval = (self.interval - self.acceleration).max(self.floor);
        true
    }
}

/// Both spawn categories plus the launch ranges of the active difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    pub fruit: SpawnTimer,
    /// `None` when the difficulty has no bombs
    pub bomb: Option<SpawnTimer>,
    fruit_launch: LaunchRange,
    bomb_launch: LaunchRange,
}

/// What became due this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnsDue {
    pub fruit: bool,
    pub bomb: bool,
}

impl Spawner {
    pub fn new(preset: &DifficultyPreset) -> Self {
        Self {
            fruit: SpawnTimer::new(preset.fruit_schedule),
            bomb: preset.bomb_schedule.map(SpawnTimer::new),
            fruit_launch: preset.fruit_launch,
            bomb_launch: preset.bomb_launch,
        }
    }

    pub fn advance(&mut self) -> SpawnsDue {
        SpawnsDue {
            fruit: self.fruit.advance(),
            bomb: self.bomb.as_mut().is_some_and(SpawnTimer::advance),
        }
    }

    /// Launch a fruit from the spawn line. Returns `None` on an empty roster.
    pub fn launch_fruit<R: Rng>(&self, id: u32, roster: &[RosterEntry], rng: &mut R) -> Option<Projectile> {
        if roster.is_empty() {
            return None;
        }
        let entry = roster[rng.random_range(0..roster.len())];
        let variant = rng.random_range(0..entry.variants.max(1));
        let kind = ProjectileKind::Fruit {
            fruit: entry.kind,
            variant,
        };
        Some(launch(id, kind, entry.radius, &self.fruit_launch, rng))
    }

    pub fn launch_bomb<R: Rng>(&self, id: u32, rng: &mut R) -> Projectile {
        launch(id, ProjectileKind::Bomb, BOMB_RADIUS, &self.bomb_launch, rng)
    }
}

fn launch<R: Rng>(id: u32, kind: ProjectileKind, radius: f32, range: &LaunchRange, rng: &mut R) -> Projectile {
    let x = rng.random_range(SPAWN_MARGIN_X..=FIELD_WIDTH as i32 - SPAWN_MARGIN_X) as f32;
    let vx = if range.vx_spread > 0.0 {
        rng.random_range(-range.vx_spread..=range.vx_spread)
    } else {
        0.0
    };
    let vy = rng.random_range(range.vy_min..=range.vy_max);
    let spin = rng.random_range(-5.0..=5.0);
    Projectile::new(id, kind, Vec2::new(x, SPAWN_Y), Vec2::new(vx, vy), radius, spin)
}
