//! Airborne projectiles (fruit and bombs)
//!
//! Fruit and bombs share one integrator; they differ only in their
//! [`MotionProfile`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::catalog::FruitKind;
use crate::consts::*;

/// What a projectile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Fruit {
        fruit: FruitKind,
        /// Which whole-image variant to draw
        variant: usize,
    },
    Bomb,
}

impl ProjectileKind {
    pub fn is_bomb(&self) -> bool {
        matches!(self, ProjectileKind::Bomb)
    }

    pub fn motion(&self) -> MotionProfile {
        match self {
            ProjectileKind::Fruit { .. } => MotionProfile::FRUIT,
            ProjectileKind::Bomb => MotionProfile::BOMB,
        }
    }
}

/// Per-kind physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Multiplier on [`GRAVITY`]
    pub gravity_scale: f32,
    /// How far below the field the top edge may go before removal
    pub miss_margin: f32,
}

impl MotionProfile {
    pub const FRUIT: MotionProfile = MotionProfile {
        gravity_scale: 1.0,
        miss_margin: 0.0,
    };
    pub const BOMB: MotionProfile = MotionProfile {
        gravity_scale: BOMB_GRAVITY_SCALE,
        miss_margin: BOMB_MISS_MARGIN,
    };
}

/// A fruit or bomb in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees
    pub angle: f32,
    /// Degrees per tick
    pub spin: f32,
    pub radius: f32,
    /// Ticks since spawn (drives the bomb pulse)
    pub age_ticks: u32,
    /// Top edge has been at or above the field bottom at least once
    pub entered_field: bool,
}

impl Projectile {
    pub fn new(id: u32, kind: ProjectileKind, pos: Vec2, vel: Vec2, radius: f32, spin: f32) -> Self {
        debug_assert!(radius > 0.0, "projectile radius must be positive");
        Self {
            id,
            kind,
            pos,
            vel,
            angle: 0.0,
            spin,
            radius,
            age_ticks: 0,
            entered_field: pos.y - radius <= FIELD_BOTTOM,
        }
    }

    /// Advance one tick: move, fall, spin, stay inside the field horizontally
    pub fn update(&mut self) {
        let motion = self.kind.motion();
        self.pos += self.vel;
        self.vel.y += GRAVITY * motion.gravity_scale;
        self.angle += self.spin;
        self.pos.x = self.pos.x.clamp(self.radius, FIELD_WIDTH - self.radius);
        self.age_ticks = self.age_ticks.wrapping_add(1);
        self.entered_field |= self.pos.y - self.radius <= FIELD_BOTTOM;
    }

    /// True once the top edge has dropped below the field by the kind's margin.
    ///
    /// A projectile spawned below the line is not out while it is still
    /// rising toward the field.
    pub fn is_out_of_field(&self) -> bool {
        let below = self.pos.y - self.radius > FIELD_BOTTOM + self.kind.motion().miss_margin;
        below && (self.entered_field || self.vel.y > 0.0)
    }

    /// Leaving the field only costs a life for fruit that was once inside it
    pub fn is_missed(&self) -> bool {
        self.is_out_of_field() && self.entered_field
    }

    pub fn fruit(&self) -> Option<FruitKind> {
        match self.kind {
            ProjectileKind::Fruit { fruit, .. } => Some(fruit),
            ProjectileKind::Bomb => None,
        }
    }
}
