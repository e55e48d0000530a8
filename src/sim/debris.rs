//! Post-slice debris: split halves and juice particles
//!
//! Both are purely visual, decay on a fixed tick budget, and never affect
//! scoring.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{FruitKind, Rgb};
use crate::consts::*;

/// One half of a cut fruit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HalfBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees
    pub rotation: f32,
    pub spin: f32,
}

impl HalfBody {
    fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += HALVES_GRAVITY;
        self.rotation += self.spin;
    }
}

/// The two halves of a sliced fruit flying apart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitHalves {
    pub fruit: FruitKind,
    pub halves: [HalfBody; 2],
    pub life_ticks: u32,
}

impl SplitHalves {
    /// Split at `pos` along a random angle; halves leave in opposite directions
    /// with a slight upward kick.
    pub fn new<R: Rng>(fruit: FruitKind, pos: Vec2, rng: &mut R) -> Self {
        let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        let speed: f32 = rng.random_range(3.0..6.0);
        let dir = Vec2::new(angle.cos(), angle.sin()) * speed;
        let kick = Vec2::new(0.0, -2.0);

        let spin1: f32 = rng.random_range(-10.0..10.0);
        let spin2: f32 = rng.random_range(-10.0..10.0);

        Self {
            fruit,
            halves: [
                HalfBody {
                    pos,
                    vel: dir + kick,
                    rotation: 0.0,
                    spin: spin1,
                },
                HalfBody {
                    pos,
                    vel: -dir + kick,
                    rotation: 0.0,
                    spin: spin2,
                },
            ],
            life_ticks: HALVES_LIFE_TICKS,
        }
    }

    pub fn update(&mut self) {
        for half in &mut self.halves {
            half.step();
        }
        self.life_ticks = self.life_ticks.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life_ticks > 0
    }
}

/// A fading juice droplet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub size: f32,
    pub life_ticks: u32,
}

impl Particle {
    pub fn new<R: Rng>(pos: Vec2, color: Rgb, rng: &mut R) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-5.0..=5.0), rng.random_range(-5.0..=5.0)),
            color,
            size: rng.random_range(3..=8) as f32,
            life_ticks: PARTICLE_LIFE_TICKS,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life_ticks = self.life_ticks.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.life_ticks > 0
    }

    /// Remaining life as a 0-1 fraction, for fading
    pub fn fade(&self) -> f32 {
        (self.life_ticks as f32 / PARTICLE_LIFE_TICKS as f32).clamp(0.0, 1.0)
    }
}

/// Juice burst plus yellow fragment highlights for a sliced fruit
pub fn slice_burst<R: Rng>(fruit: FruitKind, pos: Vec2, rng: &mut R) -> Vec<Particle> {
    let mut burst = Vec::with_capacity(JUICE_PARTICLES + FRAGMENT_GROUPS * FRAGMENT_PARTICLES);
    let juice = fruit.juice_color();
    for _ in 0..JUICE_PARTICLES {
        burst.push(Particle::new(pos, juice, rng));
    }
    for _ in 0..FRAGMENT_GROUPS {
        let offset = Vec2::new(
            rng.random_range(-20..=20) as f32,
            rng.random_range(-20..=20) as f32,
        );
        for _ in 0..FRAGMENT_PARTICLES {
            burst.push(Particle::new(pos + offset, Rgb::YELLOW, rng));
        }
    }
    burst
}
