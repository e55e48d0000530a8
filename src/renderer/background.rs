//! Wood grain background
//!
//! Generated once from its own fixed-seed generator so the pattern is the same
//! every run and never disturbs the gameplay RNG stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::catalog::Rgb;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Seed of the grain pattern
pub const WOOD_SEED: u64 = 42;

const COLUMN_STEP: usize = 3;
const ROW_STEP: usize = 8;
const MAX_DARKENING: i32 = 30;
/// Fraction of candidate rows that get a dark line
const ROW_THRESHOLD: f32 = 0.7;

pub mod colors {
    use crate::catalog::Rgb;

    pub const BROWN: Rgb = Rgb(101, 67, 33);
    pub const DARK_BROWN: Rgb = Rgb(69, 39, 19);
}

/// One vertical grain line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainLine {
    pub x: f32,
    pub color: Rgb,
}

/// Precomputed background texture description
#[derive(Debug, Clone, PartialEq)]
pub struct WoodGrain {
    pub base: Rgb,
    /// Vertical lines, one every few pixels, each slightly darker than the base
    pub columns: Vec<GrainLine>,
    /// y of each dark horizontal line
    pub rows: Vec<f32>,
}

impl Default for WoodGrain {
    fn default() -> Self {
        Self::new()
    }
}

impl WoodGrain {
    /// The standard pattern
    pub fn new() -> Self {
        Self::generate(&mut Pcg32::seed_from_u64(WOOD_SEED))
    }

    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let base = colors::BROWN;
        let columns = (0..SCREEN_WIDTH as usize)
            .step_by(COLUMN_STEP)
            .map(|x| {
                let d = rng.random_range(0..=MAX_DARKENING);
                GrainLine {
                    x: x as f32,
                    color: Rgb::clamped(base.0 as i32 - d, base.1 as i32 - d, base.2 as i32 - d),
                }
            })
            .collect();
        let rows = (0..SCREEN_HEIGHT as usize)
            .step_by(ROW_STEP)
            .filter(|_| rng.random::<f32>() > ROW_THRESHOLD)
            .map(|y| y as f32)
            .collect();

        Self {
            base,
            columns,
            rows,
        }
    }
}
