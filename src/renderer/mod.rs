//! Render snapshots
//!
//! Drawing is a pure read of [`GameState`](crate::sim::GameState): each frame
//! is flattened into an ordered list of [`DrawItem`]s and handed to whatever
//! [`Renderer`] the host provides. Anything without a sprite gets a procedural
//! shape so gameplay never depends on assets.

pub mod background;
pub mod scene;

use glam::Vec2;

use crate::catalog::{AssetHandle, Rgb};
use crate::tuning::Difficulty;

pub use background::WoodGrain;
pub use scene::draw_frame;

/// Drawing backend
pub trait Renderer {
    fn draw(&mut self, item: &DrawItem<'_>);
}

/// Fallback shapes for entities without a sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Shaded disc with a highlight spot
    Fruit { color: Rgb, highlight: Rgb },
    /// Black body, red fuse, yellow warning lines
    Bomb,
    /// Small disc standing in for a fruit half
    Half { color: Rgb },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    Sprite(AssetHandle),
    Procedural(Shape),
}

/// Everything needed to draw one fruit, bomb or half
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub pos: Vec2,
    /// Degrees
    pub rotation: f32,
    pub radius: f32,
    /// Uniform scale (bomb pulse); 1.0 otherwise
    pub scale: f32,
    pub visual: Visual,
}

/// Heart row state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub score: u64,
    pub best_score: u64,
    pub lives: u8,
    pub max_lives: u8,
    /// Lost heart being animated and its current scale
    pub pulse: Option<(u8, f32)>,
    /// Streak shown while the combo window is open (2 or more)
    pub combo: Option<u32>,
    pub difficulty: Difficulty,
}

/// One draw call, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem<'a> {
    Background(&'a WoodGrain),
    Fruit(EntityView),
    Bomb(EntityView),
    Particle { pos: Vec2, color: Rgb, size: f32 },
    Half(EntityView),
    /// Swipe trail points inside the field
    Swipe(Vec<Vec2>),
    Hud {
        view: HudView,
        player_name: &'a str,
    },
    Title {
        center: Vec2,
        radius: f32,
        best_score: u64,
        difficulty: Difficulty,
        player_name: &'a str,
    },
    /// Radial beams from the sliced bomb; `progress` runs 0 to 1
    BombFlash { center: Vec2, progress: f32 },
    GameOver { score: u64, best_score: u64 },
}

impl DrawItem<'_> {
    /// Short tag for logs and statistics
    pub fn label(&self) -> &'static str {
        match self {
            DrawItem::Background(_) => "background",
            DrawItem::Fruit(_) => "fruit",
            DrawItem::Bomb(_) => "bomb",
            DrawItem::Particle { .. } => "particle",
            DrawItem::Half(_) => "half",
            DrawItem::Swipe(_) => "swipe",
            DrawItem::Hud { .. } => "hud",
            DrawItem::Title { .. } => "title",
            DrawItem::BombFlash { .. } => "bomb_flash",
            DrawItem::GameOver { .. } => "game_over",
        }
    }
}
