//! Fruit catalog and typed asset catalog
//!
//! The asset loader is an external collaborator. It hands the core an
//! immutable [`AssetCatalog`] once at startup; the core only uses it to decide
//! which fruit may spawn, how large each one is, and which handles to put in
//! render snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RADIUS;

/// 8-bit RGB color, always in range by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Build a color from unchecked channel values, clamping to [0, 255]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Rgb(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Scale every channel by `factor` (used for fading)
    pub fn scaled(&self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Rgb(
            (self.0 as f32 * f) as u8,
            (self.1 as f32 * f) as u8,
            (self.2 as f32 * f) as u8,
        )
    }

    /// Highlight variant for procedural fruit
    pub fn brightened(&self, factor: f32, offset: i32) -> Self {
        Rgb::clamped(
            (self.0 as f32 * factor) as i32 + offset,
            (self.1 as f32 * factor) as i32 + offset,
            (self.2 as f32 * factor) as i32 + offset,
        )
    }
}

/// The fixed fruit catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Banana,
    Orange,
    Lemon,
    Watermelon,
    Pineapple,
    Kiwi,
    Pear,
    Coconut,
    Peach,
}

impl FruitKind {
    pub const ALL: [FruitKind; 10] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Orange,
        FruitKind::Lemon,
        FruitKind::Watermelon,
        FruitKind::Pineapple,
        FruitKind::Kiwi,
        FruitKind::Pear,
        FruitKind::Coconut,
        FruitKind::Peach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Orange => "orange",
            FruitKind::Lemon => "lemon",
            FruitKind::Watermelon => "watermelon",
            FruitKind::Pineapple => "pineapple",
            FruitKind::Kiwi => "kiwi",
            FruitKind::Pear => "pear",
            FruitKind::Coconut => "coconut",
            FruitKind::Peach => "peach",
        }
    }

    /// Resolve an asset name, including known aliases (`sandia` is a watermelon)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        let canonical = match name.as_str() {
            "sandia" => "watermelon",
            other => other,
        };
        Self::ALL.into_iter().find(|k| k.name() == canonical)
    }

    /// Juice color used for particles and the procedural fallback
    pub fn juice_color(&self) -> Rgb {
        match self {
            FruitKind::Apple => Rgb(220, 30, 30),
            FruitKind::Banana => Rgb(245, 215, 70),
            FruitKind::Orange => Rgb(255, 140, 0),
            FruitKind::Lemon => Rgb(245, 230, 80),
            FruitKind::Watermelon => Rgb(235, 35, 60),
            FruitKind::Pineapple => Rgb(250, 200, 70),
            FruitKind::Kiwi => Rgb(110, 180, 60),
            FruitKind::Pear => Rgb(170, 220, 120),
            FruitKind::Coconut => Rgb(230, 230, 220),
            FruitKind::Peach => Rgb(255, 180, 120),
        }
    }
}

/// Opaque handle owned by the external asset loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle(pub u32);

/// Everything the loader found for one fruit type
#[derive(Debug, Clone, Default)]
pub struct FruitAssets {
    /// Whole-fruit sprite variants (first is primary)
    pub whole: Vec<AssetHandle>,
    /// Single sprite showing the cut fruit
    pub sliced: Option<AssetHandle>,
    /// Pre-cut left/right halves
    pub halves: Option<(AssetHandle, AssetHandle)>,
    /// Scaled sprite size in pixels (width, height)
    pub size: Option<(f32, f32)>,
}

impl FruitAssets {
    /// A fruit may spawn only if it can be drawn whole and drawn cut
    pub fn is_spawnable(&self) -> bool {
        !self.whole.is_empty() && (self.sliced.is_some() || self.halves.is_some())
    }

    /// Collision radius derived from sprite size
    pub fn radius(&self) -> f32 {
        match self.size {
            Some((w, h)) if w > 0.0 && h > 0.0 => w.max(h) / 2.0,
            _ => DEFAULT_RADIUS,
        }
    }
}

/// Immutable asset catalog built once by the loader
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    fruits: BTreeMap<FruitKind, FruitAssets>,
    bomb: Option<AssetHandle>,
}

/// One fruit type eligible for spawning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterEntry {
    pub kind: FruitKind,
    pub radius: f32,
    /// Number of whole-image variants (at least 1)
    pub variants: usize,
}

impl AssetCatalog {
    /// Catalog with no images at all (everything renders procedurally)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fruit(mut self, kind: FruitKind, assets: FruitAssets) -> Self {
        self.fruits.insert(kind, assets);
        self
    }

    pub fn with_bomb(mut self, handle: AssetHandle) -> Self {
        self.bomb = Some(handle);
        self
    }

    /// Whole-fruit sprite for a given variant
    pub fn whole_image(&self, kind: FruitKind, variant: usize) -> Option<AssetHandle> {
        let assets = self.fruits.get(&kind)?;
        assets
            .whole
            .get(variant)
            .or_else(|| assets.whole.first())
            .copied()
    }

    /// Left/right half sprites, falling back to the single sliced sprite for both
    pub fn sliced_halves(&self, kind: FruitKind) -> Option<(AssetHandle, AssetHandle)> {
        let assets = self.fruits.get(&kind)?;
        assets.halves.or(assets.sliced.map(|s| (s, s)))
    }

    pub fn bomb_image(&self) -> Option<AssetHandle> {
        self.bomb
    }

    /// Fruit types the spawner may pick from
    ///
    /// Types without a way to render their sliced state are excluded. When no
    /// type qualifies the full catalog is used with procedural rendering.
    pub fn spawn_roster(&self) -> Vec<RosterEntry> {
        let roster: Vec<RosterEntry> = self
            .fruits
            .iter()
            .filter(|(_, assets)| assets.is_spawnable())
            .map(|(&kind, assets)| RosterEntry {
                kind,
                radius: assets.radius(),
                variants: assets.whole.len(),
            })
            .collect();

        for (kind, assets) in &self.fruits {
            if !assets.is_spawnable() {
                log::warn!("Skipping {}: no sliced or half images", kind.name());
            }
        }

        if roster.is_empty() {
            log::info!("No fruit images available, using procedural fruit");
            return FruitKind::ALL
                .into_iter()
                .map(|kind| RosterEntry {
                    kind,
                    radius: DEFAULT_RADIUS,
                    variants: 1,
                })
                .collect();
        }

        log::info!("Loaded {} fruit types", roster.len());
        roster
    }
}
