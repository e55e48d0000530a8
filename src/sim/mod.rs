//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod debris;
pub mod entity;
pub mod slice;
pub mod spawner;
pub mod state;
pub mod swipe;
pub mod tick;

pub use collision::{distance_point_to_segment, is_sliced, segment_hits_circle};
pub use debris::{HalfBody, Particle, SplitHalves, slice_burst};
pub use entity::{MotionProfile, Projectile, ProjectileKind};
pub use slice::{combo_points, resolve_swipe};
pub use spawner::{SpawnTimer, Spawner};
pub use state::{GameEvent, GameOverCause, GameState, LifeLossPulse, SessionPhase, TitleZone};
pub use swipe::SwipeTracker;
pub use tick::{PointerEvent, TickInput, handle_pointer, tick};
