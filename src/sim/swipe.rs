//! Pointer swipe tracking

use glam::Vec2;

/// The pointer trail since the last press
///
/// The path is non-empty only while the pointer is held.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    points: Vec<Vec2>,
    active: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed: start a fresh single-point path
    pub fn begin(&mut self, point: Vec2) {
        self.points.clear();
        self.points.push(point);
        self.active = true;
    }

    /// Pointer moved: append while tracking. Returns whether the point was kept.
    pub fn extend(&mut self, point: Vec2) -> bool {
        if !self.active {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Pointer released
    pub fn end(&mut self) {
        self.points.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Consecutive point pairs, oldest first
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// The segment added by the most recent sample
    pub fn newest_segment(&self) -> Option<(Vec2, Vec2)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}
