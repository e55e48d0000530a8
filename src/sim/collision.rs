//! Swipe-versus-target hit detection
//!
//! Every target is a circle. A swipe slices a target when one of its segments
//! passes strictly closer to the center than the radius.

use glam::Vec2;

use super::entity::Projectile;
use super::swipe::SwipeTracker;

/// Distance from `p` to the segment `a`-`b`
///
/// Projects `p` onto the line through `a` and `b`, clamps the projection to the
/// segment, and measures to the clamped point. A degenerate segment (`a == b`)
/// is treated as a point.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.length_squared();

    if len_sq == 0.0 {
        return ap.length();
    }

    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).length()
}

/// Does the segment `a`-`b` pass strictly inside the circle?
#[inline]
pub fn segment_hits_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    distance_point_to_segment(center, a, b) < radius
}

/// Is the projectile cut by any segment of the path?
///
/// Full-path check for callers that look at a finished swipe. The tick tests
/// each new pointer sample with [`is_sliced_by_newest`] instead.
pub fn is_sliced(target: &Projectile, path: &SwipeTracker) -> bool {
    path.segments()
        .any(|(a, b)| segment_hits_circle(a, b, target.pos, target.radius))
}

/// Is the projectile cut by the most recently added segment?
///
/// Earlier segments were already tested against the positions targets had
/// when those samples arrived.
pub fn is_sliced_by_newest(target: &Projectile, path: &SwipeTracker) -> bool {
    path.newest_segment()
        .is_some_and(|(a, b)| segment_hits_circle(a, b, target.pos, target.radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FruitKind;
    use crate::sim::entity::ProjectileKind;
    use proptest::prelude::*;

    fn fruit_at(x: f32, y: f32, radius: f32) -> Projectile {
        Projectile::new(
            1,
            ProjectileKind::Fruit {
                fruit: FruitKind::Orange,
                variant: 0,
            },
            Vec2::new(x, y),
            Vec2::ZERO,
            radius,
            0.0,
        )
    }

    fn path(points: &[(f32, f32)]) -> SwipeTracker {
        let mut swipe = SwipeTracker::new();
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            swipe.begin(Vec2::new(x, y));
        }
        for &(x, y) in iter {
            swipe.extend(Vec2::new(x, y));
        }
        swipe
    }

    #[test]
    fn test_distance_cases() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Perpendicular foot inside the segment
        assert_eq!(distance_point_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        // Beyond either end clamps to the endpoint
        assert_eq!(distance_point_to_segment(Vec2::new(-3.0, 4.0), a, b), 5.0);
        assert_eq!(distance_point_to_segment(Vec2::new(13.0, 4.0), a, b), 5.0);
        // Degenerate segment
        assert_eq!(distance_point_to_segment(Vec2::new(3.0, 4.0), a, a), 5.0);
    }

    #[test]
    fn test_horizontal_swipe_scenario() {
        let swipe = path(&[(100.0, 100.0), (500.0, 100.0)]);
        assert!(is_sliced(&fruit_at(300.0, 100.0, 30.0), &swipe));
        assert!(!is_sliced(&fruit_at(300.0, 200.0, 30.0), &swipe));
    }

    #[test]
    fn test_touching_edge_is_not_a_slice() {
        let swipe = path(&[(0.0, 0.0), (100.0, 0.0)]);
        assert!(!is_sliced(&fruit_at(50.0, 30.0, 30.0), &swipe));
        assert!(is_sliced(&fruit_at(50.0, 29.9, 30.0), &swipe));
    }

    #[test]
    fn test_short_paths_never_slice() {
        let target = fruit_at(0.0, 0.0, 30.0);
        assert!(!is_sliced(&target, &SwipeTracker::new()));
        assert!(!is_sliced(&target, &path(&[(0.0, 0.0)])));
        assert!(!is_sliced_by_newest(&target, &path(&[(0.0, 0.0)])));
    }

    #[test]
    fn test_newest_segment_only() {
        // First segment crosses the target, the newest one does not
        let swipe = path(&[(-50.0, 0.0), (50.0, 0.0), (50.0, 200.0)]);
        let target = fruit_at(0.0, 0.0, 20.0);
        assert!(is_sliced(&target, &swipe));
        assert!(!is_sliced_by_newest(&target, &swipe));
    }

    fn brute_force_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
        const SAMPLES: usize = 2000;
        (0..=SAMPLES)
            .map(|i| {
                let t = i as f32 / SAMPLES as f32;
                (p - a.lerp(b, t)).length()
            })
            .fold(f32::INFINITY, f32::min)
    }

    proptest! {
        #[test]
        fn prop_distance_matches_sampled_minimum(
            px in -500.0f32..500.0, py in -500.0f32..500.0,
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let (p, a, b) = (Vec2::new(px, py), Vec2::new(ax, ay), Vec2::new(bx, by));
            prop_assume!(a.distance(b) > 1.0);

            let exact = distance_point_to_segment(p, a, b);
            let sampled = brute_force_distance(p, a, b);
            // Sampling can only overestimate; step is at most |ab| / SAMPLES
            let step = a.distance(b) / 2000.0;
            prop_assert!(exact <= sampled + 1e-2);
            prop_assert!(sampled - exact <= step + 1e-2);
        }

        #[test]
        fn prop_path_through_center_always_slices(
            cx in 50.0f32..750.0, cy in 50.0f32..550.0,
            radius in 1.0f32..60.0,
            angle in 0.0f32..std::f32::consts::TAU,
            reach in 1.0f32..200.0,
        ) {
            let dir = Vec2::new(angle.cos(), angle.sin());
            let a = Vec2::new(cx, cy) - dir * reach;
            let b = Vec2::new(cx, cy) + dir * reach;
            let swipe = path(&[(a.x, a.y), (b.x, b.y)]);
            prop_assert!(is_sliced(&fruit_at(cx, cy, radius), &swipe));
        }

        #[test]
        fn prop_far_path_never_slices(
            cx in 50.0f32..750.0, cy in 50.0f32..550.0,
            radius in 1.0f32..60.0,
            gap in 0.5f32..100.0,
            len in 1.0f32..300.0,
        ) {
            // Horizontal path strictly above the circle
            let y = cy - radius - gap;
            let swipe = path(&[(cx - len, y), (cx + len, y)]);
            prop_assert!(!is_sliced(&fruit_at(cx, cy, radius), &swipe));
        }
    }
}
