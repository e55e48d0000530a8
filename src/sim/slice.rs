//! Slice resolution and scoring
//!
//! Runs on every pointer sample while playing. Bombs are checked first: a bomb
//! hit ends the run and nothing else on that sample counts.

use super::collision::is_sliced_by_newest;
use super::debris::{SplitHalves, slice_burst};
use super::entity::Projectile;
use super::state::{GameEvent, GameState, SessionPhase};
use crate::consts::*;

/// Points for the current combo: 1 for a lone slice, +1 per chained slice
#[inline]
pub fn combo_points(combo: u32) -> u64 {
    1 + combo.saturating_sub(1) as u64
}

/// Test the newest swipe segment against every live target
pub fn resolve_swipe(state: &mut GameState) {
    if state.phase != SessionPhase::Playing {
        return;
    }

    if let Some(idx) = state
        .bombs
        .iter()
        .position(|bomb| is_sliced_by_newest(bomb, &state.swipe))
    {
        let bomb = state.bombs.remove(idx);
        slice_bomb(state, &bomb);
        return;
    }

    let (hit, missed): (Vec<Projectile>, Vec<Projectile>) = std::mem::take(&mut state.fruits)
        .into_iter()
        .partition(|fruit| is_sliced_by_newest(fruit, &state.swipe));
    state.fruits = missed;

    for fruit in &hit {
        slice_fruit(state, fruit);
    }
}

/// Cut a fruit: halves, juice, combo and score
pub fn slice_fruit(state: &mut GameState, fruit: &Projectile) {
    let Some(kind) = fruit.fruit() else {
        return;
    };

    state
        .split_halves
        .push(SplitHalves::new(kind, fruit.pos, &mut state.rng));
    let burst = slice_burst(kind, fruit.pos, &mut state.rng);
    state.particles.extend(burst);

    // The combo only lapses when its timer runs out, never on a miss
    state.combo += 1;
    state.combo_timer = COMBO_TIMEOUT_TICKS;

    let points = combo_points(state.combo);
    log::debug!(
        "{} sliced, combo {}x, +{} points",
        kind.name(),
        state.combo,
        points
    );
    state.events.push(GameEvent::FruitSliced {
        fruit: kind,
        pos: fruit.pos,
        combo: state.combo,
        points,
    });
    state.award(points);
}

/// Cut a bomb: the run ends after the flash
pub fn slice_bomb(state: &mut GameState, bomb: &Projectile) {
    log::info!("Bomb sliced at ({:.0}, {:.0}), game over", bomb.pos.x, bomb.pos.y);
    state.phase = SessionPhase::BombFlash {
        center: bomb.pos,
        elapsed_ticks: 0,
    };
    // In-flight targets vanish; debris keeps its place under the flash
    state.fruits.clear();
    state.bombs.clear();
    state.events.push(GameEvent::BombSliced { pos: bomb.pos });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetCatalog, FruitKind};
    use crate::sim::entity::ProjectileKind;
    use crate::tuning::Difficulty;
    use glam::Vec2;

    fn playing() -> GameState {
        let mut s = GameState::new(42, Difficulty::Normal, AssetCatalog::empty().spawn_roster());
        s.phase = SessionPhase::Playing;
        s
    }

    fn add_fruit(s: &mut GameState, x: f32, y: f32) -> u32 {
        let id = s.next_entity_id();
        s.fruits.push(Projectile::new(
            id,
            ProjectileKind::Fruit {
                fruit: FruitKind::Lemon,
                variant: 0,
            },
            Vec2::new(x, y),
            Vec2::ZERO,
            30.0,
            0.0,
        ));
        id
    }

    fn add_bomb(s: &mut GameState, x: f32, y: f32) {
        let id = s.next_entity_id();
        s.bombs
            .push(Projectile::new(id, ProjectileKind::Bomb, Vec2::new(x, y), Vec2::ZERO, 30.0, 0.0));
    }

    fn swipe(s: &mut GameState, from: Vec2, to: Vec2) {
        s.swipe.begin(from);
        s.swipe.extend(to);
        resolve_swipe(s);
    }

    #[test]
    fn test_combo_points() {
        assert_eq!(combo_points(1), 1);
        assert_eq!(combo_points(2), 2);
        assert_eq!(combo_points(3), 3);
    }

    #[test]
    fn test_one_segment_slices_every_fruit_it_crosses() {
        let mut s = playing();
        add_fruit(&mut s, 200.0, 300.0);
        add_fruit(&mut s, 400.0, 300.0);
        let untouched = add_fruit(&mut s, 400.0, 450.0);

        swipe(&mut s, Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0));

        assert_eq!(s.fruits.len(), 1);
        assert_eq!(s.fruits[0].id, untouched);
        assert_eq!(s.split_halves.len(), 2);
        assert_eq!(s.combo, 2);
        assert_eq!(s.score, 1 + 2);
        assert_eq!(s.particles.len(), 2 * (JUICE_PARTICLES + FRAGMENT_PARTICLES));
        assert_eq!(s.combo_timer, COMBO_TIMEOUT_TICKS);
    }

    #[test]
    fn test_bomb_takes_priority_and_clears_field() {
        let mut s = playing();
        s.score = 40;
        s.combo = 5;
        add_fruit(&mut s, 200.0, 300.0);
        add_fruit(&mut s, 600.0, 100.0);
        add_bomb(&mut s, 300.0, 300.0);

        swipe(&mut s, Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0));

        assert!(matches!(s.phase, SessionPhase::BombFlash { center, .. } if center == Vec2::new(300.0, 300.0)));
        assert!(s.fruits.is_empty());
        assert!(s.bombs.is_empty());
        // The fruit on the same segment was not scored
        assert_eq!(s.score, 40);
        assert!(s.events.contains(&GameEvent::BombSliced {
            pos: Vec2::new(300.0, 300.0)
        }));
    }

    #[test]
    fn test_no_slicing_outside_play() {
        let mut s = playing();
        s.phase = SessionPhase::Title;
        add_fruit(&mut s, 300.0, 300.0);
        swipe(&mut s, Vec2::new(100.0, 300.0), Vec2::new(500.0, 300.0));
        assert_eq!(s.fruits.len(), 1);
        assert_eq!(s.score, 0);
    }
}
