//! Demo input that plays the game by itself
//!
//! Slices the title, then cuts one fruit at a time with a short horizontal
//! swipe through its center, skipping any cut that would clip a bomb. After a
//! game over it waits a moment and restarts.

use glam::Vec2;

use super::input::{InputEvent, InputSource};
use crate::consts::*;
use crate::sim::{GameState, Projectile, SessionPhase, segment_hits_circle};

/// Extra clearance kept around bombs
const BOMB_CLEARANCE: f32 = 25.0;
/// How far past the fruit edge each swipe reaches
const SWIPE_OVERSHOOT: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between swipes
    reaction_ticks: u32,
    cooldown: u32,
    /// Ticks to linger on the game over screen
    restart_delay: u32,
    game_over_ticks: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(12, 90)
    }
}

impl Autopilot {
    pub fn new(reaction_ticks: u32, restart_delay: u32) -> Self {
        Self {
            reaction_ticks,
            cooldown: 0,
            restart_delay,
            game_over_ticks: 0,
        }
    }

    fn swipe(from: Vec2, to: Vec2) -> Vec<InputEvent> {
        vec![
            InputEvent::Press(from),
            InputEvent::Move(to),
            InputEvent::Release,
        ]
    }

    /// Horizontal cut through `fruit` that stays clear of every bomb
    fn safe_cut(fruit: &Projectile, bombs: &[Projectile]) -> Option<(Vec2, Vec2)> {
        let reach = fruit.radius + SWIPE_OVERSHOOT;
        let a = fruit.pos - Vec2::new(reach, 0.0);
        let b = fruit.pos + Vec2::new(reach, 0.0);
        let clear = bombs
            .iter()
            .all(|bomb| !segment_hits_circle(a, b, bomb.pos, bomb.radius + BOMB_CLEARANCE));
        clear.then_some((a, b))
    }

    fn play(&mut self, state: &GameState) -> Vec<InputEvent> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Vec::new();
        }

        // Lowest visible fruit first: it is the one about to be missed
        let target = state
            .fruits
            .iter()
            .filter(|f| f.pos.y - f.radius >= FIELD_TOP && f.pos.y + f.radius <= FIELD_BOTTOM)
            .filter_map(|f| Self::safe_cut(f, &state.bombs).map(|cut| (f, cut)))
            .max_by(|(a, _), (b, _)| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        match target {
            Some((_, (a, b))) => {
                self.cooldown = self.reaction_ticks;
                Self::swipe(a, b)
            }
            None => Vec::new(),
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        match state.phase {
            SessionPhase::Title => {
                let zone = state.title_zone;
                let reach = Vec2::new(zone.radius + SWIPE_OVERSHOOT, 0.0);
                Self::swipe(zone.center - reach, zone.center + reach)
            }
            SessionPhase::Playing => {
                self.game_over_ticks = 0;
                self.play(state)
            }
            SessionPhase::BombFlash { .. } => Vec::new(),
            SessionPhase::GameOver { .. } => {
                self.game_over_ticks += 1;
                if self.game_over_ticks >= self.restart_delay {
                    self.game_over_ticks = 0;
                    vec![InputEvent::Restart]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetCatalog, FruitKind};
    use crate::platform::split_input;
    use crate::sim::{GameOverCause, ProjectileKind, tick};
    use crate::tuning::Difficulty;

    fn state() -> GameState {
        GameState::new(77, Difficulty::Normal, AssetCatalog::empty().spawn_roster())
    }

    fn put(s: &mut GameState, kind: ProjectileKind, x: f32, y: f32) {
        let id = s.next_entity_id();
        let p = Projectile::new(id, kind, Vec2::new(x, y), Vec2::ZERO, 30.0, 0.0);
        if kind.is_bomb() {
            s.bombs.push(p);
        } else {
            s.fruits.push(p);
        }
    }

    fn melon() -> ProjectileKind {
        ProjectileKind::Fruit {
            fruit: FruitKind::Watermelon,
            variant: 0,
        }
    }

    #[test]
    fn test_starts_from_title() {
        let mut s = state();
        let mut pilot = Autopilot::default();
        let (input, _) = split_input(&pilot.poll(&s));
        tick(&mut s, &input);
        assert_eq!(s.phase, SessionPhase::Playing);
    }

    #[test]
    fn test_cuts_fruit_and_avoids_bombs() {
        let mut s = state();
        s.phase = SessionPhase::Playing;
        s.spawner.fruit.interval = f32::MAX;
        s.spawner.bomb = None;
        put(&mut s, melon(), 300.0, 300.0);
        // Bomb right next to the second fruit
        put(&mut s, melon(), 600.0, 400.0);
        put(&mut s, ProjectileKind::Bomb, 660.0, 400.0);

        let mut pilot = Autopilot::new(0, 10);
        for _ in 0..3 {
            let (input, _) = split_input(&pilot.poll(&s));
            tick(&mut s, &input);
        }
        assert_eq!(s.phase, SessionPhase::Playing);
        assert_eq!(s.score, 1);
        assert_eq!(s.fruits.len(), 1);
        assert_eq!(s.bombs.len(), 1);
    }

    #[test]
    fn test_restarts_after_delay() {
        let mut s = state();
        s.phase = SessionPhase::GameOver {
            cause: GameOverCause::BombSliced,
        };
        let mut pilot = Autopilot::new(0, 3);
        assert!(pilot.poll(&s).is_empty());
        assert!(pilot.poll(&s).is_empty());
        assert_eq!(pilot.poll(&s), vec![InputEvent::Restart]);
    }

    #[test]
    fn test_long_demo_stays_consistent() {
        let mut s = state();
        let mut pilot = Autopilot::default();
        let mut scored = false;
        for _ in 0..3000 {
            let (input, _) = split_input(&pilot.poll(&s));
            tick(&mut s, &input);
            assert!(s.lives <= MAX_LIVES);
            scored |= s.score > 0;
        }
        assert!(scored, "autopilot should land at least one slice");
    }
}
