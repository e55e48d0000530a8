//! Fixed-tick simulation step
//!
//! One call to [`tick`] processes the pointer samples that arrived since the
//! previous tick, then advances the world by exactly one step.

use glam::Vec2;

use super::collision::segment_hits_circle;
use super::slice::resolve_swipe;
use super::state::{GameEvent, GameOverCause, GameState, LifeLossPulse, SessionPhase};
use crate::consts::*;

/// A single pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Vec2),
    Move(Vec2),
    Release,
}

/// Input gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
    /// Restart request (only honored on the game over screen)
    pub restart: bool,
}

/// Advance the session by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart && matches!(state.phase, SessionPhase::GameOver { .. }) {
        log::info!("Restarting run");
        state.reset();
        state.events.push(GameEvent::Restarted);
    }

    for &event in &input.pointer {
        handle_pointer(state, event);
    }

    state.time_ticks += 1;

    match state.phase {
        SessionPhase::Title => {}

        SessionPhase::Playing => {
            decay_timers(state);
            spawn(state);
            update_fruits(state);
            update_bombs(state);
            update_debris(state);
        }

        SessionPhase::BombFlash {
            center,
            elapsed_ticks,
        } => {
            // Everything else stays frozen under the flash
            let elapsed_ticks = elapsed_ticks + 1;
            if elapsed_ticks >= BOMB_FLASH_TICKS {
                end_run(state, GameOverCause::BombSliced);
            } else {
                state.phase = SessionPhase::BombFlash {
                    center,
                    elapsed_ticks,
                };
            }
        }

        SessionPhase::GameOver { .. } => {
            decay_timers(state);
            update_debris(state);
        }
    }
}

/// Feed one pointer event to the swipe tracker and react to the new segment
pub fn handle_pointer(state: &mut GameState, event: PointerEvent) {
    match event {
        PointerEvent::Press(pos) => state.swipe.begin(pos),
        PointerEvent::Release => state.swipe.end(),
        PointerEvent::Move(pos) => {
            if !state.swipe.extend(pos) {
                return;
            }
            match state.phase {
                SessionPhase::Title => check_title_slice(state),
                SessionPhase::Playing => resolve_swipe(state),
                SessionPhase::BombFlash { .. } | SessionPhase::GameOver { .. } => {}
            }
        }
    }
}

fn check_title_slice(state: &mut GameState) {
    let zone = state.title_zone;
    let hit = state
        .swipe
        .newest_segment()
        .is_some_and(|(a, b)| segment_hits_circle(a, b, zone.center, zone.radius));
    if hit {
        log::info!("Title sliced, starting {} run", state.difficulty.as_str());
        state.phase = SessionPhase::Playing;
        state.events.push(GameEvent::GameStarted);
    }
}

fn end_run(state: &mut GameState, cause: GameOverCause) {
    log::info!("Game over ({:?}), score {}", cause, state.score);
    state.phase = SessionPhase::GameOver { cause };
    state.events.push(GameEvent::GameOver { cause });
}

/// Combo window and heart pulse countdowns
fn decay_timers(state: &mut GameState) {
    if state.combo_timer > 0 {
        state.combo_timer -= 1;
        if state.combo_timer == 0 {
            state.combo = 0;
        }
    }

    if let Some(pulse) = &mut state.life_loss {
        pulse.remaining_ticks = pulse.remaining_ticks.saturating_sub(1);
        if pulse.remaining_ticks == 0 {
            state.life_loss = None;
        }
    }
}

fn spawn(state: &mut GameState) {
    let due = state.spawner.advance();

    if due.fruit {
        let id = state.next_entity_id();
        if let Some(fruit) = state.spawner.launch_fruit(id, &state.roster, &mut state.rng) {
            state.fruits.push(fruit);
            state.events.push(GameEvent::Thrown { bomb: false });
        }
    }

    if due.bomb {
        let id = state.next_entity_id();
        let bomb = state.spawner.launch_bomb(id, &mut state.rng);
        state.bombs.push(bomb);
        state.events.push(GameEvent::Thrown { bomb: true });
    }
}

fn update_fruits(state: &mut GameState) {
    for fruit in &mut state.fruits {
        fruit.update();
    }

    let (missed, flying): (Vec<_>, Vec<_>) = std::mem::take(&mut state.fruits)
        .into_iter()
        .partition(|f| f.is_out_of_field());
    state.fruits = flying;

    for fruit in missed {
        if state.phase != SessionPhase::Playing || !fruit.is_missed() {
            continue;
        }
        state.lives = state.lives.saturating_sub(1);
        state.life_loss = Some(LifeLossPulse {
            heart: MAX_LIVES - state.lives - 1,
            remaining_ticks: LIFE_LOSS_TICKS,
        });
        log::debug!(
            "{} missed, {} lives left",
            fruit.fruit().map_or("fruit", |k| k.name()),
            state.lives
        );
        state.events.push(GameEvent::FruitMissed {
            lives_left: state.lives,
        });
        if state.lives == 0 {
            end_run(state, GameOverCause::LivesExhausted);
        }
    }
}

fn update_bombs(state: &mut GameState) {
    for bomb in &mut state.bombs {
        bomb.update();
    }
    // A bomb that falls away is harmless
    state.bombs.retain(|b| !b.is_out_of_field());
}

fn update_debris(state: &mut GameState) {
    for split in &mut state.split_halves {
        split.update();
    }
    state.split_halves.retain(|s| s.is_alive());

    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());
}
