//! Frame assembly
//!
//! Order: background, fruits, bombs, particles, halves, swipe, HUD, overlays.
//! Entities are culled once they rise above the field into the top bar.

use std::f32::consts::PI;

use glam::Vec2;

use super::{DrawItem, EntityView, HudView, Renderer, Shape, Visual, WoodGrain};
use crate::catalog::{AssetCatalog, FruitKind};
use crate::consts::*;
use crate::sim::{GameState, Projectile, ProjectileKind, SessionPhase, SplitHalves};

/// Radius of a procedurally drawn half
const HALF_RADIUS: f32 = 15.0;
/// Halves are hidden while their top edge is still above the field
const HALF_CULL_MARGIN: f32 = 20.0;

/// Emit one frame to `renderer`; `player_name` is shown on the title and HUD
pub fn draw_frame<R: Renderer>(
    state: &GameState,
    catalog: &AssetCatalog,
    background: &WoodGrain,
    player_name: &str,
    renderer: &mut R,
) {
    renderer.draw(&DrawItem::Background(background));

    if let SessionPhase::Title = state.phase {
        draw_swipe(state, renderer, false);
        let zone = state.title_zone;
        renderer.draw(&DrawItem::Title {
            center: zone.center,
            radius: zone.radius,
            best_score: state.best_score,
            difficulty: state.difficulty,
            player_name,
        });
        return;
    }

    for fruit in state.fruits.iter().filter(|f| in_field(f)) {
        renderer.draw(&DrawItem::Fruit(fruit_view(fruit, catalog)));
    }
    for bomb in state.bombs.iter().filter(|b| in_field(b)) {
        renderer.draw(&DrawItem::Bomb(bomb_view(bomb, catalog)));
    }
    for particle in state.particles.iter().filter(|p| p.pos.y >= FIELD_TOP) {
        renderer.draw(&DrawItem::Particle {
            pos: particle.pos,
            color: particle.color.scaled(particle.fade()),
            size: particle.size,
        });
    }
    for split in &state.split_halves {
        let visible = split
            .halves
            .iter()
            .all(|h| h.pos.y - HALF_CULL_MARGIN >= FIELD_TOP);
        if visible {
            for view in half_views(split, catalog) {
                renderer.draw(&DrawItem::Half(view));
            }
        }
    }

    // The flash covers everything; no trail or HUD underneath it
    if let SessionPhase::BombFlash {
        center,
        elapsed_ticks,
    } = state.phase
    {
        renderer.draw(&DrawItem::BombFlash {
            center,
            progress: elapsed_ticks as f32 / BOMB_FLASH_TICKS as f32,
        });
        return;
    }

    draw_swipe(state, renderer, true);
    renderer.draw(&DrawItem::Hud {
        view: hud_view(state),
        player_name,
    });

    if let SessionPhase::GameOver { .. } = state.phase {
        renderer.draw(&DrawItem::GameOver {
            score: state.score,
            best_score: state.best_score,
        });
    }
}

fn in_field(p: &Projectile) -> bool {
    p.pos.y - p.radius >= FIELD_TOP
}

fn draw_swipe<R: Renderer>(state: &GameState, renderer: &mut R, clip_to_field: bool) {
    let points: Vec<Vec2> = state
        .swipe
        .points()
        .iter()
        .copied()
        .filter(|p| !clip_to_field || (FIELD_TOP..=FIELD_BOTTOM).contains(&p.y))
        .collect();
    if points.len() > 1 {
        renderer.draw(&DrawItem::Swipe(points));
    }
}

fn procedural_fruit(kind: FruitKind) -> Shape {
    let color = kind.juice_color();
    Shape::Fruit {
        color,
        highlight: color.brightened(1.0, 50),
    }
}

pub fn fruit_view(fruit: &Projectile, catalog: &AssetCatalog) -> EntityView {
    let visual = match fruit.kind {
        ProjectileKind::Fruit { fruit: kind, variant } => catalog
            .whole_image(kind, variant)
            .map_or(Visual::Procedural(procedural_fruit(kind)), Visual::Sprite),
        ProjectileKind::Bomb => Visual::Procedural(Shape::Bomb),
    };
    EntityView {
        pos: fruit.pos,
        rotation: fruit.angle,
        radius: fruit.radius,
        scale: 1.0,
        visual,
    }
}

/// Gentle size pulse; sprites scale by ±10 %, procedural bombs grow by ±3 px
pub fn bomb_pulse(age_ticks: u32) -> f32 {
    (age_ticks as f32 * 0.2).sin()
}

pub fn bomb_view(bomb: &Projectile, catalog: &AssetCatalog) -> EntityView {
    let pulse = bomb_pulse(bomb.age_ticks);
    match catalog.bomb_image() {
        Some(handle) => EntityView {
            pos: bomb.pos,
            rotation: bomb.angle,
            radius: bomb.radius,
            scale: 1.0 + pulse * 0.1,
            visual: Visual::Sprite(handle),
        },
        None => EntityView {
            pos: bomb.pos,
            rotation: bomb.angle,
            radius: bomb.radius + pulse * 3.0,
            scale: 1.0,
            visual: Visual::Procedural(Shape::Bomb),
        },
    }
}

pub fn half_views(split: &SplitHalves, catalog: &AssetCatalog) -> [EntityView; 2] {
    let sprites = catalog.sliced_halves(split.fruit);
    let color = split.fruit.juice_color();
    let mut views = split.halves.map(|half| EntityView {
        pos: half.pos,
        rotation: half.rotation,
        radius: HALF_RADIUS,
        scale: 1.0,
        visual: Visual::Procedural(Shape::Half { color }),
    });
    if let Some((left, right)) = sprites {
        views[0].visual = Visual::Sprite(left);
        views[1].visual = Visual::Sprite(right);
    }
    views
}

/// Scale of a heart `progress` of the way through its pulse (1.0 to 1.5 and back)
pub fn heart_pulse_scale(progress: f32) -> f32 {
    1.0 + 0.5 * (PI * progress.clamp(0.0, 1.0)).sin()
}

fn hud_view(state: &GameState) -> HudView {
    HudView {
        score: state.score,
        best_score: state.best_score,
        lives: state.lives,
        max_lives: MAX_LIVES,
        pulse: state
            .life_loss
            .map(|p| (p.heart, heart_pulse_scale(p.progress()))),
        combo: (state.combo > 1 && state.combo_timer > 0).then_some(state.combo),
        difficulty: state.difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetHandle, FruitAssets};
    use crate::sim::{GameOverCause, LifeLossPulse, slice_burst};
    use crate::tuning::Difficulty;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[derive(Default)]
    struct Recorder {
        labels: Vec<&'static str>,
        fruits: Vec<EntityView>,
        halves: Vec<EntityView>,
        hud: Option<HudView>,
        names: Vec<String>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, item: &DrawItem<'_>) {
            self.labels.push(item.label());
            match item {
                DrawItem::Fruit(v) => self.fruits.push(*v),
                DrawItem::Half(v) => self.halves.push(*v),
                DrawItem::Hud { view, player_name } => {
                    self.hud = Some(*view);
                    self.names.push(player_name.to_string());
                }
                DrawItem::Title { player_name, .. } => self.names.push(player_name.to_string()),
                _ => {}
            }
        }
    }

    fn projectile(s: &mut GameState, kind: ProjectileKind, pos: Vec2) -> Projectile {
        let id = s.next_entity_id();
        Projectile::new(id, kind, pos, Vec2::ZERO, 30.0, 0.0)
    }

    fn apple() -> ProjectileKind {
        ProjectileKind::Fruit {
            fruit: FruitKind::Apple,
            variant: 0,
        }
    }

    /// A playing state with one of everything
    fn busy_state() -> GameState {
        let mut s = GameState::new(3, Difficulty::Normal, AssetCatalog::empty().spawn_roster());
        s.phase = SessionPhase::Playing;
        let f = projectile(&mut s, apple(), Vec2::new(200.0, 300.0));
        s.fruits.push(f);
        let b = projectile(&mut s, ProjectileKind::Bomb, Vec2::new(500.0, 300.0));
        s.bombs.push(b);
        let mut rng = Pcg32::seed_from_u64(1);
        s.split_halves
            .push(SplitHalves::new(FruitKind::Kiwi, Vec2::new(400.0, 400.0), &mut rng));
        s.particles
            .extend(slice_burst(FruitKind::Kiwi, Vec2::new(400.0, 400.0), &mut rng));
        s.swipe.begin(Vec2::new(100.0, 200.0));
        s.swipe.extend(Vec2::new(150.0, 220.0));
        s
    }

    fn frame(s: &GameState, catalog: &AssetCatalog) -> Recorder {
        let mut rec = Recorder::default();
        draw_frame(s, catalog, &WoodGrain::new(), "Ada", &mut rec);
        rec
    }

    #[test]
    fn test_draw_order() {
        let s = busy_state();
        let rec = frame(&s, &AssetCatalog::empty());
        let mut labels = rec.labels.clone();
        labels.dedup();
        assert_eq!(
            labels,
            vec!["background", "fruit", "bomb", "particle", "half", "swipe", "hud"]
        );
        assert_eq!(rec.labels.iter().filter(|l| **l == "particle").count(), 7);
        assert_eq!(rec.labels.iter().filter(|l| **l == "half").count(), 2);
    }

    #[test]
    fn test_drawing_does_not_mutate() {
        let s = busy_state();
        let before = format!("{:?}", s);
        frame(&s, &AssetCatalog::empty());
        assert_eq!(format!("{:?}", s), before);
    }

    #[test]
    fn test_procedural_fallback_and_sprites() {
        let s = busy_state();
        let rec = frame(&s, &AssetCatalog::empty());
        assert!(matches!(
            rec.fruits[0].visual,
            Visual::Procedural(Shape::Fruit { .. })
        ));
        assert!(matches!(
            rec.halves[0].visual,
            Visual::Procedural(Shape::Half { .. })
        ));

        let catalog = AssetCatalog::empty()
            .with_fruit(
                FruitKind::Apple,
                FruitAssets {
                    whole: vec![AssetHandle(1)],
                    sliced: Some(AssetHandle(2)),
                    ..Default::default()
                },
            )
            .with_fruit(
                FruitKind::Kiwi,
                FruitAssets {
                    whole: vec![AssetHandle(3)],
                    halves: Some((AssetHandle(4), AssetHandle(5))),
                    ..Default::default()
                },
            );
        let rec = frame(&s, &catalog);
        assert_eq!(rec.fruits[0].visual, Visual::Sprite(AssetHandle(1)));
        assert_eq!(rec.halves[0].visual, Visual::Sprite(AssetHandle(4)));
        assert_eq!(rec.halves[1].visual, Visual::Sprite(AssetHandle(5)));
    }

    #[test]
    fn test_entities_above_field_are_culled() {
        let mut s = busy_state();
        s.fruits[0].pos.y = FIELD_TOP + 10.0;
        let rec = frame(&s, &AssetCatalog::empty());
        assert!(rec.fruits.is_empty());
    }

    #[test]
    fn test_title_frame() {
        let mut s = busy_state();
        s.phase = SessionPhase::Title;
        let rec = frame(&s, &AssetCatalog::empty());
        assert_eq!(rec.labels, vec!["background", "swipe", "title"]);
        assert_eq!(rec.names, vec!["Ada"]);
    }

    #[test]
    fn test_player_name_reaches_hud() {
        let s = busy_state();
        let rec = frame(&s, &AssetCatalog::empty());
        assert_eq!(rec.names, vec!["Ada"]);

        let mut rec = Recorder::default();
        draw_frame(&s, &AssetCatalog::empty(), &WoodGrain::new(), "", &mut rec);
        assert_eq!(rec.names, vec![""]);
    }

    #[test]
    fn test_bomb_flash_covers_hud() {
        let mut s = busy_state();
        s.phase = SessionPhase::BombFlash {
            center: Vec2::new(500.0, 300.0),
            elapsed_ticks: 21,
        };
        let mut rec = Recorder::default();
        let mut progress = None;
        struct Flash<'r>(&'r mut Recorder, &'r mut Option<f32>);
        impl Renderer for Flash<'_> {
            fn draw(&mut self, item: &DrawItem<'_>) {
                if let DrawItem::BombFlash { progress, .. } = item {
                    *self.1 = Some(*progress);
                }
                self.0.draw(item);
            }
        }
        draw_frame(
            &s,
            &AssetCatalog::empty(),
            &WoodGrain::new(),
            "Ada",
            &mut Flash(&mut rec, &mut progress),
        );
        assert_eq!(rec.labels.last(), Some(&"bomb_flash"));
        assert!(!rec.labels.contains(&"hud"));
        assert_eq!(progress, Some(0.5));
    }

    #[test]
    fn test_game_over_overlay_and_hud() {
        let mut s = busy_state();
        s.phase = SessionPhase::GameOver {
            cause: GameOverCause::LivesExhausted,
        };
        s.lives = 0;
        s.combo = 3;
        s.combo_timer = 10;
        s.life_loss = Some(LifeLossPulse {
            heart: 2,
            remaining_ticks: LIFE_LOSS_TICKS / 2,
        });
        let rec = frame(&s, &AssetCatalog::empty());
        assert_eq!(rec.labels.last(), Some(&"game_over"));
        let hud = rec.hud.unwrap();
        assert_eq!(hud.lives, 0);
        assert_eq!(hud.combo, Some(3));
        let (heart, scale) = hud.pulse.unwrap();
        assert_eq!(heart, 2);
        assert!((scale - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_bomb_pulse_bounds() {
        let mut s = busy_state();
        let catalog = AssetCatalog::empty().with_bomb(AssetHandle(9));
        for age in 0..100 {
            s.bombs[0].age_ticks = age;
            let sprite = bomb_view(&s.bombs[0], &catalog);
            assert!((0.9..=1.1).contains(&sprite.scale));
            let drawn = bomb_view(&s.bombs[0], &AssetCatalog::empty());
            assert!((27.0..=33.0).contains(&drawn.radius));
        }
    }
}
