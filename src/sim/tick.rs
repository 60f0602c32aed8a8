//! Per-frame simulation step
//!
//! Fixed order every frame: player position, fire input, projectile bank,
//! then each enemy wave (which resolves collisions against the bank and the
//! player). Once the game-over latch closes, ticking does nothing.

use glam::Vec2;

use super::enemies::{EnemyState, WaveContext};
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cursor x in field coordinates (None: player stays put)
    pub cursor_x: Option<f32>,
    /// Fire one shot this frame (click/press). Extra presses within the same
    /// frame go through `GameState::fire`.
    pub fire: bool,
    /// Idle/demo mode - the autopilot steers and fires
    pub idle_mode: bool,
}

/// Advance the session by one frame
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) {
    if state.status.is_set() {
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    state.frame_count += 1;

    if let Some(x) = input.cursor_x {
        let field = state.field;
        state.player.track_cursor(x, &field);
    }

    if input.fire {
        state.fire();
    }

    state.player.shots.advance(&state.field, &state.status);

    let mut ctx = WaveContext {
        field: &state.field,
        player: &mut state.player,
        status: &mut state.status,
        frame: state.frame_count,
        rng: &mut state.rng,
        events: &mut state.events,
    };
    for wave in &mut state.waves {
        wave.advance(&mut ctx);
    }

    if let Some(frame) = state.status.latched_at() {
        log::info!(
            "Game over after {}s (frame {})",
            crate::format_elapsed(frame),
            frame
        );
    }
}

/// Demo AI: chase the lowest falling enemy and shoot when lined up under it
fn autopilot<R: RandomSource>(state: &GameState<R>, input: &mut TickInput) {
    let player = state.player.pos();
    let half_width = state.player.object.half_width();

    let target = state
        .waves
        .iter()
        .flat_map(|wave| wave.enemies())
        .filter(|enemy| enemy.state == EnemyState::Falling && enemy.pos().y < player.y)
        .max_by(|a, b| {
            a.pos()
                .y
                .partial_cmp(&b.pos().y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(enemy) = target {
        // Lead the target by the frames a shot needs to climb to it
        let climb = (player.y - enemy.pos().y).max(0.0) / state.player.shots.speed();
        let aim = enemy.pos() + Vec2::new(enemy.vel.x, 0.0) * climb;
        input.cursor_x = Some(aim.x.clamp(0.0, state.field.width));
        input.fire = (aim.x - player.x).abs() < half_width;
    }
}

/// Events a frame produced that end the session
pub fn is_terminal(event: &GameEvent) -> bool {
    matches!(event, GameEvent::PlayerHit { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemies::Archetype;
    use crate::sim::geom::{Field, Range};
    use crate::sim::rng::ScriptedSource;
    use crate::tuning::{EnemyTuning, Tuning};

    /// Tuning where nothing spawns for a long while
    fn quiet_tuning() -> Tuning {
        let quiet = |tuning: EnemyTuning| EnemyTuning {
            spawn_interval: Range::constant(100_000),
            ..tuning
        };
        Tuning {
            rock: quiet(EnemyTuning::rock()),
            rocket: quiet(EnemyTuning::rocket()),
            ..Tuning::default()
        }
    }

    fn quiet_state() -> GameState<ScriptedSource> {
        GameState::with_source(quiet_tuning(), Field::new(800.0, 600.0), ScriptedSource::default())
    }

    #[test]
    fn test_tick_counts_frames_and_tracks_cursor() {
        let mut state = quiet_state();
        let input = TickInput {
            cursor_x: Some(120.0),
            ..Default::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frame_count, 2);
        assert_eq!(state.player.pos().x, 120.0);
    }

    #[test]
    fn test_six_shots_then_regen() {
        let mut state = quiet_state();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..7 {
            tick(&mut state, &fire);
        }
        assert_eq!(state.player.shots.count(), 0);

        // First shot left the full state on frame 1; 7 frames already elapsed
        for _ in 0..53 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.shots.count(), 1);
    }

    #[test]
    fn test_enemy_reaching_player_ends_session() {
        let mut state = quiet_state();
        let player = state.player.pos();
        if let Some(wave) = state.wave_mut(Archetype::Rocket) {
            wave.spawn_at(player - Vec2::new(0.0, 100.0), Vec2::new(0.0, 6.0));
        }

        let mut frames = 0;
        while !state.is_game_over() && frames < 100 {
            tick(&mut state, &TickInput::default());
            frames += 1;
        }
        assert!(state.is_game_over());
        assert_eq!(state.status.latched_at(), Some(state.frame_count));
        assert!(state.events().iter().any(is_terminal));

        // Frozen afterwards
        let frame = state.frame_count;
        let count = state.player.shots.count();
        tick(
            &mut state,
            &TickInput {
                fire: true,
                cursor_x: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(state.frame_count, frame);
        assert_eq!(state.player.shots.count(), count);
        assert_eq!(state.player.pos(), player);
    }

    #[test]
    fn test_shot_stamped_with_session_frame() {
        let mut state = quiet_state();
        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
        }
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(state.frame_count, 4);
        assert_eq!(state.player.shots.projectiles()[0].created_at_frame, 4);
    }

    #[test]
    fn test_shot_fired_this_frame_destroys_enemy() {
        let mut state = quiet_state();
        let muzzle = state.player.muzzle();
        // Shot climbs 10 to muzzle.y - 10; rock falls 2 onto it
        if let Some(wave) = state.wave_mut(Archetype::Rock) {
            wave.spawn_at(muzzle - Vec2::new(0.0, 60.0), Vec2::new(0.0, 2.0));
        }

        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );

        let rock = &state.wave(Archetype::Rock).unwrap().enemies()[0];
        assert!(!rock.is_alive());
        assert!(state.player.shots.projectiles().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let field = Field::new(640.0, 480.0);
        let mut a = GameState::new(Tuning::default(), field, 99999);
        let mut b = GameState::new(Tuning::default(), field, 99999);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..600 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.frame_count, b.frame_count);
        assert_eq!(a.status, b.status);
        assert_eq!(a.player.pos(), b.player.pos());
        assert_eq!(a.player.shots.count(), b.player.shots.count());
        assert_eq!(a.events(), b.events());
        for (wa, wb) in a.waves.iter().zip(&b.waves) {
            let pa: Vec<Vec2> = wa.enemies().iter().map(|e| e.pos()).collect();
            let pb: Vec<Vec2> = wb.enemies().iter().map(|e| e.pos()).collect();
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_autopilot_aims_at_lowest_enemy() {
        let mut state = quiet_state();
        if let Some(wave) = state.wave_mut(Archetype::Rocket) {
            wave.spawn_at(Vec2::new(100.0, 50.0), Vec2::new(0.0, 3.0));
            wave.spawn_at(Vec2::new(600.0, 200.0), Vec2::new(0.0, 3.0));
        }
        let mut input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        autopilot(&state, &mut input);
        assert_eq!(input.cursor_x, Some(600.0));
        assert!(!input.fire);

        state.player.track_cursor(590.0, &Field::new(800.0, 600.0));
        autopilot(&state, &mut input);
        assert!(input.fire);
    }
}
