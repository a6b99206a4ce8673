//! Simulation tick
//!
//! Core game step: apply input, move, maybe spawn, check collision, score.

use glam::Vec2;

use super::collision::player_hit;
use super::difficulty;
use super::motion::move_enemies;
use super::spawn::{spawn_due, spawn_enemy};
use super::state::{GamePhase, SessionState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer/touch position in field coordinates (last write wins)
    pub pointer: Option<Vec2>,
}

/// What a tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No collision; score is the new running score
    Survived { score: u64 },
    /// Player was hit; score is the final session score
    GameOver { score: u64 },
}

/// Move the player to the latest pointer position (clamped to the field)
///
/// Idempotent; [`tick`] applies it again.
pub fn apply_input(state: &mut SessionState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    if let Some(pos) = input.pointer {
        state.player.set_position(pos, &state.field);
    }
}

/// Advance the session by one tick at timestamp `now` (ms)
pub fn tick(state: &mut SessionState, input: &TickInput, now: f64) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::GameOver { score: state.score };
    }

    apply_input(state, input);

    move_enemies(&mut state.enemies, &state.field);

    // First tick of a session anchors the spawn clock
    let last_spawn = *state.last_spawn_time.get_or_insert(now);
    if spawn_due(now, last_spawn, state.spawn_interval) {
        let enemy = spawn_enemy(&mut state.rng, state.difficulty, &state.field, &state.tuning);
        state.enemies.push(enemy);
        state.last_spawn_time = Some(now);
    }

    if player_hit(&state.player, &state.enemies) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Session {} over: score {}, difficulty {:.3}",
            state.sessions_played + 1,
            state.score,
            state.difficulty
        );
        return TickOutcome::GameOver { score: state.score };
    }

    state.score += 1;
    state.spawn_interval = difficulty::advance(&mut state.difficulty, &state.tuning);

    TickOutcome::Survived { score: state.score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, Field};
    use crate::tuning::Tuning;

    /// 60 Hz frame length in ms
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn new_state(seed: u64) -> SessionState {
        SessionState::new(seed, Field::new(800.0, 600.0), Tuning::default())
    }

    #[test]
    fn test_survived_tick_scores_and_advances_difficulty() {
        let mut state = new_state(1);
        let outcome = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(outcome, TickOutcome::Survived { score: 1 });
        assert_eq!(state.score, 1);
        assert!((state.difficulty - 1.001).abs() < 1e-6);
        assert!((state.spawn_interval - 899.9).abs() < 1e-3);
    }

    #[test]
    fn test_no_spawn_within_first_interval() {
        let mut state = new_state(2);
        let start = 5000.0;
        // 50 frames at 60 Hz is ~833 ms, inside the ~900 ms interval
        for i in 0..50 {
            tick(&mut state, &TickInput::default(), start + i as f64 * FRAME_MS);
        }
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut state = new_state(3);
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), 1000.0);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.last_spawn_time, Some(1000.0));
    }

    #[test]
    fn test_pointer_moves_player_before_collision() {
        let mut state = new_state(4);
        state.enemies.push(Enemy {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            size: 20.0,
        });

        // Player is at the center; enemy is far away
        let outcome = tick(&mut state, &TickInput::default(), 0.0);
        assert!(matches!(outcome, TickOutcome::Survived { .. }));

        // Pointer onto the enemy
        let input = TickInput {
            pointer: Some(Vec2::new(105.0, 100.0)),
        };
        let outcome = tick(&mut state, &input, FRAME_MS);
        assert_eq!(outcome, TickOutcome::GameOver { score: 1 });
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_apply_input_clamps_and_repeats() {
        let mut state = new_state(7);
        let input = TickInput {
            pointer: Some(Vec2::new(900.0, -50.0)),
        };
        apply_input(&mut state, &input);
        assert_eq!(state.player.pos, Vec2::new(800.0, 0.0));
        apply_input(&mut state, &input);
        assert_eq!(state.player.pos, Vec2::new(800.0, 0.0));

        // No pointer leaves the player where it is
        apply_input(&mut state, &TickInput::default());
        assert_eq!(state.player.pos, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_game_over_state_is_frozen() {
        let mut state = new_state(5);
        state.phase = GamePhase::GameOver;
        state.score = 9;
        let outcome = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(outcome, TickOutcome::GameOver { score: 9 });
        assert_eq!(state.score, 9);
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed| {
            let mut state = new_state(seed);
            for i in 0..600 {
                let pointer = Vec2::new(400.0 + (i as f32 * 0.05).sin() * 200.0, 300.0);
                let input = TickInput {
                    pointer: Some(pointer),
                };
                if let TickOutcome::GameOver { score } = tick(&mut state, &input, i as f64 * FRAME_MS) {
                    return (score, state.enemies.clone());
                }
            }
            (state.score, state.enemies.clone())
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_enemies_stay_within_margin() {
        let mut state = new_state(6);
        // Park the player in a corner so the session lasts
        let input = TickInput {
            pointer: Some(Vec2::new(0.0, 0.0)),
        };
        for i in 0..3000 {
            tick(&mut state, &input, i as f64 * FRAME_MS);
            if state.phase == GamePhase::GameOver {
                state.reset();
            }
            for enemy in &state.enemies {
                assert!(state.field.contains_with_margin(enemy.pos, enemy.size));
            }
        }
    }
}
