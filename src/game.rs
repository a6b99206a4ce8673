//! Frame orchestration
//!
//! One call to [`Game::frame`] per display refresh: apply the latest pointer,
//! draw the current state, run one simulation tick, then settle score records. A game over is
//! recorded and the session is reset within the same frame.

use glam::Vec2;

use crate::highscores::Leaderboard;
use crate::persistence::{self, KeyValueStore};
use crate::renderer::{DrawTarget, draw_frame};
use crate::settings::{Palette, Settings};
use crate::sim::{Field, SessionState, TickInput, TickOutcome, apply_input, tick};
use crate::tuning::Tuning;

/// Result of one frame, for the HUD and game-over notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Player survived the tick
    Running { score: u64, high_score: u64 },
    /// Player was hit; the score is on the leaderboard and a new session
    /// has already started
    GameOver { score: u64, rank: Option<usize> },
}

/// Game instance holding session state and score records
pub struct Game<S: KeyValueStore> {
    pub state: SessionState,
    /// Pending input for the next tick
    pub input: TickInput,
    pub settings: Settings,
    high_score: u64,
    leaderboard: Leaderboard,
    store: S,
}

impl<S: KeyValueStore> Game<S> {
    /// Start a game, reading records and settings from `store`
    pub fn new(seed: u64, field: Field, tuning: Tuning, store: S) -> Self {
        let high_score = persistence::read_high_score(&store);
        let leaderboard = persistence::read_leaderboard(&store);
        let settings = Settings::load(&store);
        log::info!(
            "Game initialized with seed {} (best {}, {} leaderboard entries)",
            seed,
            high_score,
            leaderboard.len()
        );
        Self {
            state: SessionState::new(seed, field, tuning),
            input: TickInput::default(),
            settings,
            high_score,
            leaderboard,
            store,
        }
    }

    /// Record the latest pointer position; applied at the start of the next frame
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.input.pointer = Some(pos);
    }

    /// Adopt a resized play field
    pub fn resize(&mut self, field: Field) {
        self.state.resize(field);
    }

    /// Switch to the next color palette and persist the choice
    pub fn cycle_palette(&mut self) -> Palette {
        self.settings.palette = self.settings.palette.next();
        self.settings.save(&mut self.store);
        log::info!("Palette: {}", self.settings.palette.as_str());
        self.settings.palette
    }

    /// Run one frame at timestamp `now` (ms)
    pub fn frame(&mut self, now: f64, target: &mut impl DrawTarget) -> FrameOutcome {
        // Draw and collide against the same player position
        apply_input(&mut self.state, &self.input);
        draw_frame(target, &self.state, &self.settings);

        match tick(&mut self.state, &self.input, now) {
            TickOutcome::Survived { score } => {
                if score > self.high_score {
                    self.high_score = score;
                    persistence::write_high_score(&mut self.store, score);
                }
                FrameOutcome::Running {
                    score,
                    high_score: self.high_score,
                }
            }
            TickOutcome::GameOver { score } => {
                let rank = self.leaderboard.record(score);
                persistence::write_leaderboard(&mut self.store, &self.leaderboard);

                self.state.reset();
                // A stale pointer would undo the re-centering
                self.input = TickInput::default();
                log::info!("New session started");

                FrameOutcome::GameOver { score, rank }
            }
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
