//! Snake & Ladders roll resolution.
//!
//! ## Resolution
//!
//! 1. Draw a die face (1..=6)
//! 2. Move forward, capped at the final cell (no bounce-back, no exact roll)
//! 3. Apply at most one jump on the landing cell, snakes checked first
//! 4. Won if the final cell was reached
//! 5. Narrate, count the roll, record it
//!
//! ## Guards
//!
//! Rolling a won game or a game whose animation is still running returns
//! the state unchanged. The display layer is expected to disable the
//! trigger in those states, so the guard is not reported as an error.

use crate::board::Board;
use crate::core::{AnimationConfig, ConfigError, DieFace, GameRng, GameZoneConfig};
use crate::rules::SessionId;

use super::animation::RollAnimation;
use super::state::{GameState, RollRecord, MSG_ROLLING};

/// Snake & Ladders engine: board, die and animation timing.
///
/// One engine serves any number of sequential sessions; each `reset`
/// starts a new session with a fresh id.
///
/// ## Example
///
/// ```
/// use game_zone::core::{DieFace, GameRng};
/// use game_zone::board::Board;
/// use game_zone::ladders::LaddersEngine;
///
/// let mut engine = LaddersEngine::new(Board::classic(), GameRng::new(42));
/// let state = engine.reset();
///
/// // 1 + 3 lands on the ladder at 4
/// let next = engine.apply_roll(&state, DieFace::new(3).unwrap());
/// assert_eq!(next.position, 14);
/// assert_eq!(next.rolls_taken, 1);
/// ```
#[derive(Clone, Debug)]
pub struct LaddersEngine {
    board: Board,
    rng: GameRng,
    animation: AnimationConfig,
    next_session: SessionId,
}

impl LaddersEngine {
    /// Create an engine with the default animation timing.
    #[must_use]
    pub fn new(board: Board, rng: GameRng) -> Self {
        Self {
            board,
            rng,
            animation: AnimationConfig::default(),
            next_session: SessionId::default(),
        }
    }

    /// Build from a zone configuration, validating the board and animation.
    pub fn from_config(config: &GameZoneConfig, rng: GameRng) -> Result<Self, ConfigError> {
        let board = Board::new(config.board.clone())?;
        Self::new(board, rng).with_animation(config.animation.clone())
    }

    /// Replace the animation timing.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Result<Self, ConfigError> {
        animation.validate()?;
        self.animation = animation;
        Ok(self)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Start a new session on the start cell.
    pub fn reset(&mut self) -> GameState {
        let session = self.next_session;
        self.next_session = session.next();
        log::debug!("snake-ladders {}: new game", session);
        GameState::new(session)
    }

    /// Roll without animation: draw one face and resolve it.
    pub fn roll(&mut self, state: &GameState) -> GameState {
        if !state.accepts_roll() {
            return state.clone();
        }
        let face = self.rng.roll_die();
        self.resolve(state, face)
    }

    /// Resolve a roll with a known face.
    ///
    /// Subject to the same guards as `roll`.
    #[must_use]
    pub fn apply_roll(&self, state: &GameState, face: DieFace) -> GameState {
        if !state.accepts_roll() {
            return state.clone();
        }
        self.resolve(state, face)
    }

    /// Enter the rolling phase and draw the animation frames.
    ///
    /// Returns `None` if the game is won or already rolling.
    pub fn begin_roll(&mut self, state: &GameState) -> Option<(GameState, RollAnimation)> {
        if !state.accepts_roll() {
            return None;
        }

        let animation = RollAnimation::draw(&self.animation, &mut self.rng);
        let mut rolling = state.clone();
        rolling.is_rolling = true;
        rolling.message = MSG_ROLLING.to_string();
        Some((rolling, animation))
    }

    /// Finish an animated roll with the last face the animation showed.
    ///
    /// No-op unless the state is rolling.
    #[must_use]
    pub fn commit_roll(&self, state: &GameState, animation: &RollAnimation) -> GameState {
        if !state.is_rolling || state.won {
            return state.clone();
        }
        self.resolve(state, animation.committed_face())
    }

    fn resolve(&self, state: &GameState, face: DieFace) -> GameState {
        let from = state.position;
        let landed = self.board.advance(from, face.value());
        let jump = self.board.jump_at(landed);
        let to = jump.map_or(landed, |j| j.destination());
        let won = to == self.board.size();

        let record = RollRecord {
            die: face,
            from,
            landed,
            to,
            jump,
            won,
        };

        log::debug!(
            "snake-ladders {}: rolled {} from {} -> landed {} -> {}{}",
            state.session,
            face,
            from,
            landed,
            to,
            jump.map(|j| format!(" ({})", j.kind())).unwrap_or_default()
        );
        if won {
            log::info!(
                "snake-ladders {}: won after {} rolls",
                state.session,
                state.rolls_taken + 1
            );
        }

        let mut next = state.clone();
        next.position = to;
        next.last_roll = Some(face);
        next.rolls_taken += 1;
        next.is_rolling = false;
        next.won = won;
        next.message = record.narrate();
        next.last_move = Some(record);
        next.history.push_back(record);
        next
    }
}
