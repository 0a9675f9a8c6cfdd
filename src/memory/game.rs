//! Memory Match game.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{ConfigError, GameRng, MemoryConfig};
use crate::rules::{GameKind, GameResult, MiniGame, SessionId};

/// How long a mismatched pair stays face up before the display hides it.
pub const MISMATCH_HIDE_DELAY: Duration = Duration::from_millis(1000);

/// What a flip did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip rejected: out of range, already face up or matched,
    /// a mismatch still showing, or the game is won.
    Ignored,
    /// First card of an attempt turned over.
    Revealed(usize),
    /// Second card matched the first. Both stay face up.
    Matched(usize, usize),
    /// Second card differs. Both stay face up until `hide_mismatch`.
    Mismatched(usize, usize),
}

/// A shuffled deck of paired symbols.
///
/// ## Example
///
/// ```
/// use game_zone::core::{GameRng, MemoryConfig};
/// use game_zone::memory::{FlipOutcome, MemoryMatch};
/// use game_zone::rules::MiniGame;
///
/// let mut game = MemoryMatch::new(MemoryConfig::with_pairs(["A"]), GameRng::new(1)).unwrap();
/// assert_eq!(game.flip(0), FlipOutcome::Revealed(0));
/// assert_eq!(game.flip(1), FlipOutcome::Matched(0, 1));
/// assert!(game.is_won());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryMatch {
    config: MemoryConfig,
    rng: GameRng,
    session: SessionId,
    cards: Vec<String>,
    /// Face-up cards of the current attempt (at most two).
    face_up: SmallVec<[usize; 2]>,
    matched: Vec<bool>,
    matched_count: usize,
    score: u32,
    moves: u32,
    won: bool,
}

impl MemoryMatch {
    /// Validate the deck and deal the first session.
    pub fn new(config: MemoryConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut game = Self {
            config,
            rng,
            session: SessionId::default(),
            cards: Vec::new(),
            face_up: SmallVec::new(),
            matched: Vec::new(),
            matched_count: 0,
            score: 0,
            moves: 0,
            won: false,
        };
        game.deal();
        Ok(game)
    }

    /// Reshuffle and start a new session.
    pub fn reset(&mut self) {
        self.session = self.session.next();
        self.deal();
    }

    fn deal(&mut self) {
        self.cards = self.config.cards.clone();
        self.rng.shuffle(&mut self.cards);
        self.face_up.clear();
        self.matched = vec![false; self.cards.len()];
        self.matched_count = 0;
        self.score = 0;
        self.moves = 0;
        self.won = false;
        log::debug!("memory-match {}: dealt {} cards", self.session, self.cards.len());
    }

    /// Turn a card face up.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.won
            || index >= self.cards.len()
            || self.matched[index]
            || self.face_up.contains(&index)
            || self.face_up.len() == 2
        {
            return FlipOutcome::Ignored;
        }

        self.face_up.push(index);
        if self.face_up.len() == 1 {
            return FlipOutcome::Revealed(index);
        }

        let (a, b) = (self.face_up[0], self.face_up[1]);
        self.moves += 1;

        if self.cards[a] != self.cards[b] {
            log::debug!("memory-match {}: {} and {} differ", self.session, a, b);
            return FlipOutcome::Mismatched(a, b);
        }

        self.matched[a] = true;
        self.matched[b] = true;
        self.matched_count += 2;
        self.score += self.config.points_per_match;
        self.face_up.clear();
        log::debug!("memory-match {}: matched {} and {}", self.session, a, b);

        if self.matched_count == self.cards.len() {
            self.won = true;
            log::info!("memory-match {}: won in {} moves", self.session, self.moves);
        }

        FlipOutcome::Matched(a, b)
    }

    /// Turn a mismatched pair back over. Returns false if none is showing.
    pub fn hide_mismatch(&mut self) -> bool {
        if self.face_up.len() < 2 {
            return false;
        }
        self.face_up.clear();
        true
    }

    /// Whether a mismatched pair is waiting to be hidden.
    #[must_use]
    pub fn mismatch_pending(&self) -> bool {
        self.face_up.len() == 2
    }

    /// Symbol shown on a card, or `None` if it is face down or out of range.
    #[must_use]
    pub fn visible(&self, index: usize) -> Option<&str> {
        if self.is_matched(index) || self.face_up.contains(&index) {
            self.cards.get(index).map(String::as_str)
        } else {
            None
        }
    }

    /// Symbol on a card regardless of whether it is face up.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed pair attempts.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_count / 2
    }
}

impl MiniGame for MemoryMatch {
    fn kind(&self) -> GameKind {
        GameKind::MemoryMatch
    }

    fn session(&self) -> SessionId {
        self.session
    }

    fn result(&self) -> Option<GameResult> {
        self.won.then_some(GameResult {
            turns: self.moves,
            score: self.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> MemoryMatch {
        MemoryMatch::new(MemoryConfig::default(), GameRng::new(42)).unwrap()
    }

    /// Indices of the two cards showing `symbol`.
    fn pair_of(game: &MemoryMatch, symbol: &str) -> (usize, usize) {
        let idx: Vec<_> = (0..game.len()).filter(|&i| game.symbol(i) == Some(symbol)).collect();
        (idx[0], idx[1])
    }

    /// First index whose symbol differs from card `a`.
    fn other_than(game: &MemoryMatch, a: usize) -> usize {
        (0..game.len()).find(|&i| game.symbol(i) != game.symbol(a)).unwrap()
    }

    #[test]
    fn test_deal() {
        let game = game();
        assert_eq!(game.len(), 12);
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert!(!game.is_won());
        assert!((0..12).all(|i| game.visible(i).is_none()));
    }

    #[test]
    fn test_rejects_unpaired_deck() {
        let config = MemoryConfig {
            cards: vec!["A".into(), "A".into(), "B".into()],
            points_per_match: 10,
        };
        assert!(MemoryMatch::new(config, GameRng::new(1)).is_err());
    }

    #[test]
    fn test_match_scores() {
        let mut game = game();
        let (a, b) = pair_of(&game, "🌟");

        assert_eq!(game.flip(a), FlipOutcome::Revealed(a));
        assert_eq!(game.visible(a), Some("🌟"));
        assert_eq!(game.flip(b), FlipOutcome::Matched(a, b));

        assert_eq!(game.score(), 10);
        assert_eq!(game.moves(), 1);
        assert!(game.is_matched(a) && game.is_matched(b));
        assert_eq!(game.matched_pairs(), 1);
        assert!(!game.mismatch_pending());
    }

    #[test]
    fn test_mismatch_blocks_until_hidden() {
        let mut game = game();
        let a = 0;
        let b = other_than(&game, a);

        game.flip(a);
        assert_eq!(game.flip(b), FlipOutcome::Mismatched(a, b));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.score(), 0);
        assert!(game.mismatch_pending());

        let third = (0..game.len()).find(|&i| i != a && i != b).unwrap();
        assert_eq!(game.flip(third), FlipOutcome::Ignored);

        assert!(game.hide_mismatch());
        assert!(game.visible(a).is_none());
        assert!(!game.hide_mismatch());
        assert_eq!(game.flip(third), FlipOutcome::Revealed(third));
    }

    #[test]
    fn test_ignored_flips() {
        let mut game = game();
        let (a, b) = pair_of(&game, "🎯");

        assert_eq!(game.flip(99), FlipOutcome::Ignored);
        game.flip(a);
        assert_eq!(game.flip(a), FlipOutcome::Ignored);
        game.flip(b);
        assert_eq!(game.flip(a), FlipOutcome::Ignored);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_win_and_reset() {
        let mut game = game();
        let session = game.session();

        for symbol in ["🌟", "🎯", "🎨", "🎪", "🎭", "🎵"] {
            let (a, b) = pair_of(&game, symbol);
            game.flip(a);
            game.flip(b);
        }

        assert!(game.is_won());
        assert_eq!(game.result(), Some(GameResult { turns: 6, score: 60 }));
        assert_eq!(game.flip(0), FlipOutcome::Ignored);

        game.reset();
        assert!(!game.is_won());
        assert_ne!(game.session(), session);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.score(), 0);
        assert!(!game.is_matched(0));
    }
}
