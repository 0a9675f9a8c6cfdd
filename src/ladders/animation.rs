//! Simulated die-roll animation.
//!
//! While a roll is in progress the display cycles through random faces, one
//! per frame interval, for the configured window. The faces are drawn up
//! front when the roll begins, and the committed result is the last face
//! shown, so what the player sees last is what they get.
//!
//! The animation cannot be cancelled: once `begin_roll` hands one out, the
//! caller waits `duration()` (one timer) and then commits.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{AnimationConfig, DieFace, GameRng};

/// Faces for one animated roll.
///
/// Always holds at least one face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollAnimation {
    faces: SmallVec<[DieFace; 16]>,
    frame_interval: Duration,
}

impl RollAnimation {
    /// Draw one face per frame.
    pub(crate) fn draw(config: &AnimationConfig, rng: &mut GameRng) -> Self {
        let count = config.frame_count().max(1);
        Self {
            faces: (0..count).map(|_| rng.roll_die()).collect(),
            frame_interval: config.frame_interval(),
        }
    }

    /// Faces in display order.
    #[must_use]
    pub fn faces(&self) -> &[DieFace] {
        &self.faces
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Total time the animation runs.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.frame_interval * self.faces.len() as u32
    }

    /// Face on display after `elapsed` time.
    #[must_use]
    pub fn face_at(&self, elapsed: Duration) -> DieFace {
        let interval = self.frame_interval.as_nanos().max(1);
        let frame = (elapsed.as_nanos() / interval) as usize;
        self.faces[frame.min(self.faces.len() - 1)]
    }

    /// Whether the window has elapsed and the roll may be committed.
    #[must_use]
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }

    /// The face the roll resolves to: the last one displayed.
    #[must_use]
    pub fn committed_face(&self) -> DieFace {
        self.faces[self.faces.len() - 1]
    }

    /// Frame start offsets paired with their faces.
    pub fn frames(&self) -> impl Iterator<Item = (Duration, DieFace)> + '_ {
        self.faces
            .iter()
            .enumerate()
            .map(move |(i, &face)| (self.frame_interval * i as u32, face))
    }
}
