//! Round and match bookkeeping.

use crate::state::Side;

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    Won(Side),
    /// Both sides reached zero HP on the same tick; nobody scores.
    Draw,
}

/// Best-of-N scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundMatch {
    pub rounds_won: [u8; 2],
    pub wins_needed: u8,
    pub round_over: bool,
    pub match_over: bool,
    pub winner: Option<Side>,
    /// 1-based number of the round in progress.
    pub round_number: u8,
}

impl RoundMatch {
    pub fn new(wins_needed: u8) -> Self {
        Self {
            rounds_won: [0, 0],
            wins_needed,
            round_over: false,
            match_over: false,
            winner: None,
            round_number: 1,
        }
    }

    /// Ends the round when either side is out of HP.
    ///
    /// The side still standing scores. Returns `None` while the round
    /// continues, and on every call after the round already ended.
    pub fn check_round_end(&mut self, hp_a: u32, hp_b: u32) -> Option<RoundOutcome> {
        if self.round_over || self.match_over {
            return None;
        }
        let outcome = match (hp_a == 0, hp_b == 0) {
            (false, false) => return None,
            (true, true) => RoundOutcome::Draw,
            (true, false) => RoundOutcome::Won(Side::B),
            (false, true) => RoundOutcome::Won(Side::A),
        };
        if let RoundOutcome::Won(side) = outcome {
            let wins = &mut self.rounds_won[side.index()];
            *wins = wins.saturating_add(1);
        }
        self.round_over = true;
        Some(outcome)
    }

    /// Marks the match over once a side has enough round wins.
    pub fn check_match_end(&mut self) -> Option<Side> {
        if self.match_over {
            return self.winner;
        }
        let winner = Side::BOTH
            .into_iter()
            .find(|side| self.rounds_won[side.index()] >= self.wins_needed)?;
        self.match_over = true;
        self.winner = Some(winner);
        Some(winner)
    }

    pub fn is_match_over(&self) -> bool {
        self.match_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn wins(&self, side: Side) -> u8 {
        self.rounds_won[side.index()]
    }

    /// Re-opens scoring for the next round. A finished match stays finished.
    pub(crate) fn begin_next_round(&mut self) {
        if self.match_over || !self.round_over {
            return;
        }
        self.round_over = false;
        self.round_number = self.round_number.saturating_add(1);
    }

    /// Starts a fresh match with the same win threshold.
    pub fn restart(&mut self) {
        *self = Self::new(self.wins_needed);
    }
}
