//! High score leaderboard
//!
//! Plain descending list of final session scores, capped at
//! [`MAX_LEADERBOARD_LEN`]. Duplicates are kept.

use serde::{Deserialize, Serialize};

pub use crate::consts::MAX_LEADERBOARD_LEN;

/// High score leaderboard (sorted descending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    scores: Vec<u64>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from stored scores in any order
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_LEADERBOARD_LEN);
        Self { scores }
    }

    /// Insert a final score, keeping the list sorted and capped.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn record(&mut self, score: u64) -> Option<usize> {
        // Equal scores keep their earlier entries ahead
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_LEADERBOARD_LEN);
        (pos < MAX_LEADERBOARD_LEN).then_some(pos + 1)
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// (rank, score) rows for display, rank starting at 1
    pub fn rows(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.scores.iter().enumerate().map(|(i, &s)| (i + 1, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_duplicate() {
        let mut board = Leaderboard::from_scores(vec![100, 80, 50]);
        assert_eq!(board.record(50), Some(4));
        assert_eq!(board.scores(), &[100, 80, 50, 50]);
    }

    #[test]
    fn test_record_new_top() {
        let mut board = Leaderboard::from_scores(vec![100, 80, 50]);
        assert_eq!(board.record(150), Some(1));
        assert_eq!(board.scores(), &[150, 100, 80, 50]);
        assert_eq!(board.rows().next(), Some((1, 150)));
    }

    #[test]
    fn test_capacity() {
        let mut board = Leaderboard::new();
        for score in 1..=MAX_LEADERBOARD_LEN as u64 {
            board.record(score);
        }
        assert_eq!(board.len(), MAX_LEADERBOARD_LEN);

        // Too low to stay
        assert_eq!(board.record(0), None);
        assert_eq!(board.len(), MAX_LEADERBOARD_LEN);
        assert_eq!(*board.scores().last().unwrap(), 1);

        // Pushes the lowest out
        assert_eq!(board.record(1000), Some(1));
        assert_eq!(board.len(), MAX_LEADERBOARD_LEN);
        assert_eq!(*board.scores().last().unwrap(), 2);
    }

    #[test]
    fn test_zero_score_is_recorded() {
        let mut board = Leaderboard::new();
        assert_eq!(board.record(0), Some(1));
        assert_eq!(board.scores(), &[0]);
    }

    #[test]
    fn test_rows_are_ranked() {
        let board = Leaderboard::from_scores(vec![5, 10]);
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows, vec![(1, 10), (2, 5)]);
    }
}
