//! Game results and the data handed to a reporting layer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::supply::EndReason;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has the strictly highest score.
    Winner(PlayerId),
    /// Two or more players share the highest score; nobody wins.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the result from final scores.
    ///
    /// ```
    /// use deckbuilder::core::{PlayerId, PlayerMap};
    /// use deckbuilder::rules::GameResult;
    ///
    /// let scores = PlayerMap::new(3, |p| [12, 15, 15][p.index()]);
    /// assert_eq!(
    ///     GameResult::from_scores(&scores),
    ///     GameResult::Tie(vec![PlayerId::new(1), PlayerId::new(2)])
    /// );
    /// ```
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.values().copied().max().unwrap_or(0);
        let mut leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, &score)| score == best)
            .map(|(player, _)| player)
            .collect();

        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Tie(leaders)
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie(_))
    }

    /// The single winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Tie(_) => None,
        }
    }
}

/// What happened during one player-turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// 1-based count of completed player-turns, this one included.
    pub turn: u32,
    pub resources_generated: u32,
    pub acquired: Vec<Card>,
    /// Cards drawn for the next hand.
    pub drawn: usize,
}

/// Final per-player numbers for a reporting layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub scores: PlayerMap<u32>,
    pub card_counts: PlayerMap<usize>,
    pub result: GameResult,
    pub turns: u32,
    /// `None` if the game has not ended yet.
    pub end_reason: Option<EndReason>,
}
