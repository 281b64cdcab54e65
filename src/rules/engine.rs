//! The game orchestrator.
//!
//! `GameEngine` owns the supply and every `PlayerState` and drives them in
//! round-robin order. Each player-turn runs the phases in a fixed order:
//!
//! 1. `start_turn`
//! 2. `generate_resources`
//! 3. acquisitions, asking the policy until it declines or the allowance
//!    runs out
//! 4. `end_turn`
//! 5. `draw_next_hand`
//!
//! The supply is checked for exhaustion between player-turns, never inside
//! one, so the player who empties the deciding pile still finishes their turn.

use tracing::{debug, info, warn};

use super::result::{GameReport, GameResult, TurnSummary};
use crate::cards::CardCatalog;
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::policy::{AcquisitionPolicy, GreedyPolicy};
use crate::supply::{EndReason, Supply};
use crate::turn::{AcquireError, PlayerState};

/// Runs a complete game. Build one with [`GameBuilder`](super::GameBuilder).
pub struct GameEngine<P = GreedyPolicy> {
    config: GameConfig,
    catalog: CardCatalog,
    supply: Supply,
    players: PlayerMap<PlayerState>,
    policy: P,
    active: PlayerId,
    turns_played: u32,
    end_reason: Option<EndReason>,
}

impl<P: AcquisitionPolicy> GameEngine<P> {
    /// Assemble an engine from already dealt players.
    ///
    /// Players must already hold their opening hands.
    pub(crate) fn from_parts(
        config: GameConfig,
        catalog: CardCatalog,
        supply: Supply,
        players: PlayerMap<PlayerState>,
        policy: P,
    ) -> Self {
        Self {
            config,
            catalog,
            supply,
            players,
            policy,
            active: PlayerId::new(0),
            turns_played: 0,
            end_reason: None,
        }
    }

    // === Play ===

    /// Play one complete turn for `player` and pass play to the next seat.
    ///
    /// Increments the turn counter. Does not check whether the game is
    /// over; `run_game` does that between turns. `None`, with nothing
    /// changed, if `player` is not seated at this table.
    pub fn run_turn(&mut self, player: PlayerId) -> Option<TurnSummary> {
        let player_count = self.players.player_count();
        if player.index() >= player_count {
            warn!(%player, player_count, "no such seat");
            return None;
        }

        let hand_size = self.config.hand_size;
        let next = player.next(player_count);
        let state = &mut self.players[player];

        state.start_turn();
        let resources_generated = state.generate_resources();
        debug!(
            player = %state.name(),
            turn = self.turns_played + 1,
            resources = resources_generated,
            hand = state.hand_size(),
            "turn started"
        );

        let mut acquired = Vec::new();
        while let Some(choice) = self.policy.choose(state.resource_units(), &self.supply) {
            let name = choice.name.clone();
            match state.acquire(&mut self.supply, &name) {
                Ok(card) => acquired.push(card),
                Err(AcquireError::NoAllowance) => break,
                Err(err) => {
                    warn!(player = %state.name(), error = %err, "policy chose an unacquirable card");
                    break;
                }
            }
        }

        state.end_turn();
        let drawn = state.draw_next_hand(hand_size);
        self.turns_played += 1;
        self.active = next;

        debug!(
            player = %state.name(),
            turn = self.turns_played,
            acquired = acquired.len(),
            unspent = state.resource_units(),
            "turn ended"
        );

        Some(TurnSummary {
            player,
            turn: self.turns_played,
            resources_generated,
            acquired,
            drawn,
        })
    }

    /// Play turns in seat order until the supply is exhausted (or the
    /// optional turn cap is hit), then report.
    ///
    /// Calling this again on a finished game returns the same report
    /// without playing more turns.
    pub fn run_game(&mut self) -> GameReport {
        while self.end_reason.is_none() {
            if let Some(reason) = self.supply.end_reason() {
                self.end_reason = Some(reason);
                break;
            }
            if self.config.max_turns.is_some_and(|cap| self.turns_played >= cap) {
                self.end_reason = Some(EndReason::TurnLimit);
                break;
            }

            self.run_turn(self.active);
        }

        let report = self.report();
        info!(
            turns = report.turns,
            reason = ?report.end_reason,
            result = ?report.result,
            "game over"
        );
        report
    }

    /// Scores and result as they stand now.
    #[must_use]
    pub fn report(&self) -> GameReport {
        let scores = self.players.map(PlayerState::score);
        let result = GameResult::from_scores(&scores);
        GameReport {
            card_counts: self.players.map(PlayerState::total_cards),
            scores,
            result,
            turns: self.turns_played,
            end_reason: self.end_reason,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_reason.is_some()
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Completed player-turns so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// The seat that acts next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}
