//! Game setup: catalog, supply, starter decks and opening hands.

use thiserror::Error;
use tracing::info;

use super::engine::GameEngine;
use crate::cards::{CardCatalog, CatalogError};
use crate::core::{GameConfig, GameRng, PlayerMap};
use crate::deck::PersonalDeck;
use crate::policy::{AcquisitionPolicy, GreedyPolicy};
use crate::supply::Supply;
use crate::turn::PlayerState;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 255;

/// Why a game could not be set up.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("{0} players requested, at most 255 are supported")]
    TooManyPlayers(usize),

    #[error("starter deck names `{0}`, which is not in the catalog")]
    UnknownStarterCard(String),

    #[error("{expected} players but {got} names given")]
    PlayerNames { expected: usize, got: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Builds a ready-to-run [`GameEngine`].
///
/// Defaults to the standard catalog, a full supply, the default
/// [`GameConfig`] and players named "Player 1", "Player 2", and so on.
///
/// ```
/// use deckbuilder::core::GameConfig;
/// use deckbuilder::rules::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .with_config(GameConfig::new(3).with_seed(42))
///     .build()
///     .unwrap();
///
/// let report = game.run_game();
/// assert!(report.end_reason.is_some());
/// assert_eq!(report.scores.player_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: GameConfig,
    catalog: CardCatalog,
    supply: Option<Supply>,
    player_names: Option<Vec<String>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: CardCatalog::standard(),
            supply: None,
            player_names: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the standard catalog with one parsed from JSON.
    pub fn with_catalog_json(self, json: &str) -> Result<Self, SetupError> {
        Ok(self.with_catalog(CardCatalog::from_json(json)?))
    }

    /// Start from a custom supply instead of one built from the catalog.
    #[must_use]
    pub fn with_supply(mut self, supply: Supply) -> Self {
        self.supply = Some(supply);
        self
    }

    /// Display names in seat order; must match the player count.
    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build with the greedy policy derived from the catalog.
    pub fn build(self) -> Result<GameEngine<GreedyPolicy>, SetupError> {
        let policy = GreedyPolicy::from_catalog(&self.catalog);
        self.build_with_policy(policy)
    }

    /// Deal the game: one shuffled starter deck and opening hand per player.
    pub fn build_with_policy<P: AcquisitionPolicy>(
        self,
        policy: P,
    ) -> Result<GameEngine<P>, SetupError> {
        let Self {
            config,
            catalog,
            supply,
            player_names,
        } = self;

        let player_count = config.player_count;
        if player_count == 0 {
            return Err(SetupError::NoPlayers);
        }
        if player_count > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(player_count));
        }
        if catalog.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        if let Some(unknown) = config
            .starter_deck
            .iter()
            .find(|entry| !catalog.contains(&entry.name))
        {
            return Err(SetupError::UnknownStarterCard(unknown.name.clone()));
        }
        if let Some(names) = &player_names {
            if names.len() != player_count {
                return Err(SetupError::PlayerNames {
                    expected: player_count,
                    got: names.len(),
                });
            }
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let supply = supply.unwrap_or_else(|| Supply::from_catalog(&catalog));

        let players = PlayerMap::new(player_count, |seat| {
            let name = match &player_names {
                Some(names) => names[seat.index()].clone(),
                None => seat.to_string(),
            };
            let mut deck = PersonalDeck::new(catalog.build_cards(&config.starter_deck), rng.fork());
            deck.shuffle();

            let mut player = PlayerState::new(name, deck)
                .with_acquisitions_per_turn(config.acquisitions_per_turn);
            player.draw_cards(config.hand_size);
            player
        });

        info!(
            players = player_count,
            seed = rng.seed(),
            supply_piles = supply.len(),
            "game ready"
        );

        Ok(GameEngine::from_parts(config, catalog, supply, players, policy))
    }
}
