//! Property tests for game-wide invariants.
//!
//! - Cards are conserved between supply piles and player decks
//! - Supply counts never increase
//! - A deck's card count never changes under draw, discard and reshuffle
//! - Results agree with scores

use proptest::prelude::*;

use deckbuilder::cards::{Card, CardCatalog};
use deckbuilder::core::{GameConfig, GameRng, PlayerId};
use deckbuilder::deck::PersonalDeck;
use deckbuilder::rules::{GameBuilder, GameEngine, GameResult};
use deckbuilder::supply::Supply;

fn supply_total(supply: &Supply) -> u64 {
    supply.piles().map(|p| u64::from(p.remaining())).sum()
}

fn owned_total(game: &GameEngine) -> u64 {
    game.players().values().map(|p| p.total_cards() as u64).sum()
}

fn build(players: usize, seed: u64, allowance: u32) -> GameEngine {
    GameBuilder::new()
        .with_config(
            GameConfig::new(players)
                .with_seed(seed)
                .with_acquisitions_per_turn(allowance)
                .with_max_turns(400),
        )
        .build()
        .unwrap()
}

#[derive(Clone, Debug)]
enum DeckOp {
    Draw,
    DrawMany(usize),
    DiscardDrawn,
    Reshuffle,
}

fn deck_op() -> impl Strategy<Value = DeckOp> {
    prop_oneof![
        Just(DeckOp::Draw),
        (0usize..8).prop_map(DeckOp::DrawMany),
        Just(DeckOp::DiscardDrawn),
        Just(DeckOp::Reshuffle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_cards_are_conserved(players in 1usize..=4, seed in any::<u64>(), allowance in 1u32..=3) {
        let mut game = build(players, seed, allowance);
        let total = supply_total(game.supply()) + owned_total(&game);

        for _ in 0..60 {
            if game.supply().is_exhausted() {
                break;
            }
            let seat = game.active_player();
            game.run_turn(seat);
            prop_assert_eq!(supply_total(game.supply()) + owned_total(&game), total);
        }
    }

    #[test]
    fn test_supply_never_grows(players in 1usize..=4, seed in any::<u64>(), allowance in 1u32..=3) {
        let mut game = build(players, seed, allowance);
        let catalog = CardCatalog::standard();

        for _ in 0..60 {
            if game.supply().is_exhausted() {
                break;
            }
            let before: Vec<u32> = catalog.iter().map(|d| game.supply().remaining(&d.name)).collect();
            let summary = game.run_turn(game.active_player()).unwrap();
            let after: Vec<u32> = catalog.iter().map(|d| game.supply().remaining(&d.name)).collect();

            prop_assert!(summary.acquired.len() <= allowance as usize);
            let taken: u32 = before.iter().zip(&after).map(|(b, a)| b - a).sum();
            prop_assert_eq!(taken as usize, summary.acquired.len());
        }
    }

    #[test]
    fn test_turns_rotate_through_seats(players in 1usize..=4, seed in any::<u64>()) {
        let mut game = build(players, seed, 1);
        let mut expected = PlayerId::new(0);

        for turn in 1..=(3 * players as u32) {
            let summary = game.run_turn(game.active_player()).unwrap();
            prop_assert_eq!(summary.player, expected);
            prop_assert_eq!(summary.turn, turn);
            prop_assert_eq!(game.player(summary.player).hand_size(), 5);
            expected = expected.next(players);
        }
    }

    #[test]
    fn test_result_agrees_with_scores(players in 1usize..=4, seed in any::<u64>()) {
        let mut game = build(players, seed, 1);
        let report = game.run_game();

        prop_assert!(report.end_reason.is_some());
        let best = report.scores.values().copied().max().unwrap();
        let leaders: Vec<PlayerId> = report
            .scores
            .iter()
            .filter(|(_, &s)| s == best)
            .map(|(p, _)| p)
            .collect();

        match report.result {
            GameResult::Winner(p) => prop_assert_eq!(leaders, vec![p]),
            GameResult::Tie(ps) => {
                prop_assert!(ps.len() >= 2);
                prop_assert_eq!(leaders, ps);
            }
        }
    }

    #[test]
    fn test_deck_size_is_stable(seed in any::<u64>(), ops in prop::collection::vec(deck_op(), 0..40)) {
        let catalog = CardCatalog::standard();
        let cards: Vec<Card> = ["Bitcoin", "Bitcoin", "Ethereum", "Method", "Framework", "Dogecoin"]
            .iter()
            .filter_map(|name| catalog.instantiate(name))
            .collect();
        let size = cards.len();

        let mut deck = PersonalDeck::new(cards, GameRng::new(seed));
        deck.shuffle();
        let mut held: Vec<Card> = Vec::new();

        for op in ops {
            match op {
                DeckOp::Draw => held.extend(deck.draw_one()),
                DeckOp::DrawMany(n) => {
                    let available = deck.draw_len() + deck.discard_len();
                    let drawn = deck.draw_many(n);
                    prop_assert_eq!(drawn.len(), n.min(available));
                    held.extend(drawn);
                }
                DeckOp::DiscardDrawn => {
                    for card in held.drain(..) {
                        deck.discard(card);
                    }
                }
                DeckOp::Reshuffle => deck.reshuffle_discard_into_draw(),
            }
            prop_assert_eq!(deck.total_cards() + held.len(), size);
        }
    }
}
