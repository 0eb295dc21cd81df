//! Property tests: random deals and random tile choices.

use proptest::prelude::*;

use dominican_domino::core::{full_deck, DECK_SIZE};
use dominican_domino::{DominoGame, PlayOutcome, Seat, ShuffleDealer, TeamId};

/// Offer a tile picked by `choice` from the whole current hand, legal or
/// not. Refusals must leave the game exactly as it was.
fn offer_any_tile(game: &mut DominoGame<ShuffleDealer>, choice: usize) -> Option<PlayOutcome> {
    let hand = game.current_hand().to_vec();
    let tile = hand[choice % hand.len()];
    let before = game.public_state();
    let events_before = game.events().len();

    let outcome = game.play_tile(tile, None).unwrap();
    if outcome.is_refusal() {
        assert_eq!(game.public_state(), before);
        assert_eq!(game.events().len(), events_before);
        assert_eq!(game.current_hand(), hand.as_slice());
        if outcome == PlayOutcome::AmbiguousPlay {
            let ends = game.ends().unwrap();
            return Some(game.play_tile(tile, Some(ends.right)).unwrap());
        }
        return None;
    }
    Some(outcome)
}

fn tiles_in_play(game: &DominoGame<ShuffleDealer>) -> usize {
    game.table().len() + Seat::all().map(|s| game.hand(s).len()).sum::<usize>()
}

proptest! {
    #[test]
    fn prop_random_play_keeps_invariants(seed in any::<u64>(), choices in prop::collection::vec(0usize..7, 1..400)) {
        let mut game = DominoGame::seeded(seed);
        for choice in choices {
            if game.is_game_over() {
                break;
            }
            if game.table().is_empty() {
                game.start().unwrap();
                continue;
            }
            if game.is_blocked() {
                game.new_round().unwrap();
                continue;
            }
            if game.allowed_tiles_of_current_player().is_empty() {
                game.force_pass().unwrap();
                continue;
            }
            offer_any_tile(&mut game, choice);

            prop_assert_eq!(tiles_in_play(&game), DECK_SIZE);
            for team in TeamId::ALL {
                if game.team_score(team) >= game.config().score_cap {
                    prop_assert!(game.is_game_over());
                }
            }
        }
    }

    #[test]
    fn prop_table_ends_match_line(seed in any::<u64>(), choices in prop::collection::vec(0usize..7, 1..60)) {
        let mut game = DominoGame::seeded(seed);
        game.start().unwrap();
        let round = game.round();
        for choice in choices {
            if game.round() != round || game.is_blocked() {
                break;
            }
            if game.allowed_tiles_of_current_player().is_empty() {
                game.force_pass().unwrap();
                continue;
            }
            offer_any_tile(&mut game, choice);
            if game.round() != round {
                break;
            }

            // Adjacent tiles share a number and the outer tiles carry the ends
            let line = game.table();
            let ends = game.ends().unwrap();
            prop_assert!(line[0].has(ends.left));
            prop_assert!(line[line.len() - 1].has(ends.right));
            for pair in line.windows(2) {
                let (high, low) = pair[0].pips();
                prop_assert!(pair[1].has(high) || pair[1].has(low));
            }
        }
    }

    #[test]
    fn prop_shuffled_deal_is_a_permutation(seed in any::<u64>()) {
        let game = DominoGame::seeded(seed);
        let mut tiles: Vec<_> = Seat::all().flat_map(|s| game.hand(s).to_vec()).collect();
        tiles.sort_unstable();
        let mut deck = full_deck();
        deck.sort_unstable();
        prop_assert_eq!(tiles, deck);
    }
}
