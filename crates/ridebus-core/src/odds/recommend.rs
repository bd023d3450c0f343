use crate::model::bet::{HighLow, WindowBet};
use crate::model::rank::Rank;
use crate::model::sighting::Sighting;
use crate::model::suit::Suit;
use crate::odds::chance::Chance;
use core::cmp::Ordering;
use rand::Rng;
use rand::seq::SliceRandom;

const DECK_SIZE: u32 = 52;
const SUIT_SIZE: u32 = 13;

/// Ranks at or above `rank`, counted across all four suits.
const fn ranks_at_or_above(rank: Rank) -> u32 {
    (14 - rank.value() as u32 + 1) * 4
}

/// Best round-2 bet after seeing the first card. Counts run over the 51
/// unseen cards; the seen card sits in the at-or-above bucket and is
/// excluded from it. A tie would fall to `rng`, but the two counts sum to
/// 51 and can never be equal for a single deck.
pub fn recommend_high_low<R: Rng + ?Sized>(first: Rank, rng: &mut R) -> HighLow {
    let pool = DECK_SIZE - 1;
    let higher = Chance::new(ranks_at_or_above(first) - 1, pool);
    let lower = Chance::new(pool - higher.favorable(), pool);

    match higher.compare(lower) {
        Ordering::Greater => HighLow::Higher,
        Ordering::Less => HighLow::Lower,
        Ordering::Equal => {
            if rng.gen_bool(0.5) {
                HighLow::Higher
            } else {
                HighLow::Lower
            }
        }
    }
}

/// Best round-3 bet after seeing two cards. The window is the closed rank
/// interval spanned by the pair; both boundary cards fall inside it and are
/// excluded from the inside count. Both counts are even over a pool of 50,
/// so the tie branch is unreachable in practice.
pub fn recommend_window<R: Rng + ?Sized>(a: Rank, b: Rank, rng: &mut R) -> WindowBet {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let pool = DECK_SIZE - 2;
    let span = u32::from(high.value() - low.value()) + 1;
    let inside = Chance::new(span * 4 - 2, pool);
    let outside = Chance::new(pool - inside.favorable(), pool);

    match inside.compare(outside) {
        Ordering::Greater => WindowBet::Inside,
        Ordering::Less => WindowBet::Outside,
        Ordering::Equal => {
            if rng.gen_bool(0.5) {
                WindowBet::Inside
            } else {
                WindowBet::Outside
            }
        }
    }
}

/// Best round-4 suit after three reveals: the suit with the most cards left
/// among the 49 unseen. Sightings with an unrecognized suit decrement no
/// bucket. Ties are frequent here (fresh suits stay level at 13) and are
/// broken uniformly among the front-runners.
pub fn recommend_suit<R: Rng + ?Sized>(seen: &[Sighting], rng: &mut R) -> Suit {
    let mut remaining = [SUIT_SIZE; 4];
    for sighting in seen {
        if let Some(suit) = sighting.suit() {
            remaining[suit.index()] -= 1;
        }
    }

    let best = remaining.iter().copied().max().unwrap_or(SUIT_SIZE);
    let candidates: Vec<Suit> = Suit::ALL
        .iter()
        .copied()
        .filter(|suit| remaining[suit.index()] == best)
        .collect();

    *candidates.choose(rng).expect("at least one suit remains")
}

/// Round-4 probability for a given suit, for telemetry.
pub fn suit_chance(seen: &[Sighting], suit: Suit) -> Chance {
    let seen_of_suit = seen
        .iter()
        .filter(|sighting| sighting.suit() == Some(suit))
        .count() as u32;
    Chance::new(SUIT_SIZE - seen_of_suit, DECK_SIZE - 3)
}

#[cfg(test)]
mod tests {
    use super::{recommend_high_low, recommend_suit, recommend_window, suit_chance};
    use crate::model::bet::{HighLow, WindowBet};
    use crate::model::rank::Rank;
    use crate::model::sighting::Sighting;
    use crate::model::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn high_low_splits_at_eight_nine() {
        let mut rng = StdRng::seed_from_u64(0);
        for rank in Rank::ORDERED {
            let expected = if rank.value() <= 8 {
                HighLow::Higher
            } else {
                HighLow::Lower
            };
            assert_eq!(recommend_high_low(rank, &mut rng), expected, "{rank}");
        }
    }

    #[test]
    fn high_low_counts_never_tie() {
        // higher + lower == 51 for every rank, so equality is impossible;
        // the random branch can never fire in round 2.
        for rank in Rank::ORDERED {
            let higher = (15 - u32::from(rank.value())) * 4 - 1;
            let lower = 51 - higher;
            assert_ne!(higher, lower, "{rank}");
        }
    }

    #[test]
    fn window_counts_always_cover_the_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        for low in Rank::ORDERED {
            for high in Rank::ORDERED {
                if low >= high {
                    continue;
                }
                let span = u32::from(high.value() - low.value()) + 1;
                let inside = span * 4 - 2;
                let outside = 50 - inside;
                assert_eq!(inside + outside, 50);
                // Both counts are even, so a 25/25 tie cannot happen.
                assert_ne!(inside, outside);

                let expected = if inside > outside {
                    WindowBet::Inside
                } else {
                    WindowBet::Outside
                };
                assert_eq!(recommend_window(low, high, &mut rng), expected);
            }
        }
    }

    #[test]
    fn window_is_symmetric_in_its_arguments() {
        let mut rng = StdRng::seed_from_u64(7);
        let forward = recommend_window(Rank::Three, Rank::King, &mut rng);
        let backward = recommend_window(Rank::King, Rank::Three, &mut rng);
        assert_eq!(forward, backward);
        assert_eq!(forward, WindowBet::Inside);
    }

    #[test]
    fn narrow_window_bets_outside() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            recommend_window(Rank::Seven, Rank::Eight, &mut rng),
            WindowBet::Outside
        );
    }

    #[test]
    fn suit_with_fewest_seen_cards_wins() {
        let mut rng = StdRng::seed_from_u64(0);
        let seen = [
            Sighting::of(Rank::Two, Suit::Hearts),
            Sighting::of(Rank::Five, Suit::Hearts),
            Sighting::of(Rank::Nine, Suit::Clubs),
        ];
        // Diamonds and Spades are level at 13; the pick must be one of them.
        let mut picks = HashSet::new();
        for _ in 0..64 {
            picks.insert(recommend_suit(&seen, &mut rng));
        }
        assert!(picks.contains(&Suit::Diamonds));
        assert!(picks.contains(&Suit::Spades));
        assert!(!picks.contains(&Suit::Hearts));
        assert!(!picks.contains(&Suit::Clubs));
    }

    #[test]
    fn suit_tie_break_reaches_every_fresh_suit() {
        // Three rank-only sightings leave all four suits level at 13.
        let seen = [Sighting::RankOnly(Rank::Two); 3];
        let mut picks = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            picks.insert(recommend_suit(&seen, &mut rng));
        }
        assert_eq!(picks.len(), 4);
    }

    #[test]
    fn unknown_suits_decrement_no_bucket() {
        let seen = [Sighting::RankOnly(Rank::Ace), Sighting::Missed];
        for suit in Suit::ALL {
            assert_eq!(suit_chance(&seen, suit).favorable(), 13);
        }
    }

    #[test]
    fn recommendations_are_deterministic_off_the_tie_branch() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        assert_eq!(
            recommend_high_low(Rank::Four, &mut rng_a),
            recommend_high_low(Rank::Four, &mut rng_b)
        );
        assert_eq!(
            recommend_window(Rank::Two, Rank::Ace, &mut rng_a),
            recommend_window(Rank::Two, Rank::Ace, &mut rng_b)
        );
    }

    #[test]
    fn duplicate_sightings_are_not_special_cased() {
        // A well-formed recognizer never reports the same card twice in one
        // attempt; if one does, the counters simply keep subtracting.
        let seen = [
            Sighting::of(Rank::Five, Suit::Hearts),
            Sighting::of(Rank::Five, Suit::Hearts),
            Sighting::of(Rank::Five, Suit::Hearts),
        ];
        assert_eq!(suit_chance(&seen, Suit::Hearts).favorable(), 10);
        let mut rng = StdRng::seed_from_u64(0);
        let pick = recommend_suit(&seen, &mut rng);
        assert_ne!(pick, Suit::Hearts);
    }
}
