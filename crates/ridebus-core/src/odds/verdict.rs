use crate::model::bet::{ColorBet, HighLow, WindowBet};
use crate::model::sighting::Sighting;
use crate::model::suit::Suit;

/// Round 1. A sighting without a suit cannot win either color.
pub fn color_wins(first: Sighting, bet: ColorBet) -> bool {
    match first.suit() {
        Some(suit) => match bet {
            ColorBet::Red => suit.is_red(),
            ColorBet::Black => suit.is_black(),
        },
        None => false,
    }
}

/// Round 2. Higher wins the rank tie, Lower is strict; that asymmetry is
/// the table's rule, not an accident.
pub fn high_low_wins(first: Sighting, second: Sighting, bet: HighLow) -> bool {
    let (Some(r1), Some(r2)) = (first.rank(), second.rank()) else {
        return false;
    };
    match bet {
        HighLow::Higher => r2 >= r1,
        HighLow::Lower => r2 < r1,
    }
}

/// Round 3. Inside is boundary-inclusive over the closed interval spanned
/// by the first two ranks; Outside is strictly beyond it.
pub fn window_wins(first: Sighting, second: Sighting, third: Sighting, bet: WindowBet) -> bool {
    let (Some(r1), Some(r2), Some(r3)) = (first.rank(), second.rank(), third.rank()) else {
        return false;
    };
    let (low, high) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    match bet {
        WindowBet::Inside => low <= r3 && r3 <= high,
        WindowBet::Outside => r3 < low || r3 > high,
    }
}

/// Round 4. Exact suit match; an unread suit loses.
pub fn suit_wins(fourth: Sighting, bet: Suit) -> bool {
    fourth.suit() == Some(bet)
}
