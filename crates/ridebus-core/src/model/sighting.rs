use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// What the recognizer reported for one revealed card. Recognition can fail
/// on the rank, the suit, or both, and each case must stay distinguishable
/// at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sighting {
    Full(Card),
    RankOnly(Rank),
    SuitOnly(Suit),
    Missed,
}

impl Sighting {
    pub const fn of(rank: Rank, suit: Suit) -> Self {
        Sighting::Full(Card::new(rank, suit))
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Sighting::Full(card) => Some(card.rank),
            Sighting::RankOnly(rank) => Some(rank),
            Sighting::SuitOnly(_) | Sighting::Missed => None,
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Sighting::Full(card) => Some(card.suit),
            Sighting::SuitOnly(suit) => Some(suit),
            Sighting::RankOnly(_) | Sighting::Missed => None,
        }
    }

    /// Total recognition failure: neither field was read.
    pub const fn is_missed(self) -> bool {
        matches!(self, Sighting::Missed)
    }
}

impl fmt::Display for Sighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sighting::Full(card) => write!(f, "{card}"),
            Sighting::RankOnly(rank) => write!(f, "{rank}?"),
            Sighting::SuitOnly(suit) => write!(f, "?{suit}"),
            Sighting::Missed => f.write_str("??"),
        }
    }
}

impl From<Card> for Sighting {
    fn from(card: Card) -> Self {
        Sighting::Full(card)
    }
}
