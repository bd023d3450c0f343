use crate::model::suit::Suit;
use core::fmt;

/// Round 1: the table only offers red or black. The bot's policy is fixed
/// on red, but the vocabulary stays closed over both buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBet {
    Red,
    Black,
}

/// Round 2: will the next card rank at or above the first card (Higher),
/// or strictly below it (Lower)? The asymmetry is the table's rule: a rank
/// tie pays the Higher bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighLow {
    Higher,
    Lower,
}

/// Round 3: will the next card rank inside the closed interval spanned by
/// the first two cards, or strictly outside it?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowBet {
    Inside,
    Outside,
}

/// One bet per round; round 4 bets a suit outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bet {
    Color(ColorBet),
    HighLow(HighLow),
    Window(WindowBet),
    Suit(Suit),
}

impl fmt::Display for ColorBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorBet::Red => "red",
            ColorBet::Black => "black",
        })
    }
}

impl fmt::Display for HighLow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HighLow::Higher => "higher",
            HighLow::Lower => "lower",
        })
    }
}

impl fmt::Display for WindowBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowBet::Inside => "inside",
            WindowBet::Outside => "outside",
        })
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bet::Color(bet) => write!(f, "{bet}"),
            Bet::HighLow(bet) => write!(f, "{bet}"),
            Bet::Window(bet) => write!(f, "{bet}"),
            Bet::Suit(suit) => f.write_str(suit.name()),
        }
    }
}
