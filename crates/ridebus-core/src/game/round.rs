use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Round {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Round {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> Option<Round> {
        match self {
            Round::One => Some(Round::Two),
            Round::Two => Some(Round::Three),
            Round::Three => Some(Round::Four),
            Round::Four => None,
        }
    }

    pub const fn is_last(self) -> bool {
        matches!(self, Round::Four)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}", self.number())
    }
}
