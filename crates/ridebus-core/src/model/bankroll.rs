use serde::{Deserialize, Serialize};

/// Fixed money rules for a table: what a lost attempt costs and what riding
/// the bus all the way pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakes {
    pub stake: i64,
    pub payout: i64,
    pub opening_balance: i64,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            stake: 500,
            payout: 10_000,
            opening_balance: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: i64,
    attempts: u64,
    wins: u64,
    losses: u64,
}

impl Bankroll {
    pub const fn new(opening_balance: i64) -> Self {
        Self {
            balance: opening_balance,
            attempts: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Terminal loss at any round: stake is forfeited.
    pub fn book_loss(&mut self, stake: i64) {
        self.balance -= stake;
        self.losses += 1;
        self.attempts += 1;
    }

    /// Terminal win, only possible by completing round 4.
    pub fn book_win(&mut self, payout: i64) {
        self.balance += payout;
        self.wins += 1;
        self.attempts += 1;
    }

    pub const fn balance(&self) -> i64 {
        self.balance
    }

    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    pub const fn wins(&self) -> u64 {
        self.wins
    }

    pub const fn losses(&self) -> u64 {
        self.losses
    }
}
