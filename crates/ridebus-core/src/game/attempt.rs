use crate::game::round::Round;
use crate::model::bet::Bet;
use crate::model::sighting::Sighting;

/// One pass through rounds 1-4. Invariant: `cards.len()` equals the round
/// number minus one before the current round's card is recorded, and the
/// round number after. The recorded bet belongs to the round in progress
/// and is cleared on advance.
#[derive(Debug, Clone)]
pub struct RoundAttempt {
    round: Round,
    cards: Vec<Sighting>,
    bet: Option<Bet>,
}

impl RoundAttempt {
    pub fn new() -> Self {
        Self {
            round: Round::One,
            cards: Vec::with_capacity(4),
            bet: None,
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn cards(&self) -> &[Sighting] {
        &self.cards
    }

    pub fn bet(&self) -> Option<Bet> {
        self.bet
    }

    /// True once the current round's card has been recorded.
    pub fn card_recorded(&self) -> bool {
        self.cards.len() == usize::from(self.round.number())
    }

    /// The card recorded for the round in progress, if any.
    pub fn current_card(&self) -> Option<Sighting> {
        if self.card_recorded() {
            self.cards.last().copied()
        } else {
            None
        }
    }

    pub(crate) fn record_bet(&mut self, bet: Bet) {
        self.bet = Some(bet);
    }

    pub(crate) fn push_card(&mut self, sighting: Sighting) {
        self.cards.push(sighting);
    }

    pub(crate) fn advance(&mut self) {
        if let Some(next) = self.round.next() {
            self.round = next;
            self.bet = None;
        }
    }
}

impl Default for RoundAttempt {
    fn default() -> Self {
        Self::new()
    }
}
