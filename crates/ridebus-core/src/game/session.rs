use crate::game::attempt::RoundAttempt;
use crate::game::round::Round;
use crate::model::bankroll::{Bankroll, Stakes};
use crate::model::bet::{Bet, ColorBet};
use crate::model::rank::Rank;
use crate::model::sighting::Sighting;
use crate::odds::{
    color_wins, high_low_wins, recommend_high_low, recommend_suit, recommend_window, suit_wins,
    window_wins,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Terminal or non-terminal result of resolving one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Intermediate win; play continues at the given round with the
    /// accumulated cards intact.
    Advanced(Round),
    /// Round 4 won; payout applied, attempt reset.
    AttemptWon,
    /// Lost at the given round; stake forfeited, attempt reset.
    AttemptLost(Round),
}

/// A prerequisite card's rank never got recognized, so no recommendation
/// can be computed. Not a protocol violation: the caller must fold the
/// attempt via `forfeit_round`, per the assume-loss-on-failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginError {
    RankUnknown(Round),
}

/// The driver broke the begin/record/resolve call protocol. Fatal to the
/// driver; never recovered from inside the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    CardNotRecorded(Round),
    CardAlreadyRecorded(Round),
    BetNotPlaced(Round),
    BetMismatch(Round),
}

/// One seat at a Ride the Bus table: the attempt in progress, the money,
/// and the single shared randomness source used for tie-breaks.
#[derive(Debug, Clone)]
pub struct Session {
    attempt: RoundAttempt,
    bankroll: Bankroll,
    stakes: Stakes,
    rng: StdRng,
    seed: u64,
}

impl Session {
    pub fn new(stakes: Stakes) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(stakes, seed)
    }

    pub fn with_seed(stakes: Stakes, seed: u64) -> Self {
        Self {
            attempt: RoundAttempt::new(),
            bankroll: Bankroll::new(stakes.opening_balance),
            stakes,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> Round {
        self.attempt.round()
    }

    pub fn cards(&self) -> &[Sighting] {
        self.attempt.cards()
    }

    pub fn recorded_bet(&self) -> Option<Bet> {
        self.attempt.bet()
    }

    pub fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    pub fn stakes(&self) -> &Stakes {
        &self.stakes
    }

    /// Compute and record the bet for the round in progress. Must happen
    /// before the round's card is known; once a bet is recorded it is
    /// returned as-is on repeat calls, since recomputing could consume
    /// tie-break randomness and silently change the answer.
    pub fn begin_round(&mut self) -> Result<Bet, BeginError> {
        if let Some(bet) = self.attempt.bet() {
            return Ok(bet);
        }

        let bet = match self.attempt.round() {
            Round::One => Bet::Color(ColorBet::Red),
            Round::Two => {
                let first = self.prior_rank(0)?;
                Bet::HighLow(recommend_high_low(first, &mut self.rng))
            }
            Round::Three => {
                let first = self.prior_rank(0)?;
                let second = self.prior_rank(1)?;
                Bet::Window(recommend_window(first, second, &mut self.rng))
            }
            Round::Four => Bet::Suit(recommend_suit(self.attempt.cards(), &mut self.rng)),
        };

        self.attempt.record_bet(bet);
        Ok(bet)
    }

    /// Record the revealed card. A failed detection arrives as
    /// `Sighting::Missed`; it is stored, never skipped.
    pub fn record_card(&mut self, sighting: Sighting) -> Result<(), ProtocolError> {
        if self.attempt.card_recorded() {
            return Err(ProtocolError::CardAlreadyRecorded(self.attempt.round()));
        }
        self.attempt.push_card(sighting);
        Ok(())
    }

    /// Judge the round with the recorded bet, apply the bankroll rule, and
    /// either advance or reset. A `Missed` card loses unconditionally,
    /// whatever the evaluation would have said.
    pub fn resolve_round(&mut self) -> Result<Resolution, ProtocolError> {
        let round = self.attempt.round();
        let Some(card) = self.attempt.current_card() else {
            return Err(ProtocolError::CardNotRecorded(round));
        };

        let won = !card.is_missed() && self.judge(round, card)?;

        if won && !round.is_last() {
            self.attempt.advance();
            return Ok(Resolution::Advanced(self.attempt.round()));
        }

        self.attempt = RoundAttempt::new();
        if won {
            self.bankroll.book_win(self.stakes.payout);
            Ok(Resolution::AttemptWon)
        } else {
            self.bankroll.book_loss(self.stakes.stake);
            Ok(Resolution::AttemptLost(round))
        }
    }

    /// Book a loss without resolving: used when a prerequisite rank never
    /// got recognized and no bet could be recommended.
    pub fn forfeit_round(&mut self) -> Resolution {
        let round = self.attempt.round();
        self.attempt = RoundAttempt::new();
        self.bankroll.book_loss(self.stakes.stake);
        Resolution::AttemptLost(round)
    }

    /// Reset the attempt without touching the bankroll: the table itself
    /// went away (no options appeared), so no stake was ever at risk.
    pub fn abandon_attempt(&mut self) {
        self.attempt = RoundAttempt::new();
    }

    fn judge(&self, round: Round, card: Sighting) -> Result<bool, ProtocolError> {
        let cards = self.attempt.cards();
        let bet = self.attempt.bet();

        Ok(match round {
            // Round 1 policy is fixed; a driver that skipped begin_round
            // still resolves against the red bet.
            Round::One => match bet {
                None | Some(Bet::Color(_)) => {
                    let color = match bet {
                        Some(Bet::Color(color)) => color,
                        _ => ColorBet::Red,
                    };
                    color_wins(card, color)
                }
                Some(_) => return Err(ProtocolError::BetMismatch(round)),
            },
            Round::Two => match bet {
                Some(Bet::HighLow(choice)) => high_low_wins(cards[0], card, choice),
                None => return Err(ProtocolError::BetNotPlaced(round)),
                Some(_) => return Err(ProtocolError::BetMismatch(round)),
            },
            Round::Three => match bet {
                Some(Bet::Window(choice)) => window_wins(cards[0], cards[1], card, choice),
                None => return Err(ProtocolError::BetNotPlaced(round)),
                Some(_) => return Err(ProtocolError::BetMismatch(round)),
            },
            Round::Four => match bet {
                Some(Bet::Suit(choice)) => suit_wins(card, choice),
                None => return Err(ProtocolError::BetNotPlaced(round)),
                Some(_) => return Err(ProtocolError::BetMismatch(round)),
            },
        })
    }

    fn prior_rank(&self, index: usize) -> Result<Rank, BeginError> {
        self.attempt
            .cards()
            .get(index)
            .and_then(|sighting| sighting.rank())
            .ok_or(BeginError::RankUnknown(self.attempt.round()))
    }
}
