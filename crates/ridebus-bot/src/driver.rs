use ridebus_core::game::{BeginError, ProtocolError, Resolution, Round, Session};
use ridebus_core::model::bet::Bet;
use ridebus_core::model::sighting::Sighting;
use tracing::{Level, event};

/// Sensing side of the table. One call per revealed card; never blocks the
/// core. Total recognition failure is reported as `Sighting::Missed`, not
/// as an error.
pub trait CardRecognizer {
    fn observe(&mut self) -> Sighting;
}

/// Actuation side of the table: press whichever button matches the bet.
/// Pure side effect; the core never reads anything back.
pub trait BetActuator {
    fn place(&mut self, bet: Bet);
}

/// Runs the begin / actuate / observe / record / resolve loop for one seat.
/// Protocol errors from the session mean this driver is broken and are
/// propagated, never retried.
pub struct Driver<R, A> {
    session: Session,
    recognizer: R,
    actuator: A,
}

impl<R: CardRecognizer, A: BetActuator> Driver<R, A> {
    pub fn new(session: Session, recognizer: R, actuator: A) -> Self {
        Self {
            session,
            recognizer,
            actuator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }

    /// Play rounds until the attempt terminates, returning the terminal
    /// resolution.
    pub fn play_attempt(&mut self) -> Result<Resolution, ProtocolError> {
        loop {
            let round = self.session.round();
            let bet = match self.session.begin_round() {
                Ok(bet) => bet,
                Err(BeginError::RankUnknown(round)) => {
                    event!(
                        target: "ridebus_bot::bet",
                        Level::WARN,
                        round = %round,
                        "prerequisite rank unknown, folding the attempt"
                    );
                    return Ok(self.session.forfeit_round());
                }
            };
            log_bet(round, bet);

            self.actuator.place(bet);
            let sighting = self.recognizer.observe();
            self.session.record_card(sighting)?;

            let resolution = self.session.resolve_round()?;
            log_resolution(&self.session, sighting, resolution);

            match resolution {
                Resolution::Advanced(_) => continue,
                terminal => return Ok(terminal),
            }
        }
    }

    /// Play a fixed number of attempts back to back.
    pub fn play_attempts(&mut self, count: u64) -> Result<(), ProtocolError> {
        for _ in 0..count {
            self.play_attempt()?;
        }
        Ok(())
    }
}

fn log_bet(round: Round, bet: Bet) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "ridebus_bot::bet",
        Level::DEBUG,
        round = %round,
        bet = %bet,
    );
}

fn log_resolution(session: &Session, sighting: Sighting, resolution: Resolution) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    match resolution {
        Resolution::Advanced(next) => {
            event!(
                target: "ridebus_bot::outcome",
                Level::DEBUG,
                card = %sighting,
                next = %next,
            );
        }
        Resolution::AttemptWon => {
            event!(
                target: "ridebus_bot::outcome",
                Level::INFO,
                card = %sighting,
                result = "won",
                balance = session.bankroll().balance(),
            );
        }
        Resolution::AttemptLost(round) => {
            event!(
                target: "ridebus_bot::outcome",
                Level::INFO,
                card = %sighting,
                result = "lost",
                round = %round,
                balance = session.bankroll().balance(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BetActuator, CardRecognizer, Driver};
    use ridebus_core::game::{Resolution, Round, Session};
    use ridebus_core::model::bankroll::Stakes;
    use ridebus_core::model::bet::Bet;
    use ridebus_core::model::rank::Rank;
    use ridebus_core::model::sighting::Sighting;
    use ridebus_core::model::suit::Suit;

    /// Replays a fixed script of sightings.
    struct Script {
        sightings: Vec<Sighting>,
        next: usize,
    }

    impl Script {
        fn new(sightings: Vec<Sighting>) -> Self {
            Self { sightings, next: 0 }
        }
    }

    impl CardRecognizer for Script {
        fn observe(&mut self) -> Sighting {
            let sighting = self.sightings[self.next];
            self.next += 1;
            sighting
        }
    }

    /// Records every bet it was asked to place.
    #[derive(Default)]
    struct Tape {
        placed: Vec<Bet>,
    }

    impl BetActuator for &mut Tape {
        fn place(&mut self, bet: Bet) {
            self.placed.push(bet);
        }
    }

    #[test]
    fn losing_attempt_places_one_bet_and_books_the_stake() {
        let mut tape = Tape::default();
        let script = Script::new(vec![Sighting::of(Rank::Seven, Suit::Spades)]);
        let mut driver = Driver::new(
            Session::with_seed(Stakes::default(), 1),
            script,
            &mut tape,
        );

        let resolution = driver.play_attempt().unwrap();
        assert_eq!(resolution, Resolution::AttemptLost(Round::One));
        assert_eq!(driver.session().bankroll().balance(), -500);
        assert_eq!(tape.placed.len(), 1);
        assert_eq!(tape.placed[0].to_string(), "red");
    }

    #[test]
    fn winning_attempt_places_four_bets_before_their_cards() {
        // Hearts all the way leaves round 4 betting one of the other three
        // suits; script the fourth card after seeing what got placed is not
        // possible here, so run the attempt twice with the same seed: the
        // first pass reveals the tie-break pick, the second wins with it.
        let probe_suit = {
            let mut tape = Tape::default();
            let script = Script::new(vec![
                Sighting::of(Rank::Two, Suit::Hearts),
                Sighting::of(Rank::King, Suit::Hearts),
                Sighting::of(Rank::Ten, Suit::Hearts),
                Sighting::Missed,
            ]);
            let mut driver = Driver::new(
                Session::with_seed(Stakes::default(), 42),
                script,
                &mut tape,
            );
            driver.play_attempt().unwrap();
            match tape.placed[3] {
                Bet::Suit(suit) => suit,
                other => panic!("round 4 placed {other}, expected a suit"),
            }
        };

        let mut tape = Tape::default();
        let script = Script::new(vec![
            Sighting::of(Rank::Two, Suit::Hearts),
            Sighting::of(Rank::King, Suit::Hearts),
            Sighting::of(Rank::Ten, Suit::Hearts),
            Sighting::of(Rank::Ace, probe_suit),
        ]);
        let mut driver = Driver::new(
            Session::with_seed(Stakes::default(), 42),
            script,
            &mut tape,
        );

        let resolution = driver.play_attempt().unwrap();
        assert_eq!(resolution, Resolution::AttemptWon);
        assert_eq!(driver.session().bankroll().balance(), 10_000);
        assert_eq!(tape.placed.len(), 4);
        assert_eq!(tape.placed[0].to_string(), "red");
        assert_eq!(tape.placed[1].to_string(), "higher");
        assert_eq!(tape.placed[2].to_string(), "inside");
    }

    #[test]
    fn missed_card_terminates_the_attempt_with_a_loss() {
        let mut tape = Tape::default();
        let script = Script::new(vec![
            Sighting::of(Rank::Two, Suit::Hearts),
            Sighting::Missed,
        ]);
        let mut driver = Driver::new(
            Session::with_seed(Stakes::default(), 1),
            script,
            &mut tape,
        );

        let resolution = driver.play_attempt().unwrap();
        assert_eq!(resolution, Resolution::AttemptLost(Round::Two));
        assert_eq!(driver.session().bankroll().losses(), 1);
    }

    #[test]
    fn suit_only_first_card_folds_at_round_two() {
        let mut tape = Tape::default();
        let script = Script::new(vec![Sighting::SuitOnly(Suit::Diamonds)]);
        let mut driver = Driver::new(
            Session::with_seed(Stakes::default(), 1),
            script,
            &mut tape,
        );

        let resolution = driver.play_attempt().unwrap();
        assert_eq!(resolution, Resolution::AttemptLost(Round::Two));
        assert_eq!(driver.session().bankroll().balance(), -500);
        // Only the round-1 bet ever reached the table.
        assert_eq!(tape.placed.len(), 1);
    }

    #[test]
    fn play_attempts_accumulates_terminal_counters() {
        let mut tape = Tape::default();
        let script = Script::new(vec![
            Sighting::of(Rank::Seven, Suit::Spades),
            Sighting::of(Rank::Seven, Suit::Clubs),
            Sighting::of(Rank::Four, Suit::Spades),
        ]);
        let mut driver = Driver::new(
            Session::with_seed(Stakes::default(), 1),
            script,
            &mut tape,
        );

        driver.play_attempts(3).unwrap();
        assert_eq!(driver.session().bankroll().attempts(), 3);
        assert_eq!(driver.session().bankroll().losses(), 3);
        assert_eq!(driver.session().bankroll().balance(), -1_500);
    }
}
