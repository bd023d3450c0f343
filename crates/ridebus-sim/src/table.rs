use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ridebus_bot::{BetActuator, CardRecognizer};
use ridebus_core::model::bet::Bet;
use ridebus_core::model::deck::Deck;
use ridebus_core::model::sighting::Sighting;

/// A simulated table: one shuffled deck per attempt, dealt in order. With
/// `miss_rate` above zero, a deal occasionally comes back unrecognized,
/// which is how the real recognizer fails.
#[derive(Debug)]
pub struct SimTable {
    rng: StdRng,
    deck: Deck,
    dealt: usize,
    miss_rate: f64,
}

impl SimTable {
    pub fn new(seed: u64, miss_rate: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self {
            rng,
            deck,
            dealt: 0,
            miss_rate,
        }
    }

    /// Fresh shuffle; call between attempts, as the table collects and
    /// reshuffles its cards after every game.
    pub fn next_attempt(&mut self) {
        self.deck.shuffle_in_place(&mut self.rng);
        self.dealt = 0;
    }
}

impl CardRecognizer for SimTable {
    fn observe(&mut self) -> Sighting {
        if self.dealt == self.deck.cards().len() {
            self.next_attempt();
        }

        let card = self.deck.cards()[self.dealt];
        self.dealt += 1;

        if self.miss_rate > 0.0 && self.rng.gen_bool(self.miss_rate) {
            Sighting::Missed
        } else {
            Sighting::Full(card)
        }
    }
}

/// The simulated table has no buttons to press.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActuator;

impl BetActuator for NoopActuator {
    fn place(&mut self, _bet: Bet) {}
}
