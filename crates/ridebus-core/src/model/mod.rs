pub mod bankroll;
pub mod bet;
pub mod card;
pub mod deck;
pub mod rank;
pub mod sighting;
pub mod suit;
