pub mod chance;
pub mod recommend;
pub mod verdict;

pub use chance::Chance;
pub use recommend::{recommend_high_low, recommend_suit, recommend_window, suit_chance};
pub use verdict::{color_wins, high_low_wins, suit_wins, window_wins};
