use super::session::Session;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of a session for reporting. Attempts are never
/// persisted or restored; this exists so drivers can log where the money
/// and the current attempt stand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub round: u8,
    pub cards: Vec<String>,
    pub balance: i64,
    pub attempts: u64,
    pub wins: u64,
    pub losses: u64,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        SessionSnapshot {
            seed: session.seed(),
            round: session.round().number(),
            cards: session
                .cards()
                .iter()
                .map(|sighting| sighting.to_string())
                .collect(),
            balance: session.bankroll().balance(),
            attempts: session.bankroll().attempts(),
            wins: session.bankroll().wins(),
            losses: session.bankroll().losses(),
        }
    }

    pub fn to_json(session: &Session) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
