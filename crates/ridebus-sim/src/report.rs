use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use ridebus_core::game::Session;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// End-of-run accounting for one simulated session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryReport {
    pub seed: u64,
    pub attempts: u64,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: f64,
    pub stake: i64,
    pub payout: i64,
    pub final_balance: i64,
}

impl SummaryReport {
    pub fn from_session(session: &Session) -> Self {
        let bankroll = session.bankroll();
        let attempts = bankroll.attempts();
        let win_rate = if attempts == 0 {
            0.0
        } else {
            bankroll.wins() as f64 / attempts as f64
        };
        Self {
            seed: session.seed(),
            attempts,
            wins: bankroll.wins(),
            losses: bankroll.losses(),
            win_rate,
            stake: session.stakes().stake,
            payout: session.stakes().payout,
            final_balance: bankroll.balance(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path).map_err(|source| ReportError::Io {
            context: "creating summary file",
            source,
        })?;
        file.write_all(json.as_bytes())
            .map_err(|source| ReportError::Io {
                context: "writing summary file",
                source,
            })?;
        Ok(())
    }
}
