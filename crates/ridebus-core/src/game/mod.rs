pub mod attempt;
pub mod round;
pub mod serialization;
pub mod session;

pub use attempt::RoundAttempt;
pub use round::Round;
pub use session::{BeginError, ProtocolError, Resolution, Session};
