#![deny(warnings)]
pub mod driver;

pub use driver::{BetActuator, CardRecognizer, Driver};
