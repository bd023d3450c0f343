#![deny(warnings)]
pub mod logging;
pub mod report;
pub mod table;
