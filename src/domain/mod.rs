//! Domain layer: denominations, bill counts, the till and transaction records.

pub mod bills;
pub mod denomination;
pub mod ports;
pub mod till;
pub mod transaction;
