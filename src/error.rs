use crate::domain::denomination::Denomination;
use thiserror::Error;

/// Why a single purchase could not go through.
///
/// `InvalidCost`, `InsufficientPayment` and `TooManyBills` leave the till
/// untouched and the register open. `TillExhausted` means change could not be
/// made; the till has been rolled back but the register should stop trading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("invalid purchase cost: ${0}")]
    InvalidCost(u64),
    #[error("not enough money provided: paid ${paid} for a ${cost} purchase")]
    InsufficientPayment { cost: u64, paid: u64 },
    #[error("till cannot hold that many {denomination} bills")]
    TooManyBills { denomination: Denomination },
    #[error("till is out of {denomination} bills: ${shortfall} of change could not be made")]
    TillExhausted {
        denomination: Denomination,
        shortfall: u64,
    },
}

impl TransactionError {
    /// Returns true when the register must close after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TransactionError::TillExhausted { .. })
    }
}

#[derive(Error, Debug)]
pub enum TillError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("insufficient {denomination} stock: available {available}, requested {requested}")]
    InsufficientStock {
        denomination: Denomination,
        available: u32,
        requested: u32,
    },
    #[error("{denomination} stock would overflow: holding {held}, adding {added}")]
    StockOverflow {
        denomination: Denomination,
        held: u32,
        added: u32,
    },
    #[error("till has already been loaded for the day")]
    AlreadyLoaded,
    #[error("register is closed")]
    RegisterClosed,
    #[error("till balance mismatch: expected ${expected}, found ${actual}")]
    BalanceMismatch { expected: u64, actual: u64 },
}

pub type Result<T> = std::result::Result<T, TillError>;
