//! Runtime configuration for a register session.

use crate::domain::bills::Bills;
use crate::domain::denomination::Denomination;

/// Number of purchases generated when no input file is given.
pub const DEFAULT_TRANSACTIONS: usize = 100;

/// How the till is stocked each morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterConfig {
    pub starting_cash: Bills,
}

impl Default for RegisterConfig {
    /// $1 x 50, $5 x 20, $10 x 10, $20 x 5 ($350).
    fn default() -> Self {
        Self {
            starting_cash: Bills::new()
                .with(Denomination::One, 50)
                .with(Denomination::Five, 20)
                .with(Denomination::Ten, 10)
                .with(Denomination::Twenty, 5),
        }
    }
}

/// Settings for generated purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub transactions: usize,
    /// Fixed seed for reproducible runs; entropy is used when absent.
    pub seed: Option<u64>,
    /// Replay the fixed test sequence instead of random costs.
    pub test_data: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            transactions: DEFAULT_TRANSACTIONS,
            seed: None,
            test_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starting_cash() {
        let config = RegisterConfig::default();
        assert_eq!(config.starting_cash.total(), 350);
        assert_eq!(config.starting_cash[Denomination::One], 50);
        assert_eq!(config.starting_cash[Denomination::Twenty], 5);
    }
}
