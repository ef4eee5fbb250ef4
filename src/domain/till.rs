use super::bills::Bills;
use super::denomination::Denomination;
use crate::error::{Result, TillError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cash drawer: bill counts per denomination.
///
/// Counts are unsigned and `withdraw` refuses to go below zero, so every
/// observable state holds a non-negative number of each bill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Till {
    stock: Bills,
    loaded: bool,
}

impl Till {
    /// Creates an empty, not-yet-loaded till.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the morning stock. Allowed once per till.
    pub fn load(&mut self, starting_cash: Bills) -> Result<()> {
        if self.loaded {
            return Err(TillError::AlreadyLoaded);
        }
        self.stock = starting_cash;
        self.loaded = true;
        tracing::info!(balance = self.balance(), "Till loaded");
        Ok(())
    }

    /// Puts every tendered bill into the drawer.
    ///
    /// Fails without touching the till if any count would overflow.
    pub fn deposit(&mut self, payment: &Bills) -> Result<()> {
        let mut stock = self.stock;
        for (denomination, added) in payment.iter() {
            let held = stock.count(denomination);
            *stock.slot_mut(denomination) =
                held.checked_add(added).ok_or(TillError::StockOverflow {
                    denomination,
                    held,
                    added,
                })?;
        }
        self.stock = stock;
        Ok(())
    }

    /// Removes `count` bills, leaving the till unchanged if it holds fewer.
    pub fn withdraw(&mut self, denomination: Denomination, count: u32) -> Result<()> {
        let slot = self.stock.slot_mut(denomination);
        if *slot < count {
            return Err(TillError::InsufficientStock {
                denomination,
                available: *slot,
                requested: count,
            });
        }
        *slot -= count;
        Ok(())
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.stock.count(denomination)
    }

    pub fn stock(&self) -> &Bills {
        &self.stock
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Dollar value held.
    pub fn balance(&self) -> u64 {
        self.stock.total()
    }

    pub fn summary(&self) -> TillSummary {
        let lines: Vec<SummaryLine> = self
            .stock
            .iter()
            .map(|(denomination, count)| SummaryLine {
                denomination,
                count,
                subtotal: denomination.value() * u64::from(count),
            })
            .collect();
        let total = lines.iter().map(|line| line.subtotal).sum();
        TillSummary { lines, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub denomination: Denomination,
    pub count: u32,
    pub subtotal: u64,
}

/// Per-denomination breakdown of the till, largest bills first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillSummary {
    pub lines: Vec<SummaryLine>,
    pub total: u64,
}

impl fmt::Display for TillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The till currently has:")?;
        for line in &self.lines {
            writeln!(f, "{} in {}", line.subtotal, line.denomination.plural())?;
        }
        write!(f, "The till has {} dollars", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_till() -> Till {
        let mut till = Till::new();
        till.load(
            Bills::new()
                .with(Denomination::One, 50)
                .with(Denomination::Five, 20)
                .with(Denomination::Ten, 10)
                .with(Denomination::Twenty, 5),
        )
        .unwrap();
        till
    }

    #[test]
    fn test_load_once() {
        let mut till = loaded_till();
        assert!(till.is_loaded());
        assert_eq!(till.balance(), 350);

        let result = till.load(Bills::new());
        assert!(matches!(result, Err(TillError::AlreadyLoaded)));
        assert_eq!(till.balance(), 350);
    }

    #[test]
    fn test_deposit_adds_every_denomination() {
        let mut till = loaded_till();
        till.deposit(
            &Bills::new()
                .with(Denomination::Twenty, 1)
                .with(Denomination::One, 3),
        )
        .unwrap();
        assert_eq!(till.count(Denomination::Twenty), 6);
        assert_eq!(till.count(Denomination::One), 53);
        assert_eq!(till.balance(), 373);
    }

    #[test]
    fn test_deposit_overflow_leaves_till_unchanged() {
        let mut till = loaded_till();
        let before = till.clone();

        let result = till.deposit(
            &Bills::new()
                .with(Denomination::Twenty, 1)
                .with(Denomination::One, u32::MAX),
        );
        assert!(matches!(
            result,
            Err(TillError::StockOverflow {
                denomination: Denomination::One,
                held: 50,
                added: u32::MAX,
            })
        ));
        assert_eq!(till, before);
    }

    #[test]
    fn test_withdraw_success() {
        let mut till = loaded_till();
        till.withdraw(Denomination::Ten, 4).unwrap();
        assert_eq!(till.count(Denomination::Ten), 6);
        assert_eq!(till.balance(), 310);
    }

    #[test]
    fn test_withdraw_insufficient_leaves_till_unchanged() {
        let mut till = loaded_till();
        let before = till.clone();

        let result = till.withdraw(Denomination::Twenty, 6);
        assert!(matches!(
            result,
            Err(TillError::InsufficientStock {
                denomination: Denomination::Twenty,
                available: 5,
                requested: 6,
            })
        ));
        assert_eq!(till, before);
    }

    #[test]
    fn test_summary_matches_balance() {
        let mut till = loaded_till();
        till.withdraw(Denomination::One, 7).unwrap();
        let summary = till.summary();
        assert_eq!(summary.total, till.balance());
        assert_eq!(summary.lines[0].denomination, Denomination::Twenty);
        assert_eq!(summary.lines[0].subtotal, 100);
        assert_eq!(summary.lines[3].count, 43);
    }

    #[test]
    fn test_summary_display() {
        let text = loaded_till().summary().to_string();
        assert!(text.contains("100 in twenties"));
        assert!(text.contains("100 in tens"));
        assert!(text.contains("100 in fives"));
        assert!(text.contains("50 in ones"));
        assert!(text.ends_with("The till has 350 dollars"));
    }
}
