use super::engine::ChangeEngine;
use crate::config::RegisterConfig;
use crate::domain::ports::JournalStoreBox;
use crate::domain::till::{Till, TillSummary};
use crate::domain::transaction::{Purchase, TransactionRecord};
use crate::error::{Result, TillError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    Open,
    Closed,
}

/// End-of-day view of a register session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub opening: TillSummary,
    pub closing: TillSummary,
    pub expected_total: u64,
    pub records: Vec<TransactionRecord>,
}

/// A cash register for one trading day.
///
/// Owns the till and an independently tracked expected total. Every purchase
/// goes through [`ChangeEngine`], is journaled, and is followed by a safety
/// check that the till balance still equals the expected total.
pub struct Register {
    till: Till,
    journal: JournalStoreBox,
    opening: TillSummary,
    expected_total: u64,
    sequence: u64,
    status: RegisterStatus,
}

impl Register {
    /// Loads the till with the configured starting cash and opens for trading.
    pub fn open(config: &RegisterConfig, journal: JournalStoreBox) -> Result<Self> {
        let mut till = Till::new();
        till.load(config.starting_cash)?;
        let opening = till.summary();
        let expected_total = config.starting_cash.total();

        tracing::info!(expected = expected_total, "Register opened");

        Ok(Self {
            till,
            journal,
            opening,
            expected_total,
            sequence: 0,
            status: RegisterStatus::Open,
        })
    }

    /// Rings up one purchase.
    ///
    /// Rejected purchases are journaled and the register stays open. A purchase
    /// the till cannot make change for is journaled and closes the register;
    /// later calls fail with [`TillError::RegisterClosed`].
    pub async fn process(&mut self, purchase: Purchase) -> Result<TransactionRecord> {
        if self.status == RegisterStatus::Closed {
            return Err(TillError::RegisterClosed);
        }
        self.sequence += 1;

        let record = match ChangeEngine::make_change(
            purchase.cost,
            &purchase.payment,
            &mut self.till,
        ) {
            Ok(change) => {
                self.expected_total += purchase.cost;
                tracing::info!(
                    sequence = self.sequence,
                    cost = purchase.cost,
                    paid = purchase.amount_paid(),
                    change = change.total(),
                    "Transaction completed"
                );
                TransactionRecord::completed(self.sequence, &purchase, change)
            }
            Err(e) if e.is_fatal() => {
                tracing::error!(sequence = self.sequence, error = %e, "Store closed");
                self.status = RegisterStatus::Closed;
                TransactionRecord::failed(self.sequence, &purchase, &e)
            }
            Err(e) => {
                tracing::warn!(sequence = self.sequence, error = %e, "Transaction rejected");
                TransactionRecord::failed(self.sequence, &purchase, &e)
            }
        };

        let record = record.with_balances(self.till.balance(), self.expected_total);
        self.journal.append(record.clone()).await?;
        self.verify_balance()?;
        Ok(record)
    }

    fn verify_balance(&self) -> Result<()> {
        let actual = self.till.balance();
        if actual != self.expected_total {
            tracing::error!(
                expected = self.expected_total,
                actual,
                "Till balance does not match expected total"
            );
            return Err(TillError::BalanceMismatch {
                expected: self.expected_total,
                actual,
            });
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.status == RegisterStatus::Closed
    }

    pub fn status(&self) -> RegisterStatus {
        self.status
    }

    pub fn till(&self) -> &Till {
        &self.till
    }

    pub fn expected_total(&self) -> u64 {
        self.expected_total
    }

    pub fn summary(&self) -> TillSummary {
        self.till.summary()
    }

    /// Consumes the register and returns the day's report.
    pub async fn close(self) -> Result<SessionReport> {
        Ok(SessionReport {
            opening: self.opening,
            closing: self.till.summary(),
            expected_total: self.expected_total,
            records: self.journal.records().await?,
        })
    }
}
