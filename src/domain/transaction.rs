use super::bills::Bills;
use crate::error::TransactionError;
use serde::{Deserialize, Serialize};

/// One customer purchase: the item cost and the bills handed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub cost: u64,
    pub payment: Bills,
}

impl Purchase {
    pub fn new(cost: u64, payment: Bills) -> Self {
        Self { cost, payment }
    }

    pub fn amount_paid(&self) -> u64 {
        self.payment.total()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Rejected,
    Exhausted,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Rejected => "rejected",
            TransactionStatus::Exhausted => "exhausted",
        }
    }
}

/// Journal entry written for every purchase the register attempts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub sequence: u64,
    pub cost: u64,
    pub paid: u64,
    pub status: TransactionStatus,
    /// Bills returned to the customer; empty unless completed.
    pub change: Bills,
    /// Till balance after the purchase.
    pub balance: u64,
    /// Independently tracked expected balance after the purchase.
    pub expected: u64,
    /// Reason for a rejected or exhausted purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TransactionRecord {
    pub fn completed(sequence: u64, purchase: &Purchase, change: Bills) -> Self {
        Self {
            sequence,
            cost: purchase.cost,
            paid: purchase.amount_paid(),
            status: TransactionStatus::Completed,
            change,
            balance: 0,
            expected: 0,
            detail: None,
        }
    }

    pub fn failed(sequence: u64, purchase: &Purchase, error: &TransactionError) -> Self {
        let status = if error.is_fatal() {
            TransactionStatus::Exhausted
        } else {
            TransactionStatus::Rejected
        };
        Self {
            sequence,
            cost: purchase.cost,
            paid: purchase.amount_paid(),
            status,
            change: Bills::new(),
            balance: 0,
            expected: 0,
            detail: Some(error.to_string()),
        }
    }

    /// Stamps the till balance and the expected balance onto the record.
    pub fn with_balances(mut self, balance: u64, expected: u64) -> Self {
        self.balance = balance;
        self.expected = expected;
        self
    }
}
