use crate::domain::bills::Bills;
use crate::domain::denomination::Denomination;
use crate::domain::till::Till;
use crate::error::{TillError, TransactionError};

/// Runs one purchase against the till.
///
/// `make_change` is all-or-nothing: it either returns the change handed back
/// with the till holding the payment minus that change, or returns an error
/// with the till exactly as it was before the call.
pub struct ChangeEngine;

impl ChangeEngine {
    /// Accepts `payment` for an item costing `cost` and hands back change.
    ///
    /// The tendered bills go into the drawer before change is counted, so they
    /// can be handed straight back out. Change is paid largest bill first; when
    /// a denomination runs short the remainder falls through to the next
    /// smaller one.
    pub fn make_change(
        cost: u64,
        payment: &Bills,
        till: &mut Till,
    ) -> Result<Bills, TransactionError> {
        if cost == 0 {
            return Err(TransactionError::InvalidCost(cost));
        }

        let paid = payment.total();
        if paid < cost {
            return Err(TransactionError::InsufficientPayment { cost, paid });
        }

        let snapshot = till.clone();
        // Deposit only fails on count overflow, and then leaves the till as is.
        if let Err(TillError::StockOverflow { denomination, .. }) = till.deposit(payment) {
            return Err(TransactionError::TooManyBills { denomination });
        }

        match Self::disburse(paid - cost, till) {
            Ok(change) => Ok(change),
            Err(e) => {
                *till = snapshot;
                Err(e)
            }
        }
    }

    fn disburse(change_needed: u64, till: &mut Till) -> Result<Bills, TransactionError> {
        let mut remaining = change_needed;
        let mut change = Bills::new();

        for denomination in Denomination::ALL_DESCENDING {
            let fits = u32::try_from(remaining / denomination.value()).unwrap_or(u32::MAX);
            let take = fits.min(till.count(denomination));
            if take == 0 {
                continue;
            }

            // `take` never exceeds stock; a failed withdraw would still roll back.
            till.withdraw(denomination, take).map_err(|_| {
                TransactionError::TillExhausted {
                    denomination,
                    shortfall: remaining,
                }
            })?;
            remaining -= denomination.value() * u64::from(take);
            change.add(denomination, take);
            tracing::debug!(%denomination, count = take, remaining, "Bills returned");
        }

        if remaining > 0 {
            return Err(TransactionError::TillExhausted {
                denomination: Denomination::largest_fitting(remaining),
                shortfall: remaining,
            });
        }

        Ok(change)
    }
}
