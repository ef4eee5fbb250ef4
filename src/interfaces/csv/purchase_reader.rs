use crate::domain::bills::Bills;
use crate::domain::transaction::Purchase;
use crate::error::{Result, TillError};
use serde::Deserialize;
use std::io::Read;

/// One input row: `cost, twenties, tens, fives, ones`.
///
/// Bill columns may be left empty or omitted; they count as zero.
#[derive(Debug, Deserialize)]
struct PurchaseRow {
    cost: u64,
    #[serde(default)]
    twenties: Option<u32>,
    #[serde(default)]
    tens: Option<u32>,
    #[serde(default)]
    fives: Option<u32>,
    #[serde(default)]
    ones: Option<u32>,
}

impl From<PurchaseRow> for Purchase {
    fn from(row: PurchaseRow) -> Self {
        let payment = Bills {
            twenties: row.twenties.unwrap_or_default(),
            tens: row.tens.unwrap_or_default(),
            fives: row.fives.unwrap_or_default(),
            ones: row.ones.unwrap_or_default(),
        };
        Purchase::new(row.cost, payment)
    }
}

/// Reads purchases from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting short records.
pub struct PurchaseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PurchaseReader<R> {
    /// Creates a new `PurchaseReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes purchases, one result per row.
    pub fn purchases(self) -> impl Iterator<Item = Result<Purchase>> {
        self.reader
            .into_deserialize::<PurchaseRow>()
            .map(|result| result.map(Purchase::from).map_err(TillError::from))
    }
}
