use crate::domain::transaction::TransactionRecord;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Flat CSV shape of a [`TransactionRecord`]; change is split per bill.
#[derive(Debug, Serialize)]
struct JournalRow<'a> {
    sequence: u64,
    cost: u64,
    paid: u64,
    status: &'static str,
    twenties: u32,
    tens: u32,
    fives: u32,
    ones: u32,
    balance: u64,
    expected: u64,
    detail: &'a str,
}

impl<'a> From<&'a TransactionRecord> for JournalRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        Self {
            sequence: record.sequence,
            cost: record.cost,
            paid: record.paid,
            status: record.status.as_str(),
            twenties: record.change.twenties,
            tens: record.change.tens,
            fives: record.change.fives,
            ones: record.change.ones,
            balance: record.balance,
            expected: record.expected,
            detail: record.detail.as_deref().unwrap_or_default(),
        }
    }
}

/// Writes journal records as CSV with a header row.
pub struct JournalWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> JournalWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(&mut self, records: &[TransactionRecord]) -> Result<()> {
        for record in records {
            self.writer.serialize(JournalRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
