//! CSV input of purchases and output of the transaction journal.

pub mod journal_writer;
pub mod purchase_reader;
