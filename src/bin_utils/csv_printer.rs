use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    history::{HistoryEntry, TIMESTAMP_FORMAT},
    transaction::TransactionKind,
};

#[derive(Debug, Serialize)]
pub struct StatementRow {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: String,
}

impl From<&HistoryEntry> for StatementRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            kind: entry.kind(),
            amount: entry.amount(),
            timestamp: entry.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

pub fn print_statement<'a, W>(
    output: &mut W,
    entries: impl Iterator<Item = &'a HistoryEntry>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for entry in entries {
        if let Err(err) = writer.serialize(StatementRow::from(entry)) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
