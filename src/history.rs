use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::trace;

use crate::transaction::{Transaction, TransactionKind};

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Append-only log of the transactions applied to one account, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn record(&mut self, transaction: &Transaction) {
        self.record_at(transaction, Local::now().naive_local());
    }

    pub(crate) fn record_at(&mut self, transaction: &Transaction, timestamp: NaiveDateTime) {
        trace!(kind = %transaction.kind(), amount = %transaction.amount(), "history entry");
        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == TransactionKind::Withdrawal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
