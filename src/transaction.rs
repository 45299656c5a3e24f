use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::{Account, AccountError};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single balance mutation. Only its snapshot is kept, in the account history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Withdrawal(Decimal),
    Deposit(Decimal),
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        match kind {
            TransactionKind::Deposit => Self::Deposit(amount),
            TransactionKind::Withdrawal => Self::Withdrawal(amount),
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Self::Withdrawal(amount) | Self::Deposit(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
            Self::Deposit(_) => TransactionKind::Deposit,
        }
    }

    /// Applies the transaction and records it in the account history.
    /// A rejected transaction leaves both balance and history as they were.
    pub fn apply_to(&self, account: &mut Account) -> Result<(), AccountError> {
        match self {
            Self::Withdrawal(amount) => account.try_withdraw(*amount)?,
            Self::Deposit(amount) => account.try_deposit(*amount)?,
        }
        account.history_mut().record(self);
        Ok(())
    }
}
