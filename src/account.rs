use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{client::ClientId, history::History};

pub type AccountNumber = u32;

pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount, it must be greater than zero")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Withdrawal exceeds the limit of {limit} per operation")]
    WithdrawalLimitExceeded { limit: Decimal },
    #[error("Maximum number of withdrawals ({max}) reached")]
    WithdrawalCountExceeded { max: usize },
    #[error("Deposit would overflow the account balance")]
    BalanceOverflow,
}

/// Extra withdrawal rules carried by a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckingLimits {
    /// Ceiling for a single withdrawal.
    pub withdrawal_limit: Decimal,
    /// Withdrawals allowed over the whole account lifetime.
    pub max_withdrawals: usize,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Generic,
    Checking(CheckingLimits),
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    owner: ClientId,
    balance: Decimal,
    kind: AccountKind,
    history: History,
}

impl Account {
    pub fn new(number: AccountNumber, owner: ClientId, kind: AccountKind) -> Self {
        Self {
            number,
            owner,
            balance: Decimal::zero(),
            kind,
            history: History::default(),
        }
    }

    pub fn checking(number: AccountNumber, owner: ClientId, limits: CheckingLimits) -> Self {
        Self::new(number, owner, AccountKind::Checking(limits))
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    /// Tax id of the client holding this account.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Withdraws `amount`, reporting only whether the balance changed.
    /// History is left untouched, see [`crate::transaction::Transaction::apply_to`].
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    pub fn deposit(&mut self, amount: Decimal) -> bool {
        self.try_deposit(amount).is_ok()
    }

    pub fn try_withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let result = self
            .check_checking_limits(amount)
            .and_then(|_| self.check_withdrawal(amount));
        match result {
            Ok(()) => {
                self.balance -= amount;
                Ok(())
            }
            Err(err) => {
                debug!(account = self.number, %amount, %err, "withdrawal rejected");
                Err(err)
            }
        }
    }

    pub fn try_deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::zero() {
            debug!(account = self.number, %amount, "deposit rejected");
            return Err(AccountError::InvalidAmount);
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            debug!(account = self.number, %amount, "deposit overflows balance");
            return Err(AccountError::BalanceOverflow);
        };
        self.balance = balance;
        Ok(())
    }

    // Checking rules run before, and independently of, the balance rule.
    fn check_checking_limits(&self, amount: Decimal) -> Result<(), AccountError> {
        let AccountKind::Checking(limits) = self.kind else {
            return Ok(());
        };
        if amount > limits.withdrawal_limit {
            return Err(AccountError::WithdrawalLimitExceeded {
                limit: limits.withdrawal_limit,
            });
        }
        if self.history.withdrawal_count() >= limits.max_withdrawals {
            return Err(AccountError::WithdrawalCountExceeded {
                max: limits.max_withdrawals,
            });
        }
        Ok(())
    }

    fn check_withdrawal(&self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::zero() {
            Err(AccountError::InvalidAmount)
        } else if amount > self.balance {
            Err(AccountError::InsufficientFunds)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::transaction::Transaction;

    use super::*;

    fn generic_with(balance: u32) -> Account {
        let mut acc = Account::new(1, "111".to_string(), AccountKind::Generic);
        acc.balance = Decimal::from_u32(balance).unwrap();
        acc
    }

    fn checking() -> Account {
        Account::checking(
            1,
            "111".to_string(),
            CheckingLimits {
                withdrawal_limit: Decimal::from_u32(500).unwrap(),
                max_withdrawals: 3,
            },
        )
    }

    #[test]
    fn new_account_defaults() {
        let acc = checking();
        assert_eq!(acc.number(), 1);
        assert_eq!(acc.branch(), "0001");
        assert_eq!(acc.owner(), "111");
        assert_eq!(acc.balance(), Decimal::zero());
        assert!(acc.history().is_empty());
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut acc = generic_with(10);
        for amount in [Decimal::zero(), Decimal::from_i32(-5).unwrap()] {
            assert!(!acc.withdraw(amount));
            assert!(!acc.deposit(amount));
            assert_eq!(acc.try_deposit(amount), Err(AccountError::InvalidAmount));
            assert_eq!(acc.try_withdraw(amount), Err(AccountError::InvalidAmount));
        }
        assert_eq!(acc.balance(), Decimal::from_u32(10).unwrap());
    }

    #[test]
    fn non_positive_withdrawals_rejected_by_checking_account() {
        let mut acc = checking();
        assert!(acc.deposit(Decimal::from_u32(100).unwrap()));
        for amount in [Decimal::zero(), Decimal::from_i32(-5).unwrap()] {
            assert!(!acc.withdraw(amount));
            assert_eq!(acc.try_withdraw(amount), Err(AccountError::InvalidAmount));
        }
        assert_eq!(acc.balance(), Decimal::from_u32(100).unwrap());

        let err = Transaction::Withdrawal(Decimal::zero())
            .apply_to(&mut acc)
            .unwrap_err();
        assert_eq!(err, AccountError::InvalidAmount);
        assert!(acc.history().is_empty());
    }

    #[test]
    fn deposit_overflow_leaves_account_untouched() {
        let mut acc = checking();
        Transaction::Deposit(Decimal::MAX)
            .apply_to(&mut acc)
            .unwrap();
        let err = Transaction::Deposit(Decimal::MAX)
            .apply_to(&mut acc)
            .unwrap_err();
        assert_eq!(err, AccountError::BalanceOverflow);
        assert!(!acc.deposit(Decimal::from_u32(1).unwrap()));
        assert_eq!(acc.balance(), Decimal::MAX);
        assert_eq!(acc.history().len(), 1);
    }

    #[test]
    fn withdraw_within_and_above_balance() {
        let mut acc = generic_with(10);
        assert!(acc.withdraw(Decimal::new(25, 1)));
        assert_eq!(acc.balance(), Decimal::new(75, 1));

        assert_eq!(
            acc.try_withdraw(Decimal::from_u32(8).unwrap()),
            Err(AccountError::InsufficientFunds)
        );
        assert_eq!(acc.balance(), Decimal::new(75, 1));

        // whole balance can be taken out
        assert!(acc.withdraw(Decimal::new(75, 1)));
        assert_eq!(acc.balance(), Decimal::zero());
    }

    #[test]
    fn deposit_increases_balance() {
        let mut acc = generic_with(0);
        assert!(acc.deposit(Decimal::new(1050, 2)));
        assert!(acc.deposit(Decimal::from_u32(1).unwrap()));
        assert_eq!(acc.balance(), Decimal::new(1150, 2));
    }

    #[test]
    fn account_methods_do_not_touch_history() {
        let mut acc = generic_with(0);
        acc.deposit(Decimal::from_u32(10).unwrap());
        acc.withdraw(Decimal::from_u32(5).unwrap());
        assert!(acc.history().is_empty());
    }

    #[test]
    fn checking_ceiling_applies_regardless_of_balance() {
        let mut acc = checking();
        acc.deposit(Decimal::from_u32(10_000).unwrap());
        assert_eq!(
            acc.try_withdraw(Decimal::from_u32(501).unwrap()),
            Err(AccountError::WithdrawalLimitExceeded {
                limit: Decimal::from_u32(500).unwrap()
            })
        );
        assert_eq!(acc.balance(), Decimal::from_u32(10_000).unwrap());
        assert!(acc.withdraw(Decimal::from_u32(500).unwrap()));
    }

    #[test]
    fn checking_count_uses_recorded_withdrawals() {
        let mut acc = checking();
        Transaction::Deposit(Decimal::from_u32(1000).unwrap())
            .apply_to(&mut acc)
            .unwrap();
        // deposits don't count towards the limit
        assert_eq!(acc.history().withdrawal_count(), 0);

        for _ in 0..3 {
            Transaction::Withdrawal(Decimal::from_u32(10).unwrap())
                .apply_to(&mut acc)
                .unwrap();
        }
        assert_eq!(
            acc.try_withdraw(Decimal::from_u32(1).unwrap()),
            Err(AccountError::WithdrawalCountExceeded { max: 3 })
        );
        assert_eq!(acc.balance(), Decimal::from_u32(970).unwrap());
    }

    #[test]
    fn checking_limits_checked_before_balance() {
        let mut acc = checking();
        // empty account, but the ceiling is reported first
        assert_eq!(
            acc.try_withdraw(Decimal::from_u32(600).unwrap()),
            Err(AccountError::WithdrawalLimitExceeded {
                limit: Decimal::from_u32(500).unwrap()
            })
        );
        assert_eq!(
            acc.try_withdraw(Decimal::from_u32(100).unwrap()),
            Err(AccountError::InsufficientFunds)
        );
    }

    #[test]
    fn generic_account_has_no_withdrawal_limits() {
        let mut acc = generic_with(5_000);
        for _ in 0..5 {
            Transaction::Withdrawal(Decimal::from_u32(600).unwrap())
                .apply_to(&mut acc)
                .unwrap();
        }
        assert_eq!(acc.balance(), Decimal::from_u32(2_000).unwrap());
    }
}
