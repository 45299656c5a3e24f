use chrono::NaiveDate;

use crate::{
    account::{Account, AccountError, AccountNumber},
    transaction::Transaction,
};

/// National tax id, unique per client.
pub type ClientId = String;

pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/mm/yyyy` date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT)
}

#[derive(Debug, Clone)]
pub struct Client {
    name: String,
    tax_id: ClientId,
    address: String,
    phone: String,
    birth_date: NaiveDate,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<ClientId>,
        address: impl Into<String>,
        phone: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            address: address.into(),
            phone: phone.into(),
            birth_date,
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Numbers of the accounts held by this client, in opening order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Forwards `transaction` to `account`.
    ///
    /// NOTE: ownership of `account` is not checked, callers are trusted to pass
    /// one of [`Client::accounts`].
    pub fn execute_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), AccountError> {
        transaction.apply_to(account)
    }
}
