use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountNumber},
    client::{Client, ClientId},
    transaction::Transaction,
};

pub mod in_memory_bank;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("No account found for client `{client_id}`")]
    AccountNotFound { client_id: ClientId },
    #[error("No client registered with tax id `{client_id}`")]
    ClientNotFound { client_id: ClientId },
    #[error("A client with tax id `{client_id}` is already registered")]
    DuplicateClient { client_id: ClientId },
    #[error("No account numbers left to assign")]
    AccountNumbersExhausted,
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Registry of clients and their accounts, handed to the presentation layer.
pub trait Bank {
    /// Registers `client` and opens their first checking account.
    fn register_client(&mut self, client: Client) -> Result<AccountNumber, BankError>;

    /// Opens another checking account for an already registered client.
    fn open_account(&mut self, client_id: &str) -> Result<AccountNumber, BankError>;

    fn client(&self, client_id: &str) -> Result<&Client, BankError>;

    /// First account held by `client_id`.
    fn account(&self, client_id: &str) -> Result<&Account, BankError>;

    /// Applies `transaction` to the first account of `client_id`, through that client.
    fn execute_transaction(
        &mut self,
        client_id: &str,
        transaction: Transaction,
    ) -> Result<(), BankError>;

    fn list_accounts(&self, limit: usize, offset: usize) -> &[Account];
}
