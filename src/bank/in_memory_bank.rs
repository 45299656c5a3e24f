use tracing::info;

use crate::{
    account::{Account, AccountNumber, CheckingLimits},
    client::Client,
    directory::{find_account_by_client_id, find_account_by_client_id_mut},
    transaction::Transaction,
};

use super::{Bank, BankError};

#[derive(Debug, Default)]
pub struct InMemoryBank {
    limits: CheckingLimits,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl InMemoryBank {
    pub fn new(limits: CheckingLimits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn client_mut(&mut self, client_id: &str) -> Result<&mut Client, BankError> {
        self.clients
            .iter_mut()
            .find(|client| client.tax_id() == client_id)
            .ok_or_else(|| BankError::ClientNotFound {
                client_id: client_id.to_string(),
            })
    }

    fn next_account_number(&self) -> Result<AccountNumber, BankError> {
        account_number_after(self.accounts.len())
    }
}

/// Account numbers start at 1, so the `count`-th opened account gets `count + 1`.
fn account_number_after(count: usize) -> Result<AccountNumber, BankError> {
    AccountNumber::try_from(count)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or(BankError::AccountNumbersExhausted)
}

impl Bank for InMemoryBank {
    fn register_client(&mut self, client: Client) -> Result<AccountNumber, BankError> {
        if self.client(client.tax_id()).is_ok() {
            return Err(BankError::DuplicateClient {
                client_id: client.tax_id().to_string(),
            });
        }
        let client_id = client.tax_id().to_string();
        info!(client = %client_id, "client registered");
        self.clients.push(client);
        self.open_account(&client_id)
    }

    fn open_account(&mut self, client_id: &str) -> Result<AccountNumber, BankError> {
        let number = self.next_account_number()?;
        let limits = self.limits;
        let client = self.client_mut(client_id)?;
        client.add_account(number);
        let owner = client.tax_id().to_string();
        self.accounts.push(Account::checking(number, owner, limits));
        info!(client = client_id, account = number, "checking account opened");
        Ok(number)
    }

    fn client(&self, client_id: &str) -> Result<&Client, BankError> {
        self.clients
            .iter()
            .find(|client| client.tax_id() == client_id)
            .ok_or_else(|| BankError::ClientNotFound {
                client_id: client_id.to_string(),
            })
    }

    fn account(&self, client_id: &str) -> Result<&Account, BankError> {
        find_account_by_client_id(&self.accounts, client_id).ok_or_else(|| {
            BankError::AccountNotFound {
                client_id: client_id.to_string(),
            }
        })
    }

    fn execute_transaction(
        &mut self,
        client_id: &str,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        let account = find_account_by_client_id_mut(&mut self.accounts, client_id).ok_or_else(
            || BankError::AccountNotFound {
                client_id: client_id.to_string(),
            },
        )?;
        let client = self
            .clients
            .iter()
            .find(|client| client.tax_id() == account.owner())
            .ok_or_else(|| BankError::ClientNotFound {
                client_id: client_id.to_string(),
            })?;
        client.execute_transaction(account, &transaction)?;
        Ok(())
    }

    fn list_accounts(&self, limit: usize, offset: usize) -> &[Account] {
        let start = offset.min(self.accounts.len());
        let end = start.saturating_add(limit).min(self.accounts.len());
        &self.accounts[start..end]
    }
}
