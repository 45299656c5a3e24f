use crate::account::Account;

/// Returns the first account held by the client with tax id `client_id`.
/// Linear scan, accounts are not indexed.
pub fn find_account_by_client_id<'a>(
    accounts: &'a [Account],
    client_id: &str,
) -> Option<&'a Account> {
    accounts.iter().find(|acc| acc.owner() == client_id)
}

pub fn find_account_by_client_id_mut<'a>(
    accounts: &'a mut [Account],
    client_id: &str,
) -> Option<&'a mut Account> {
    accounts.iter_mut().find(|acc| acc.owner() == client_id)
}
