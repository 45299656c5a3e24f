/// Accounts and their balance rules. Generic accounts only check the amount
/// against the balance, checking accounts add a per-withdrawal ceiling and
/// a lifetime withdrawal count.
pub mod account;

/// Deposits and withdrawals, applied to an account and then recorded in its history.
pub mod transaction;

/// Append-only log of the transactions applied to an account.
pub mod history;

/// Account holders.
pub mod client;

/// Account lookup by client tax id.
pub mod directory;

/// Client and account registry, plus "in memory" implementation.
/// Presentation code goes through it instead of holding global lists.
pub mod bank;

/// Bank settings loaded from a TOML file.
pub mod config;

/// Text menu, CSV roster and statement helpers and logging setup used by the
/// binary. Lives in the library so integration tests can run the menu.
pub mod bin_utils;
