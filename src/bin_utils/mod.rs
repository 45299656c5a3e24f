//! Text front end over [`crate::bank`]. Kept in the library so integration tests can
//! drive the same menu the binary runs.

use std::io::{BufRead, Read, Write};
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    bank::{Bank, in_memory_bank::InMemoryBank},
    client::{Client, parse_birth_date},
    transaction::{Transaction, TransactionKind},
};
use csv_parser::CsvClientParser;
use csv_printer::print_statement;

pub mod csv_parser;
pub mod csv_printer;
pub mod logger;

const MENU: &str = "
=== MAIN MENU ===
1 - Register new client
2 - Check balance
3 - Deposit
4 - Withdraw
5 - Statement
6 - List accounts
7 - Exit
";

/// Registers every valid client of a CSV roster, returning how many were added.
/// Rows that fail to parse or register are passed to `on_error` with their line.
pub fn load_clients<B, R>(
    bank: &mut B,
    source: R,
    mut on_error: impl FnMut(u64, anyhow::Error),
) -> usize
where
    B: Bank,
    R: Read,
{
    let mut loaded = 0;
    for (line, row) in CsvClientParser::new(source) {
        let registered = row
            .map_err(anyhow::Error::from)
            .and_then(Client::try_from)
            .and_then(|client| bank.register_client(client).map_err(anyhow::Error::from));
        match registered {
            Ok(_) => loaded += 1,
            Err(err) => on_error(line, err),
        }
    }
    loaded
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub bank: InMemoryBank,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs the menu until the exit option or the end of input.
    pub fn run(mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(option) = self.prompt("Choose an option: ")? else {
                break;
            };
            match option.as_str() {
                "1" => self.register()?,
                "2" => self.show_balance()?,
                "3" => self.transact(TransactionKind::Deposit)?,
                "4" => self.transact(TransactionKind::Withdrawal)?,
                "5" => self.show_statement()?,
                "6" => self.list_accounts()?,
                "7" => {
                    writeln!(self.output, "\nShutting down. Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "\n@@@ Invalid option, please try again. @@@")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn register(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== New client ===")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(tax_id) = self.prompt("Tax id: ")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Phone: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd/mm/yyyy): ")? else {
            return Ok(());
        };
        let Ok(birth_date) = parse_birth_date(&birth_date) else {
            writeln!(self.output, "\n@@@ Invalid birth date, expected dd/mm/yyyy. @@@")?;
            return Ok(());
        };

        let client = Client::new(name, tax_id, address, phone, birth_date);
        match self.bank.register_client(client) {
            Ok(number) => writeln!(
                self.output,
                "\n=== Client registered, account number {number}! ==="
            )?,
            Err(err) => writeln!(self.output, "\n@@@ {err}. @@@")?,
        }
        Ok(())
    }

    fn show_balance(&mut self) -> Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        match self.bank.account(&tax_id) {
            Ok(account) => writeln!(self.output, "\nBalance: R$ {:.2}", account.balance())?,
            Err(err) => writeln!(self.output, "\n@@@ {err}. @@@")?,
        }
        Ok(())
    }

    fn transact(&mut self, kind: TransactionKind) -> Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        if let Err(err) = self.bank.account(&tax_id) {
            writeln!(self.output, "\n@@@ {err}. @@@")?;
            return Ok(());
        }
        let label = match kind {
            TransactionKind::Deposit => "Deposit amount: ",
            TransactionKind::Withdrawal => "Withdrawal amount: ",
        };
        let Some(amount) = self.prompt(label)? else {
            return Ok(());
        };
        let Ok(amount) = Decimal::from_str(&amount) else {
            writeln!(self.output, "\n@@@ Operation failed! Invalid amount `{amount}`. @@@")?;
            return Ok(());
        };

        match self
            .bank
            .execute_transaction(&tax_id, Transaction::new(kind, amount))
        {
            Ok(()) => writeln!(self.output, "\n=== {kind} completed successfully! ===")?,
            Err(err) => {
                warn!(client = %tax_id, %kind, %amount, %err, "transaction failed");
                writeln!(self.output, "\n@@@ Operation failed! {err}. @@@")?
            }
        }
        Ok(())
    }

    fn show_statement(&mut self) -> Result<()> {
        let Some(tax_id) = self.prompt("Client tax id: ")? else {
            return Ok(());
        };
        let account = match self.bank.account(&tax_id) {
            Ok(account) => account,
            Err(err) => {
                writeln!(self.output, "\n@@@ {err}. @@@")?;
                return Ok(());
            }
        };
        writeln!(self.output, "\n=== Statement ===")?;
        if account.history().is_empty() {
            writeln!(self.output, "No transactions recorded.")?;
        } else {
            print_statement(self.output, account.history().entries().iter())?;
        }
        writeln!(self.output, "Balance: R$ {:.2}", account.balance())?;
        Ok(())
    }

    fn list_accounts(&mut self) -> Result<()> {
        let accounts = self.bank.list_accounts(usize::MAX, 0);
        if accounts.is_empty() {
            writeln!(self.output, "\nNo accounts registered.")?;
            return Ok(());
        }
        for account in accounts {
            let holder = self
                .bank
                .client(account.owner())
                .map(Client::name)
                .unwrap_or_default();
            writeln!(
                self.output,
                "\nBranch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}",
                account.branch(),
                account.number(),
                holder
            )?;
        }
        Ok(())
    }
}
