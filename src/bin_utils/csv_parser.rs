use std::io::Read;

use anyhow::Context;
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

use crate::client::{Client, parse_birth_date};

/// One row of a client roster, `birth_date` as `dd/mm/yyyy`.
#[derive(Debug, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub tax_id: String,
    pub address: String,
    pub phone: String,
    pub birth_date: String,
}

impl TryFrom<ClientRecord> for Client {
    type Error = anyhow::Error;

    fn try_from(record: ClientRecord) -> Result<Self, Self::Error> {
        let birth_date = parse_birth_date(&record.birth_date)
            .with_context(|| format!("Invalid birth date `{}`", record.birth_date))?;
        Ok(Client::new(
            record.name,
            record.tax_id,
            record.address,
            record.phone,
            birth_date,
        ))
    }
}

/// Parses a client roster in CSV format, yielding each row with its line number.
pub struct CsvClientParser<R> {
    iter: DeserializeRecordsIntoIter<R, ClientRecord>,
}

impl<R> CsvClientParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvClientParser<R>
where
    R: Read,
{
    type Item = (u64, Result<ClientRecord, csv::Error>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
