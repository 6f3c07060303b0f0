use rand::RngCore;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::merkle_sum_tree::asset::parse_balances;
use crate::merkle_sum_tree::{TreeError, UserRecord};

#[derive(Debug, Deserialize)]
struct CsvRecord {
    user_id: String,
    balances: String,
}

/// Parses a snapshot CSV with columns `user_id,balances`, where `balances`
/// is a quoted `coin:amount` list, e.g. `"BTC:20.33,ETH:10.12"`. Amounts go
/// through the validated decimal parser; each record draws a fresh salt from
/// `rng`.
pub fn parse_csv_to_records<P: AsRef<Path>>(
    path: P,
    rng: &mut impl RngCore,
) -> Result<Vec<UserRecord>, TreeError> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvRecord = result?;
        let balances = parse_balances(&row.balances)?;
        records.push(UserRecord::new(row.user_id, balances, rng)?);
    }

    Ok(records)
}
