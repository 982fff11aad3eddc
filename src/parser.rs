use csv::ReaderBuilder;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};

/// One roster row as it appears in the players CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub colour: String,
    pub gender: String,
}

const NAME_COLUMN: &str = "peg_name";
const COLOUR_COLUMN: &str = "peg_colour";
const GENDER_COLUMN: &str = "gender";

fn find_column(headers: &csv::StringRecord, column: &str) -> anyhow::Result<usize> {
    match headers.iter().position(|h| h.trim().eq_ignore_ascii_case(column)) {
        Some(index) => Ok(index),
        None => bail!("Players file has no '{}' column", column),
    }
}

/// Reads roster rows from CSV data with a header line.
///
/// Rows that fail to decode or whose field count differs from the header are
/// dropped, as are rows without a name. A repeated name keeps its first row.
pub fn read_players<R: Read>(input: R) -> anyhow::Result<Vec<PlayerRecord>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();

    let name_col = find_column(&headers, NAME_COLUMN)?;
    let colour_col = find_column(&headers, COLOUR_COLUMN)?;
    let gender_col = find_column(&headers, GENDER_COLUMN)?;

    let mut players = Vec::new();
    let mut seen = HashSet::new();

    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                log::warn!("skipping unreadable row {}: {}", line + 2, e);
                continue;
            }
        };

        if record.len() != headers.len() {
            log::debug!("skipping row {}: {} fields, expected {}", line + 2, record.len(), headers.len());
            continue;
        }

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.clone()) {
            log::warn!("duplicate player '{}' ignored", name);
            continue;
        }

        players.push(PlayerRecord {
            name,
            colour: record.get(colour_col).unwrap_or("").trim().to_string(),
            gender: record.get(gender_col).unwrap_or("").trim().to_string(),
        });
    }

    Ok(players)
}

/// Loads the roster from a CSV file
pub fn load_players<P: AsRef<Path>>(csv_path: P) -> anyhow::Result<Vec<PlayerRecord>> {
    let csv_path = csv_path.as_ref();
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open players file '{}'", csv_path.display()))?;
    read_players(file).with_context(|| format!("Failed to read players from '{}'", csv_path.display()))
}
