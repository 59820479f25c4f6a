//! CSV export of progression tables.
//!
//! One header row, then one record per loss depth with columns in table
//! order. Non-finite values and absent odds serialize as empty fields so
//! the output never carries `NaN` or `inf` literals.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::progression::ProgressionRow;

const HEADERS: [&str; 7] = [
    "loss_index",
    "bet_amount",
    "cumulative_bet",
    "gross_profit",
    "net_profit",
    "loss_probability",
    "odds",
];

/// Writes progression rows as CSV, returning the number of data rows.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_csv<W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = ProgressionRow>,
) -> Result<u32> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(HEADERS)
        .context("failed to write CSV header")?;

    let mut written = 0_u32;
    for row in rows {
        csv_writer
            .write_record([
                row.loss_index.to_string(),
                numeric_field(row.bet_amount),
                numeric_field(row.cumulative_bet),
                numeric_field(row.gross_profit),
                numeric_field(row.net_profit),
                numeric_field(row.loss_probability),
                row.odds.map_or_else(String::new, numeric_field),
            ])
            .with_context(|| format!("failed to write CSV row {}", row.loss_index))?;
        written += 1;
    }
    csv_writer.flush().context("failed to flush CSV output")?;

    info!(rows = written, "exported progression table");
    Ok(written)
}

/// Renders progression rows as an in-memory CSV string.
///
/// # Errors
///
/// Returns an error if serialization fails; writing to a `Vec` itself
/// cannot fail.
pub fn csv_string(rows: impl IntoIterator<Item = ProgressionRow>) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}

fn numeric_field(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}
