use std::io::Write;

use anyhow::{Context, Result};
use price_exporter_lib::{to_json, Record};

/// Writes the records as one JSON array followed by a newline. Nothing else
/// goes to stdout.
pub fn print_json(records: &[Record], precision: Option<u32>) -> Result<()> {
    let json = to_json(records, precision)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", json).context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
