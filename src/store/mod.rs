use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use crate::models::{BudgetLimit, Expense, Record};

/// Load every non-blank line of a tab-delimited log, in file order.
///
/// A missing file is an empty log. Fields are returned exactly as written;
/// quotes carry no meaning and nothing is unescaped. Bytes that are not
/// valid UTF-8 become U+FFFD rather than failing the whole load.
pub(crate) fn load(path: &Path) -> Result<Vec<Record>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open log: {}", path.display()))
        }
    };
    let records = read_records(file)
        .with_context(|| format!("Failed to read log: {}", path.display()))?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.byte_records() {
        let row = result.context("Failed to read log line")?;
        let fields: Vec<String> = row
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if std::str::from_utf8(row.as_slice()).is_err() {
            debug!("Record {} is not valid UTF-8, decoded lossily", records.len() + 1);
        }
        records.push(Record::new(fields));
    }
    Ok(records)
}

/// Append one tab-joined line to the end of the log, creating it if absent.
pub(crate) fn append<S: AsRef<str>>(path: &Path, fields: &[S]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log for append: {}", path.display()))?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    wtr.write_record(fields.iter().map(|f| f.as_ref()))
        .with_context(|| format!("Failed to write record to {}", path.display()))?;
    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

pub(crate) fn append_expense(path: &Path, expense: &Expense) -> Result<()> {
    append(path, &expense.to_fields())
}

pub(crate) fn append_budget(path: &Path, budget: &BudgetLimit) -> Result<()> {
    append(path, &budget.to_fields())
}

/// Create an empty log (and its directory) if it does not exist yet.
pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to create log: {}", path.display()))?;
    info!("Created empty log at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests;
