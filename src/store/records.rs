use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{Column, GameRecord, FIELD_COUNT};

use super::file::{create_if_missing, GameStore};

/// Load every well-formed record in file order. Rows whose field count is not
/// exactly nine are skipped without complaint.
pub fn read_all(store: &GameStore) -> Result<Vec<GameRecord>> {
    create_if_missing(store)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(store.path())
        .context("failed to open game store")?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row.context("failed to read game row")?;
        if row.len() != FIELD_COUNT {
            dropped += 1;
            continue;
        }
        if let Some(record) = GameRecord::from_fields(row.iter()) {
            records.push(record);
        }
    }

    debug!(loaded = records.len(), dropped, "read game store");
    Ok(records)
}

/// Replace the whole file with the header followed by `records`.
pub fn write_all(store: &GameStore, records: &[GameRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(store.path())
        .context("failed to open game store for writing")?;

    write_header(&mut writer)?;
    for record in records {
        writer
            .write_record(record.fields())
            .context("failed to write game row")?;
    }
    writer.flush().context("failed to flush game store")?;

    debug!(written = records.len(), "rewrote game store");
    Ok(())
}

pub(super) fn write_header<W: Write>(writer: &mut csv::Writer<W>) -> Result<()> {
    writer
        .write_record(Column::ALL.map(Column::header))
        .context("failed to write header row")
}
