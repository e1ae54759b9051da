//! Command implementations wiring the parser and encoder to the shell I/O.
//!
//! The two suspend points of the whole pipeline live here: reading the
//! roster to completion before parsing starts, and writing the export
//! to completion after encoding ends.

use std::path::{Path, PathBuf};

use vizytka_core::config::Settings;
use vizytka_core::types::ContactRecord;
use vizytka_rfc::rfc::roster::parse_roster;
use vizytka_rfc::rfc::vcard::build_export;

use crate::error::AppResult;
use crate::store::SessionStore;

/// Reads a roster file, replaces the saved session list, and writes the
/// export.
///
/// ## Errors
/// Returns an error if the roster cannot be read (nothing is saved in
/// that case), the store cannot be written, the parsed list is empty,
/// or the export file cannot be written.
pub async fn convert(
    store: &impl SessionStore,
    settings: &Settings,
    input: &Path,
    output: Option<PathBuf>,
) -> AppResult<PathBuf> {
    let raw = tokio::fs::read_to_string(input).await?;

    let records = parse_roster(&raw);
    tracing::info!(count = records.len(), "Roster parsed");

    store.save(&records)?;

    write_export(&records, settings, output).await
}

/// Re-exports the saved session list without reading a roster.
///
/// ## Errors
/// Returns an error if the store cannot be read, the saved list is
/// empty or absent, or the export file cannot be written.
pub async fn export(
    store: &impl SessionStore,
    settings: &Settings,
    output: Option<PathBuf>,
) -> AppResult<PathBuf> {
    let records = store.load()?.unwrap_or_default();
    write_export(&records, settings, output).await
}

/// Deletes the saved session list.
///
/// ## Errors
/// Returns an error if the store cannot be modified.
pub fn clear(store: &impl SessionStore) -> AppResult<()> {
    store.clear()
}

async fn write_export(
    records: &[ContactRecord],
    settings: &Settings,
    output: Option<PathBuf>,
) -> AppResult<PathBuf> {
    let payload = build_export(records)?;

    let path = output.unwrap_or_else(|| PathBuf::from(&settings.export.output));
    tokio::fs::write(&path, payload).await?;

    tracing::info!(path = %path.display(), count = records.len(), "Export written");
    Ok(path)
}
