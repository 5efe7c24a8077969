//! YAML Export functionality
//!
//! Exports the complete session to YAML format for human-readable backup.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::ledger::LedgerStore;
use crate::models::Taxonomy;
use std::io::Write;

/// Export the full session to YAML format
pub fn export_full_yaml<W: Write>(
    store: &LedgerStore,
    taxonomy: &Taxonomy,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = FullExport::from_store(store, taxonomy);

    writeln!(writer, "# ledger-statement session export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Import(e.to_string()))?;

    export.validate().map_err(LedgerError::Import)?;

    Ok(export)
}
