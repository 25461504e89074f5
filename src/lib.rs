#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Boltzana Library
//!
//! This library analyzes protein-structure-prediction output. It classifies
//! protein-ligand contacts into four interaction categories (hydrogen bonds,
//! salt bridges, a pi-stacking proxy, and hydrophobic contacts) using
//! geometric cutoffs and chemical-property filters, and writes one ordered
//! contact table per predicted model. Parsers for the prediction's
//! confidence and affinity metadata are included for model selection.
//!
//! Contact tables are Polars DataFrames, so results can be written as CSV,
//! Parquet, or JSON, or consumed directly.

pub mod boltz;
pub mod chemistry;
pub mod errors;
pub mod interactions;
pub mod pairs;
pub mod selection;
pub mod structure;
pub mod table;

// Re-export key public types
pub use errors::{AnalysisError, ConfigError, StructureError};
pub use interactions::{get_contacts, ContactRecord, Cutoffs, Interaction, InteractionClassifier};
pub use selection::AtomFilter;
pub use structure::{AtomRecord, StructureModel};
pub use table::{records_to_df, write_df_to_file, write_model_table, TableFileType};

use std::path::{Path, PathBuf};

/// Classify one model's protein-ligand contacts and persist the table.
///
/// The artifact lands at
/// `<destination>/model_<N>/model_<N>_interactions.<ext>`; rerunning with the
/// same destination and model number overwrites it. An empty ligand partition
/// produces a header-only table, not a missing file.
///
/// # Errors
///
/// Structure and configuration problems abort this model's analysis; write
/// failures propagate untouched so a failed write is never reported as
/// success.
pub fn extract_interactions(
    model: &StructureModel,
    cutoffs: Cutoffs,
    destination: &Path,
    model_num: usize,
    file_type: TableFileType,
) -> Result<PathBuf, AnalysisError> {
    let records = interactions::get_contacts(model, cutoffs)?;
    table::write_model_table(&records, destination, model_num, file_type)
}
