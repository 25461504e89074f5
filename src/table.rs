//! Contact table construction and persistence.
//!
//! One table per model, fixed column order, deterministic artifact path. The
//! whole table is serialized into memory and written with a single call, so
//! an interrupted run leaves either a complete file or no file - never a
//! partial one.

use crate::errors::AnalysisError;
use crate::interactions::ContactRecord;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// File format for persisted contact tables.
#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum TableFileType {
    /// Comma-separated values
    Csv,
    /// Parquet columnar storage
    Parquet,
    /// Standard JSON
    Json,
    /// Newline-delimited JSON
    NDJson,
}

impl std::fmt::Display for TableFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TableFileType::Csv => write!(f, "csv"),
            TableFileType::Parquet => write!(f, "parquet"),
            TableFileType::Json => write!(f, "json"),
            TableFileType::NDJson => write!(f, "ndjson"),
        }
    }
}

/// Convert a record sequence into a table with the fixed column order
/// `interaction_type, protein_resn, protein_resi, protein_atom, ligand_atom,
/// distance`.
///
/// An empty sequence produces a schema-complete frame with zero rows.
pub fn records_to_df(records: &[ContactRecord]) -> DataFrame {
    df!(
        "interaction_type" => records.iter().map(|r| r.interaction.to_string()).collect::<Vec<String>>(),
        "protein_resn" => records.iter().map(|r| r.protein_resn.clone()).collect::<Vec<String>>(),
        "protein_resi" => records.iter().map(|r| r.protein_resi as i64).collect::<Vec<i64>>(),
        "protein_atom" => records.iter().map(|r| r.protein_atom.clone()).collect::<Vec<String>>(),
        "ligand_atom" => records.iter().map(|r| r.ligand_atom.clone()).collect::<Vec<String>>(),
        "distance" => records.iter().map(|r| r.distance).collect::<Vec<f64>>(),
    )
    .unwrap()
}

/// The artifact path for a model's interaction table:
/// `<destination>/model_<N>/model_<N>_interactions.<ext>`.
///
/// Derived from the destination and model number only, so repeated runs
/// overwrite rather than accumulate.
pub fn model_table_path(destination: &Path, model_num: usize, file_type: TableFileType) -> PathBuf {
    destination
        .join(format!("model_{model_num}"))
        .join(format!("model_{model_num}_interactions.{file_type}"))
}

/// Persist a model's contact records under `destination`.
///
/// Creates the per-model directory if absent. An empty record sequence still
/// writes a header-only table. Write failures propagate; they are not
/// retried and never leave a partial artifact behind.
pub fn write_model_table(
    records: &[ContactRecord],
    destination: &Path,
    model_num: usize,
    file_type: TableFileType,
) -> Result<PathBuf, AnalysisError> {
    let model_dir = destination.join(format!("model_{model_num}"));
    std::fs::create_dir_all(&model_dir)?;
    let path = model_dir.join(format!("model_{model_num}_interactions.{file_type}"));

    let mut df = records_to_df(records);
    let bytes = serialize_df(&mut df, file_type)?;
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Write a table to `file_path`, replacing its extension with the format's.
pub fn write_df_to_file(
    df: &mut DataFrame,
    file_path: &Path,
    file_type: TableFileType,
) -> Result<PathBuf, AnalysisError> {
    let path = file_path.with_extension(file_type.to_string());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let bytes = serialize_df(df, file_type)?;
    std::fs::write(&path, bytes)?;
    Ok(path)
}

fn serialize_df(df: &mut DataFrame, file_type: TableFileType) -> Result<Vec<u8>, AnalysisError> {
    let mut buf = Vec::new();
    let result = match file_type {
        TableFileType::Csv => CsvWriter::new(&mut buf).finish(df),
        TableFileType::Parquet => ParquetWriter::new(&mut buf).finish(df).map(|_| ()),
        TableFileType::Json => JsonWriter::new(&mut buf)
            .with_json_format(JsonFormat::Json)
            .finish(df),
        TableFileType::NDJson => JsonWriter::new(&mut buf)
            .with_json_format(JsonFormat::JsonLines)
            .finish(df),
    };
    result.map_err(|e| AnalysisError::Io(std::io::Error::other(e)))?;
    Ok(buf)
}
