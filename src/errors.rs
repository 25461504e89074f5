//! Error types for configuration, structure, and I/O failures.

use crate::interactions::Interaction;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid or incomplete cutoff configuration.
///
/// A missing category is an error on purpose: silently substituting a default
/// for a typo'd key would go unnoticed in downstream tables.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A cutoff map did not contain an entry for the category.
    #[error("missing cutoff for interaction category `{0}`")]
    MissingCutoff(Interaction),

    /// A cutoff value was zero, negative, or not finite.
    #[error("invalid cutoff {value} for interaction category `{category}`")]
    InvalidCutoff {
        /// The category the value was supplied for.
        category: Interaction,
        /// The offending value.
        value: f64,
    },
}

/// A structure model that cannot be analyzed.
#[derive(Debug, Error, PartialEq)]
pub enum StructureError {
    /// The model contains no atoms at all.
    #[error("model `{model_id}` contains no atoms")]
    EmptyModel {
        /// Identifier of the offending model.
        model_id: String,
    },

    /// No atom fell into the protein partition; there is nothing to measure
    /// ligand contacts against.
    #[error("model `{model_id}` has no protein atoms")]
    EmptyProteinPartition {
        /// Identifier of the offending model.
        model_id: String,
    },

    /// The structure file could not be parsed.
    #[error("failed to read structure `{path}`: {details}")]
    Unreadable {
        /// Path of the input file.
        path: PathBuf,
        /// Concatenated parser errors.
        details: String,
    },
}

/// Umbrella error for a per-model analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Cutoff configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The structure model was rejected.
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// Prediction metadata (confidence/affinity files) was missing or invalid.
    #[error("{0}")]
    Metadata(String),

    /// Writing an artifact failed. Never retried: a table is either complete
    /// on disk or reported as failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
