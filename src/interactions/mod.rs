//! Protein-ligand interaction detection.
//!
//! Four categories are searched per model: hydrogen bonds, salt bridges,
//! a pi-stacking proxy, and hydrophobic contacts. Each category pairs a
//! protein-side filter with a ligand-side filter and a distance cutoff; the
//! categories are independent and their results are concatenated in a fixed
//! order, so the output sequence is reproducible run over run.

pub mod classifier;
pub mod cutoffs;
pub mod structs;

// Re-exports
pub use classifier::InteractionClassifier;
pub use cutoffs::Cutoffs;
pub use structs::{ContactRecord, Interaction};

use crate::errors::AnalysisError;
use crate::structure::StructureModel;
use tracing::debug;

/// Classify all protein-ligand contacts in one model.
///
/// # Arguments
///
/// * `model` - A loaded structure model with a non-empty protein partition
/// * `cutoffs` - Complete per-category distance cutoffs
///
/// # Errors
///
/// [`AnalysisError::Structure`] when the model is empty or has no protein
/// atoms. An empty ligand partition is not an error; it produces an empty
/// record sequence.
///
/// # Example
///
/// ```no_run
/// use boltzana::{Cutoffs, StructureModel, get_contacts};
/// use std::path::Path;
///
/// let (model, _warnings) =
///     StructureModel::from_file(Path::new("model_0.pdb"), "model_0").unwrap();
/// let records = get_contacts(&model, Cutoffs::default()).unwrap();
/// println!("Found {} contacts", records.len());
/// ```
pub fn get_contacts(
    model: &StructureModel,
    cutoffs: Cutoffs,
) -> Result<Vec<ContactRecord>, AnalysisError> {
    let classifier = InteractionClassifier::new(model, cutoffs)?;
    let records = classifier.classify();
    debug!(
        "Found {count} contacts in model `{id}`",
        count = records.len(),
        id = model.id()
    );
    Ok(records)
}
