//! Boltz prediction-output metadata.
//!
//! A prediction run leaves a directory tree with per-model structure files
//! (`*_model_<N>.pdb` / `.cif`), per-model `confidence_*_model_<N>.json`
//! summaries, and an optional ensemble `affinity_*.json`. This module finds
//! those files by naming convention and parses the metadata; the interaction
//! core never depends on any of it.

use crate::errors::AnalysisError;
use polars::prelude::*;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Per-model confidence metrics emitted by the predictor.
///
/// Every field is optional; absent metrics stay null in the summary table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfidenceSummary {
    /// Aggregated model confidence.
    #[serde(default)]
    pub confidence_score: Option<f64>,
    /// Predicted TM-score.
    #[serde(default)]
    pub ptm: Option<f64>,
    /// Interface predicted TM-score.
    #[serde(default)]
    pub iptm: Option<f64>,
    /// Ligand-interface predicted TM-score.
    #[serde(default)]
    pub ligand_iptm: Option<f64>,
    /// Protein-interface predicted TM-score.
    #[serde(default)]
    pub protein_iptm: Option<f64>,
    /// Mean per-residue confidence over the complex.
    #[serde(default)]
    pub complex_plddt: Option<f64>,
    /// Mean interface per-residue confidence.
    #[serde(default)]
    pub complex_iplddt: Option<f64>,
    /// Mean pairwise distance error over the complex.
    #[serde(default)]
    pub complex_pde: Option<f64>,
    /// Mean interface pairwise distance error.
    #[serde(default)]
    pub complex_ipde: Option<f64>,
}

/// Ensemble binding-affinity estimates, metric name to value.
///
/// Ordered map so reports iterate deterministically.
pub type AffinitySummary = BTreeMap<String, f64>;

/// All files under `dir`, depth first with sorted directory entries.
///
/// Sorting makes discovery independent of filesystem enumeration order.
fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let mut entries = std::fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Find the first file whose name matches `pattern`, in sorted walk order.
pub fn find_model_file(dir: &Path, pattern: &Regex) -> Result<PathBuf, AnalysisError> {
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;
    files
        .into_iter()
        .find(|p| pattern.is_match(file_name(p)))
        .ok_or_else(|| {
            AnalysisError::Metadata(format!(
                "no file matching `{pattern}` found under {dir}",
                dir = dir.display()
            ))
        })
}

/// The structure file for one model number.
pub fn structure_file_for_model(dir: &Path, model_num: usize) -> Result<PathBuf, AnalysisError> {
    let pattern = Regex::new(&format!(r"_model_{model_num}\.(pdb|cif)$")).unwrap();
    find_model_file(dir, &pattern)
}

/// All model numbers with a structure file under `dir`, sorted and deduplicated.
pub fn discover_model_numbers(dir: &Path) -> Result<Vec<usize>, AnalysisError> {
    let pattern = Regex::new(r"_model_(\d+)\.(pdb|cif)$").unwrap();
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;

    let numbers: BTreeSet<usize> = files
        .iter()
        .filter_map(|p| pattern.captures(file_name(p)))
        .filter_map(|c| c[1].parse().ok())
        .collect();
    Ok(numbers.into_iter().collect())
}

/// Parse every `confidence_*_model_<N>.json` under `dir` into a table sorted
/// by model number.
///
/// Columns: `model_num` plus the [`ConfidenceSummary`] metrics. Finding no
/// confidence file at all is an error; a prediction directory without them
/// is not usable for model selection.
pub fn confidence_table(dir: &Path) -> Result<DataFrame, AnalysisError> {
    let model_re = Regex::new(r"_model_(\d+)\.json$").unwrap();
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;

    let mut rows: Vec<(u32, ConfidenceSummary)> = Vec::new();
    for path in files {
        let name = file_name(&path);
        if !name.starts_with("confidence") || !name.ends_with(".json") {
            continue;
        }
        let Some(captures) = model_re.captures(name) else {
            continue;
        };
        let model_num: u32 = captures[1].parse().map_err(|_| {
            AnalysisError::Metadata(format!("model number out of range in `{name}`"))
        })?;

        let contents = std::fs::read_to_string(&path)?;
        let summary: ConfidenceSummary = serde_json::from_str(&contents).map_err(|e| {
            AnalysisError::Metadata(format!(
                "failed to parse confidence file `{path}`: {e}",
                path = path.display()
            ))
        })?;
        rows.push((model_num, summary));
    }

    if rows.is_empty() {
        return Err(AnalysisError::Metadata(format!(
            "no confidence_*.json files found under {dir}",
            dir = dir.display()
        )));
    }
    rows.sort_by_key(|(model_num, _)| *model_num);

    Ok(df!(
        "model_num" => rows.iter().map(|(n, _)| *n).collect::<Vec<u32>>(),
        "confidence_score" => rows.iter().map(|(_, c)| c.confidence_score).collect::<Vec<Option<f64>>>(),
        "ptm" => rows.iter().map(|(_, c)| c.ptm).collect::<Vec<Option<f64>>>(),
        "iptm" => rows.iter().map(|(_, c)| c.iptm).collect::<Vec<Option<f64>>>(),
        "ligand_iptm" => rows.iter().map(|(_, c)| c.ligand_iptm).collect::<Vec<Option<f64>>>(),
        "protein_iptm" => rows.iter().map(|(_, c)| c.protein_iptm).collect::<Vec<Option<f64>>>(),
        "complex_plddt" => rows.iter().map(|(_, c)| c.complex_plddt).collect::<Vec<Option<f64>>>(),
        "complex_iplddt" => rows.iter().map(|(_, c)| c.complex_iplddt).collect::<Vec<Option<f64>>>(),
        "complex_pde" => rows.iter().map(|(_, c)| c.complex_pde).collect::<Vec<Option<f64>>>(),
        "complex_ipde" => rows.iter().map(|(_, c)| c.complex_ipde).collect::<Vec<Option<f64>>>(),
    )
    .unwrap())
}

/// The ensemble `affinity_*.json`, if the prediction produced one.
pub fn find_affinity_json(dir: &Path) -> Result<Option<PathBuf>, AnalysisError> {
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;
    Ok(files.into_iter().find(|p| {
        let name = file_name(p);
        name.starts_with("affinity") && name.ends_with(".json")
    }))
}

/// Parse an affinity file into its metric map.
pub fn parse_affinity(path: &Path) -> Result<AffinitySummary, AnalysisError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        AnalysisError::Metadata(format!(
            "failed to parse affinity file `{path}`: {e}",
            path = path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn confidence_table_is_sorted_by_model_number() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "confidence_target_model_2.json",
            r#"{"confidence_score": 0.71, "ptm": 0.8}"#,
        );
        write(
            dir.path(),
            "confidence_target_model_0.json",
            r#"{"confidence_score": 0.93, "ptm": 0.9, "iptm": 0.85}"#,
        );

        let df = confidence_table(dir.path()).unwrap();
        assert_eq!(df.height(), 2);
        let model_nums: Vec<Option<u32>> =
            df.column("model_num").unwrap().u32().unwrap().iter().collect();
        assert_eq!(model_nums, vec![Some(0), Some(2)]);
    }

    #[test]
    fn missing_confidence_files_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "notes.txt", "nothing to see");
        assert!(matches!(
            confidence_table(dir.path()),
            Err(AnalysisError::Metadata(_))
        ));
    }

    #[test]
    fn model_discovery_walks_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("predictions");
        std::fs::create_dir(&nested).unwrap();
        write(&nested, "target_model_1.pdb", "");
        write(&nested, "target_model_0.cif", "");
        write(&nested, "plddt_target_model_0.npz", "");

        assert_eq!(discover_model_numbers(dir.path()).unwrap(), vec![0, 1]);
        let found = structure_file_for_model(dir.path(), 1).unwrap();
        assert!(found.ends_with("predictions/target_model_1.pdb"));
        assert!(structure_file_for_model(dir.path(), 7).is_err());
    }

    #[test]
    fn affinity_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "affinity_target.json",
            r#"{"affinity_pred_value": 1.234, "affinity_probability_binary": 0.87}"#,
        );

        let path = find_affinity_json(dir.path()).unwrap().unwrap();
        let affinity = parse_affinity(&path).unwrap();
        assert_eq!(
            affinity.keys().collect::<Vec<&String>>(),
            vec!["affinity_pred_value", "affinity_probability_binary"]
        );
        assert_eq!(affinity["affinity_probability_binary"], 0.87);
    }

    #[test]
    fn no_affinity_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_affinity_json(dir.path()).unwrap().is_none());
    }
}
