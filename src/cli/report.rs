use super::CutoffArgs;
use boltzana::boltz::{
    confidence_table, discover_model_numbers, find_affinity_json, parse_affinity,
    structure_file_for_model,
};
use boltzana::{
    extract_interactions, write_df_to_file, AnalysisError, Cutoffs, StructureModel, TableFileType,
};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to an extracted prediction results directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory; one subdirectory is created per model
    #[arg(short, long)]
    output: PathBuf,

    /// Comma-separated model numbers to analyze, e.g. 0,2.
    /// All discovered models are analyzed when omitted.
    #[arg(short, long)]
    models: Option<String>,

    /// Output file type for tables
    #[arg(short = 't', long, default_value_t = TableFileType::Csv, value_enum)]
    output_format: TableFileType,

    #[command(flatten)]
    cutoffs: CutoffArgs,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    let cutoffs = match args.cutoffs.to_cutoffs() {
        Ok(cutoffs) => cutoffs,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let model_nums: Vec<usize> = match &args.models {
        Some(spec) => match parse_model_list(spec) {
            Ok(nums) => nums,
            Err(e) => {
                error!("{e}");
                return;
            }
        },
        None => match discover_model_numbers(&args.input) {
            Ok(nums) if !nums.is_empty() => nums,
            Ok(_) => {
                error!(
                    "No model structure files found under {}",
                    args.input.display()
                );
                return;
            }
            Err(e) => {
                error!("{e}");
                return;
            }
        },
    };
    info!("Analyzing {} model(s): {model_nums:?}", model_nums.len());

    // Ensemble affinity metrics, when the prediction produced them
    match find_affinity_json(&args.input) {
        Ok(Some(path)) => match parse_affinity(&path) {
            Ok(affinity) => {
                for (key, value) in &affinity {
                    info!("{key}: {value:.3}");
                }
            }
            Err(e) => warn!("{e}"),
        },
        Ok(None) => debug!("No affinity file found"),
        Err(e) => warn!("{e}"),
    }

    // Confidence summary across all models
    match confidence_table(&args.input) {
        Ok(mut df) => {
            let summary_file = args.output.join("confidence_summary");
            match write_df_to_file(&mut df, &summary_file, args.output_format) {
                Ok(path) => info!("Confidence summary saved to {}", path.display()),
                Err(e) => error!("Failed to write confidence summary: {e}"),
            }
        }
        Err(e) => warn!("{e}"),
    }

    // Models are independent; a failing model is reported without
    // aborting the rest of the batch
    let outcomes: Vec<(usize, Result<PathBuf, AnalysisError>)> = model_nums
        .par_iter()
        .map(|&model_num| (model_num, analyze_one(args, cutoffs, model_num)))
        .collect();

    let mut failed = 0;
    for (model_num, outcome) in &outcomes {
        match outcome {
            Ok(path) => info!("model_{model_num}: interactions saved to {}", path.display()),
            Err(e) => {
                failed += 1;
                error!("model_{model_num}: {e}");
            }
        }
    }
    if failed > 0 {
        warn!("{failed} of {} model(s) failed", outcomes.len());
    }
}

fn analyze_one(
    args: &Args,
    cutoffs: Cutoffs,
    model_num: usize,
) -> Result<PathBuf, AnalysisError> {
    let structure = structure_file_for_model(&args.input, model_num)?;
    debug!(
        "model_{model_num}: using structure file {}",
        structure.display()
    );

    let (model, warnings) =
        StructureModel::from_file(&structure, format!("model_{model_num}"))?;
    for e in &warnings {
        warn!("model_{model_num}: {e}");
    }

    extract_interactions(&model, cutoffs, &args.output, model_num, args.output_format)
}

fn parse_model_list(spec: &str) -> Result<Vec<usize>, String> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("Invalid model number `{s}` in --models"))
        })
        .collect()
}
