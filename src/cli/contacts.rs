use super::CutoffArgs;
use boltzana::{get_contacts, records_to_df, write_df_to_file, StructureModel, TableFileType};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to the PDB or mmCIF file to be analyzed
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the output file
    #[arg(short = 'f', long = "filename", default_value_t = String::from("interactions"))]
    filename: String,

    /// Output file type
    #[arg(short = 't', long, default_value_t = TableFileType::Csv, value_enum)]
    output_format: TableFileType,

    #[command(flatten)]
    cutoffs: CutoffArgs,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    // Make sure `input` exists
    let input_path = match Path::new(&args.input).canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to retrieve input file: {}", e);
            return;
        }
    };
    let cutoffs = match args.cutoffs.to_cutoffs() {
        Ok(cutoffs) => cutoffs,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let model_id = input_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "model".to_string());
    let (model, warnings) = match StructureModel::from_file(&input_path, model_id) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    for e in &warnings {
        match e.level() {
            pdbtbx::ErrorLevel::BreakingError | pdbtbx::ErrorLevel::InvalidatingError => {
                error!("{e}")
            }
            _ => warn!("{e}"),
        }
    }
    debug!(
        "Loaded {} atoms from {}",
        model.atoms().len(),
        input_path.display()
    );

    let records = match get_contacts(&model, cutoffs) {
        Ok(records) => records,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!("Found {} contacts", records.len());

    // Save results
    let mut df = records_to_df(&records);
    let output_file = args.output.join(&args.filename);
    match write_df_to_file(&mut df, &output_file, args.output_format) {
        Ok(path) => info!("Results saved to {}", path.display()),
        Err(e) => error!("Failed to write results: {e}"),
    }
}
