use boltzana::boltz::confidence_table;
use boltzana::{write_df_to_file, TableFileType};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, trace};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to an extracted prediction results directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the output file
    #[arg(short = 'f', long = "filename", default_value_t = String::from("confidence_summary"))]
    filename: String,

    /// Output file type
    #[arg(short = 't', long, default_value_t = TableFileType::Csv, value_enum)]
    output_format: TableFileType,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    let mut df = match confidence_table(&args.input) {
        Ok(df) => df,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!("Parsed confidence metrics for {} model(s)\n{df}", df.height());

    let output_file = args.output.join(&args.filename);
    match write_df_to_file(&mut df, &output_file, args.output_format) {
        Ok(path) => info!("Confidence summary saved to {}", path.display()),
        Err(e) => error!("Failed to write confidence summary: {e}"),
    }
}
