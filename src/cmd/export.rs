use super::load_configuration;
use clap::Args;
use keycraft::configuration::{export_configuration, ExportFormat};
use keycraft::error::KcResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(short, long)]
    pub config: PathBuf,

    /// json, qmk or csv
    #[arg(short, long, default_value = "json")]
    pub format: String,
}

pub fn run(args: ExportArgs) -> KcResult<()> {
    let format = ExportFormat::parse(&args.format)?;
    let configuration = load_configuration(&args.config)?;
    println!("{}", export_configuration(&configuration, format)?);
    Ok(())
}
