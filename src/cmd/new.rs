use super::resolve_layout;
use clap::Args;
use keycraft::configuration::{create_empty_configuration, export_configuration, ExportFormat};
use keycraft::error::KcResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    #[arg(short, long)]
    pub layout: String,

    #[arg(short, long)]
    pub name: Option<String>,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: NewArgs) -> KcResult<()> {
    let layout = resolve_layout(&args.layout)?;
    let configuration = create_empty_configuration(&layout.id, args.name.as_deref());
    let json = export_configuration(&configuration, ExportFormat::Json)?;

    match args.out {
        Some(path) => {
            fs::write(&path, json)?;
            info!("💾 Saved configuration {} to {}", configuration.id, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
