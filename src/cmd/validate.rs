use super::{load_configuration, resolve_layout};
use crate::reports;
use clap::Args;
use keycraft::error::{KcResult, KeycraftError};
use keycraft::validator::{validate_configuration, ValidationResult};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(short, long)]
    pub layout: String,

    /// Configuration JSON files
    #[arg(required = true)]
    pub configs: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> KcResult<()> {
    let layout = resolve_layout(&args.layout)?;
    info!("🔎 Validating {} configuration(s) against {}", args.configs.len(), layout.id);

    let results: Vec<(String, KcResult<ValidationResult>)> = args
        .configs
        .par_iter()
        .map(|path| {
            let name = path.display().to_string();
            let result = load_configuration(path).map(|cfg| validate_configuration(&cfg, &layout));
            (name, result)
        })
        .collect();

    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(report) => {
                reports::tables::validation(name, report);
                if !report.is_valid {
                    failed += 1;
                }
            }
            Err(e) => {
                error!("❌ {}: {}", name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(KeycraftError::InvalidOperation(format!(
            "{} of {} configuration(s) failed validation",
            failed,
            results.len()
        )));
    }

    println!("✅ All configurations are valid");
    Ok(())
}
