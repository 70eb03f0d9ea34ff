use super::{load_configuration, resolve_layout};
use crate::reports;
use clap::{ArgMatches, Args};
use keycraft::config::Customizations;
use keycraft::error::KcResult;
use keycraft::steps::{calculate_build_metrics, create_build_guide};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    #[arg(short, long)]
    pub layout: String,

    #[arg(short, long)]
    pub config: PathBuf,

    /// JSON build profile; explicit flags below override it
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    #[command(flatten)]
    pub customizations: Customizations,
}

pub fn run(args: AssessArgs, matches: &ArgMatches) -> KcResult<()> {
    let layout = resolve_layout(&args.layout)?;
    let configuration = load_configuration(&args.config)?;

    let customizations = match &args.profile {
        Some(path) => {
            info!("⚖️  Loading build profile from: {}", path.display());
            let mut profile = Customizations::load_from_file(path)?;
            profile.merge_from_cli(&args.customizations, matches);
            profile
        }
        None => args.customizations,
    };

    let guide = create_build_guide(&configuration, &layout, &customizations);
    let metrics = calculate_build_metrics(guide.difficulty, &guide.steps);

    reports::tables::difficulty(guide.difficulty, &metrics);
    reports::tables::build_steps(&guide.steps);
    reports::tables::mistakes(guide.common_mistakes);
    Ok(())
}
