use crate::reports;
use clap::Args;
use keycraft::config::UserExperience;
use keycraft::error::KcResult;
use keycraft::personalization::get_personalized_difficulty;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub experience: UserExperience,

    /// Desired feature, e.g. custom-firmware or custom-pcb
    #[arg(long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,
}

pub fn run(args: RecommendArgs) -> KcResult<()> {
    let recommendation = get_personalized_difficulty(&args.experience, &args.features);
    reports::tables::recommendation(&recommendation);
    Ok(())
}
