use super::resolve_layout;
use crate::reports;
use clap::Args;
use keycraft::error::KcResult;
use keycraft::geometry::find_layout_issues;
use keycraft::layouts::builtin_layouts;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Print the key grid of one layout instead of the catalog
    #[arg(short, long)]
    pub layout: Option<String>,
}

pub fn run(args: LayoutsArgs) -> KcResult<()> {
    let Some(spec) = args.layout else {
        reports::tables::layout_catalog(&builtin_layouts());
        return Ok(());
    };

    let layout = resolve_layout(&spec)?;
    for issue in find_layout_issues(&layout) {
        warn!("⚠️  {}", issue);
    }
    reports::grid::print_layout(&layout);
    Ok(())
}
