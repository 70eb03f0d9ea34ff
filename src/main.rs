use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in layouts or print one as a grid
    Layouts(cmd::layouts::LayoutsArgs),
    /// Create an empty configuration for a layout
    New(cmd::new::NewArgs),
    /// Check configurations against a layout
    Validate(cmd::validate::ValidateArgs),
    /// Assess build difficulty and print the build plan
    Assess(cmd::assess::AssessArgs),
    /// Suggest a difficulty level from builder experience
    Recommend(cmd::recommend::RecommendArgs),
    /// Print a configuration as json, qmk or csv
    Export(cmd::export::ExportArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Raw matches are kept so flag overrides can tell user input from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Layouts(args) => cmd::layouts::run(args),
        Commands::New(args) => cmd::new::run(args),
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Assess(args) => match matches.subcommand_matches("assess") {
            Some(sub_matches) => cmd::assess::run(args, sub_matches),
            None => unreachable!("clap dispatched the assess subcommand"),
        },
        Commands::Recommend(args) => cmd::recommend::run(args),
        Commands::Export(args) => cmd::export::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
