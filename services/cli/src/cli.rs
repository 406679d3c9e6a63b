use crate::demo::{run_demo, run_match, run_normalize, DemoArgs, MatchArgs, NormalizeArgs};
use clap::{Parser, Subcommand};
use fuzzy_names::config::AppConfig;
use fuzzy_names::error::AppError;
use fuzzy_names::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "fuzzy-names",
    about = "Resolve person identities across two independently sourced name lists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the sample query roster against the sample reference roster (default command)
    Demo(DemoArgs),
    /// Print the normalized form of one or more raw names
    Normalize(NormalizeArgs),
    /// Resolve a single name against the sample reference roster
    Match(MatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, policy = %config.matching.nickname_policy, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Normalize(args) => {
            run_normalize(args);
            Ok(())
        }
        Command::Match(args) => run_match(args, &config),
    }
}
