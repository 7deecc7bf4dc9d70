use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use dolartrack::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for dolartrack::AppCommand {
    fn from(cmd: Commands) -> dolartrack::AppCommand {
        match cmd {
            Commands::Current { no_cache } => dolartrack::AppCommand::Current { no_cache },
            Commands::Monthly { month, year } => dolartrack::AppCommand::Monthly { month, year },
            Commands::Lookup { date } => dolartrack::AppCommand::Lookup { date },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the live official buy/sell rate
    Current {
        /// Ask intermediaries to revalidate instead of serving a cached rate
        #[arg(long)]
        no_cache: bool,
    },
    /// Display monthly stats, chart and daily history
    Monthly {
        /// Month 1-12, defaults to the current month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Look up the rate published on an exact date (YYYY-MM-DD)
    Lookup { date: NaiveDate },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => dolartrack::cli::setup::setup(),
        Some(cmd) => dolartrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
