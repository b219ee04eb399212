use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use nvest::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to an optional snapshot file
    #[arg(short, long, global = true)]
    snapshot_path: Option<String>,

    /// Emit the dashboard as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for nvest::AppCommand {
    fn from(cmd: Commands) -> nvest::AppCommand {
        match cmd {
            Commands::Portfolio {
                investor,
                months,
                with_returns,
            } => nvest::AppCommand::Portfolio {
                investor,
                months,
                with_returns,
            },
            Commands::Business { owner } => nvest::AppCommand::Business { owner },
            Commands::Platform => nvest::AppCommand::Platform,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an example snapshot file
    Setup,
    /// Display an investor's portfolio dashboard
    Portfolio {
        /// Investor user id
        #[arg(short, long)]
        investor: String,

        /// Performance series horizon in months
        #[arg(short, long)]
        months: Option<usize>,

        /// Include cumulative returns in the series
        #[arg(short, long)]
        with_returns: bool,
    },
    /// Display a business owner's capital-raise dashboard
    Business {
        /// Owner user id
        #[arg(short, long)]
        owner: String,
    },
    /// Display the platform-wide dashboard
    Platform,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => nvest::cli::setup::setup(cli.snapshot_path.as_deref()),
        Some(cmd) => nvest::run_command(cmd.into(), cli.snapshot_path.as_deref(), cli.json),
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
