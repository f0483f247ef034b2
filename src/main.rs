use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use macrovista::core::log::init_logging;
use macrovista::resolver::ResolveMode;
use std::path::PathBuf;

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

#[derive(Args, Clone)]
struct SeriesArgs {
    /// Indicator name (pbi, ipc, desempleo, dolar, ...)
    indicator: String,

    /// Use only the local cache, never the network or embedded data
    #[arg(long, conflicts_with = "demo")]
    offline: bool,

    /// Use only the embedded demo dataset
    #[arg(long)]
    demo: bool,

    /// Start of the date range, YYYY-MM
    #[arg(long, value_parser = parse_month)]
    from: Option<NaiveDate>,

    /// End of the date range, YYYY-MM
    #[arg(long, value_parser = parse_month)]
    to: Option<NaiveDate>,
}

impl SeriesArgs {
    fn mode(&self) -> ResolveMode {
        if self.offline {
            ResolveMode::LocalOnly
        } else if self.demo {
            ResolveMode::EmbeddedOnly
        } else {
            ResolveMode::Automatic
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List the supported indicators
    Indicators,
    /// Display an indicator series as a table
    Show(SeriesArgs),
    /// Display month-over-month percentage changes
    Changes(SeriesArgs),
    /// Export an indicator series to a CSV file
    Export {
        #[command(flatten)]
        series: SeriesArgs,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Fetch and cache every known indicator
    Refresh,
}

fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM, got '{s}'"))
}

impl From<Commands> for macrovista::AppCommand {
    fn from(cmd: Commands) -> macrovista::AppCommand {
        match cmd {
            Commands::Show(args) => macrovista::AppCommand::Show {
                mode: args.mode(),
                indicator: args.indicator,
                from: args.from,
                to: args.to,
            },
            Commands::Changes(args) => macrovista::AppCommand::Changes {
                mode: args.mode(),
                indicator: args.indicator,
                from: args.from,
                to: args.to,
            },
            Commands::Export { series, output } => macrovista::AppCommand::Export {
                mode: series.mode(),
                indicator: series.indicator,
                from: series.from,
                to: series.to,
                output,
            },
            Commands::Refresh => macrovista::AppCommand::Refresh,
            Commands::Indicators => macrovista::AppCommand::Indicators,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => macrovista::cli::setup::run(),
        Some(cmd) => macrovista::run_command(cmd.into(), cli.config_path.as_deref()).await,
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
