pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod sources;
pub mod store;

use crate::core::Indicator;
use crate::resolver::{ResolveMode, Resolver};
use crate::sources::RemoteSource;
use crate::store::FileStore;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A resolved CLI invocation, decoupled from clap so the host (and the
/// integration tests) can drive the app directly.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Show {
        indicator: String,
        mode: ResolveMode,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    Changes {
        indicator: String,
        mode: ResolveMode,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    Export {
        indicator: String,
        mode: ResolveMode,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        output: PathBuf,
    },
    Refresh,
    Indicators,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = Arc::new(FileStore::new(config.cache_path()?)?);
    let remote = RemoteSource::new(
        &config.series_api.base_url,
        Duration::from_secs(config.series_api.timeout_secs),
    )?;
    let resolver = Resolver::new(store, remote);

    match command {
        AppCommand::Show {
            indicator,
            mode,
            from,
            to,
        } => {
            let indicator: Indicator = indicator.parse()?;
            cli::show::run(&resolver, indicator, mode, from, to).await
        }
        AppCommand::Changes {
            indicator,
            mode,
            from,
            to,
        } => {
            let indicator: Indicator = indicator.parse()?;
            cli::changes::run(&resolver, indicator, mode, from, to).await
        }
        AppCommand::Export {
            indicator,
            mode,
            from,
            to,
            output,
        } => {
            let indicator: Indicator = indicator.parse()?;
            cli::export::run(&resolver, indicator, mode, from, to, &output).await
        }
        AppCommand::Refresh => cli::refresh::run(&resolver).await,
        AppCommand::Indicators => {
            cli::indicators::run();
            Ok(())
        }
    }
}
