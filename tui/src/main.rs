use std::fs::File;

use anyhow::{anyhow, Context, Result};
use env_logger::{Env, Target};

mod app;
mod config;
mod state;
mod ui;

use config::{builder, json, model::ConfigDraft};
use state::session::ExplorerState;

fn init_logging(draft: &ConfigDraft) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    // the terminal belongs to the UI, without a log file records are dropped
    match &draft.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file '{}'", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let draft = match json::resolve_from_env() {
        Some(path) => json::load(&path)?,
        None => ConfigDraft::default(),
    };

    init_logging(&draft)?;

    let config = builder::build(&draft).map_err(|e| anyhow!("invalid config: {e}"))?;
    log::info!(model:% = config.model(), range:? = config.range; "starting explorer");

    let state = ExplorerState::new(config).context("cannot prepare the datasets")?;
    app::run::run(state)
}
