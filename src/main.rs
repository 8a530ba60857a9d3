mod adapter;
mod application;
mod domain;
mod infra;
#[cfg(test)]
mod tests;

use crate::infra::{
    app::{create_dashboard, run_console},
    config::AppConfig,
    init_app_state,
    setup::init_tracing
};
use std::env;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match env::var("BASE_CONFIG") {
        Ok(path_config) => AppConfig::from_file(path_config)?,
        Err(_) => AppConfig::default(),
    };
    let _guards = init_tracing(&config)?;
    let state = init_app_state(&config)?;
    info!("Start dashboard...");
    let dashboard = create_dashboard(&state);
    run_console(dashboard, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    Ok(())
}
