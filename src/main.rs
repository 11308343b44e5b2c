use std::env;
use anyhow::Context;
use chrono::Utc;
use log::error;
use crate::config::load_config;
use crate::initialization::init;
use crate::logging::setup_logger;

mod config;
mod dinner_time;
mod email;
mod errors;
mod initialization;
mod logging;
mod manager_mail;
mod manager_open_ai;
mod manager_open_weather;
mod menu_request;
mod models;
mod worker;

fn main() -> anyhow::Result<()> {
    let config_path = env::var("CONFIG_PATH").ok();
    let config = load_config(config_path.as_deref())
        .context("failed to load configuration")?;

    let _log_handle = setup_logger(&config.general)?;

    let result = init(&config)
        .and_then(|mgr| worker::run(&config, &mgr, Utc::now()));

    if let Err(e) = result {
        error!("{}", e);
        return Err(e).context("dinner run failed");
    }

    Ok(())
}
