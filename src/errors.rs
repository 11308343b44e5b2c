use thiserror::Error;
use crate::manager_mail::errors::MailError;
use crate::manager_open_ai::errors::GenerationError;
use crate::manager_open_weather::errors::WeatherError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing configuration: {0}")]
    Missing(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Any error that ends a run
#[derive(Error, Debug)]
pub enum DinnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Weather(#[from] WeatherError),
    #[error("no forecast samples returned for '{0}'")]
    NoForecast(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Mail(#[from] MailError),
}
