use log::info;
use crate::config::Config;
use crate::errors::DinnerError;
use crate::manager_mail::Mail;
use crate::manager_open_ai::OpenAI;
use crate::manager_open_weather::OpenWeather;

/// Managers for the external services a run talks to
pub struct Mgr {
    pub open_weather: OpenWeather,
    pub open_ai: OpenAI,
    pub mail: Mail,
}

/// Initializes and returns the service managers given a validated configuration
///
/// # Arguments
///
/// * 'config' - the configuration to build managers from
pub fn init(config: &Config) -> Result<Mgr, DinnerError> {
    info!("dinnercast version: {}", env!("CARGO_PKG_VERSION"));
    if config.general.debug_mode {
        info!("running in debug mode, no mail will be sent");
    }

    let open_weather = OpenWeather::new(&config.open_weather.api_key, &config.location);
    let open_ai = OpenAI::new(&config.open_ai);
    let mail = Mail::new(&config.mail)?;

    Ok(Mgr { open_weather, open_ai, mail })
}
