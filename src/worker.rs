use chrono::{DateTime, Utc};
use log::info;
use crate::config::Config;
use crate::dinner_time::{select_dinner_forecast, upcoming_samples};
use crate::email::{format_body, subject};
use crate::errors::DinnerError;
use crate::initialization::Mgr;
use crate::menu_request::GenerationRequest;

/// Runs the job once: fetch forecast, select dinner time, generate the menu and mail it.
///
/// Every step is attempted exactly once and any failure ends the run before the mail is sent
///
/// # Arguments
///
/// * 'config' - the validated configuration
/// * 'mgr' - the service managers
/// * 'now' - the instant the run is for
pub fn run(config: &Config, mgr: &Mgr, now: DateTime<Utc>) -> Result<(), DinnerError> {
    let target = config.dinner_target()?;

    let forecast = mgr.open_weather.get_forecast()?;
    let candidates = upcoming_samples(&forecast.samples, now);

    let selected = select_dinner_forecast(&candidates, &forecast.samples, &forecast.location, target, now)
        .ok_or_else(|| DinnerError::NoForecast(forecast.location.query.clone()))?;
    info!("selected forecast at {} for dinner at {}, {}s off target",
        selected.local_time, selected.target.format("%Y-%m-%d %H:%M %:z"), selected.distance_seconds);

    let request = GenerationRequest::new(&selected, &forecast.location, config.location.units);
    let menu = mgr.open_ai.generate_menu(&request)?;
    info!("received menu '{}'", menu.title);

    let subject = subject(&selected);
    let body = format_body(&selected, config.location.units, &menu);

    if config.general.debug_mode {
        info!("debug mode, mail not sent\n{}\n\n{}", subject, body);
    } else {
        mgr.mail.send_mail(subject, body)?;
    }

    Ok(())
}
