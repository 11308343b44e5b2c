use std::env;
use std::fs;
use std::str::FromStr;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::models::forecast::{DinnerTarget, Units};

#[derive(Deserialize)]
#[serde(default)]
pub struct LocationParameters {
    pub query: String,
    pub dinner_hour: u32,
    pub units: Units,
}

impl Default for LocationParameters {
    fn default() -> Self {
        Self { query: "Orange,CA,US".to_string(), dinner_hour: DinnerTarget::DEFAULT_HOUR, units: Units::Imperial }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct OpenWeatherParameters {
    pub api_key: String,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct OpenAIParameters {
    pub api_key: String,
    pub model: String,
}

impl Default for OpenAIParameters {
    fn default() -> Self {
        Self { api_key: String::new(), model: "gpt-4.1-mini".to_string() }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct MailParameters {
    pub smtp_user: String,
    pub smtp_password: String,
    pub smtp_endpoint: String,
    pub from: String,
    /// Comma separated list of recipients
    pub to: String,
}

impl Default for MailParameters {
    fn default() -> Self {
        Self {
            smtp_user: String::new(),
            smtp_password: String::new(),
            smtp_endpoint: "smtp.gmail.com".to_string(),
            from: String::new(),
            to: String::new(),
        }
    }
}

impl MailParameters {
    /// Returns the recipients, trimmed and with empty entries removed
    pub fn recipients(&self) -> Vec<String> {
        self.to
            .split(',')
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(|r| r.to_string())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
    pub debug_mode: bool,
}

impl Default for General {
    fn default() -> Self {
        Self { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true, debug_mode: false }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub location: LocationParameters,
    pub open_weather: OpenWeatherParameters,
    pub open_ai: OpenAIParameters,
    pub mail: MailParameters,
    pub general: General,
}

impl Config {
    /// Returns the dinner target given by the configured dinner hour
    pub fn dinner_target(&self) -> Result<DinnerTarget, ConfigError> {
        DinnerTarget::new(self.location.dinner_hour)
    }

    /// Overrides configuration items with whatever the given lookup returns
    ///
    /// # Arguments
    ///
    /// * 'lookup' - returns the value of a named variable, if set
    pub fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) -> Result<(), ConfigError> {
        if let Some(v) = lookup("LOCATION") { self.location.query = v; }
        if let Some(v) = lookup("DINNER_HOUR") { self.location.dinner_hour = parse_var("DINNER_HOUR", &v)?; }
        if let Some(v) = lookup("UNITS") { self.location.units = Units::try_from(v.as_str())?; }
        if let Some(v) = lookup("OPENWEATHER_API_KEY") { self.open_weather.api_key = v; }
        if let Some(v) = lookup("OPENAI_API_KEY") { self.open_ai.api_key = v; }
        if let Some(v) = lookup("OPENAI_MODEL") { self.open_ai.model = v; }
        if let Some(v) = lookup("EMAIL_FROM") { self.mail.from = v; }
        if let Some(v) = lookup("EMAIL_TO") { self.mail.to = v; }
        if let Some(v) = lookup("SMTP_USER") { self.mail.smtp_user = v; }
        if let Some(v) = lookup("SMTP_PASS") { self.mail.smtp_password = v; }
        if let Some(v) = lookup("SMTP_HOST") { self.mail.smtp_endpoint = v; }
        if let Some(v) = lookup("LOG_PATH") { self.general.log_path = Some(v); }
        if let Some(v) = lookup("LOG_LEVEL") { self.general.log_level = parse_var("LOG_LEVEL", &v)?; }
        if let Some(v) = lookup("LOG_TO_STDOUT") { self.general.log_to_stdout = parse_var("LOG_TO_STDOUT", &v)?; }
        if let Some(v) = lookup("DEBUG_MODE") { self.general.debug_mode = parse_var("DEBUG_MODE", &v)?; }

        Ok(())
    }

    /// Checks that everything needed for a run is present, before anything is fetched
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dinner_target()?;

        let required = [
            ("location query", &self.location.query),
            ("OpenWeather api key", &self.open_weather.api_key),
            ("OpenAI api key", &self.open_ai.api_key),
            ("OpenAI model", &self.open_ai.model),
            ("smtp user", &self.mail.smtp_user),
            ("smtp password", &self.mail.smtp_password),
            ("smtp endpoint", &self.mail.smtp_endpoint),
            ("mail sender", &self.mail.from),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name.to_string()));
            }
        }

        if self.mail.recipients().is_empty() {
            return Err(ConfigError::Missing("mail recipients".to_string()));
        }

        Ok(())
    }
}

/// Loads the configuration and returns a struct with all configuration items.
///
/// Built in defaults are overridden by the configuration file, if any, which in turn
/// are overridden by environment variables
///
/// # Arguments
///
/// * 'config_path' - optional path to a toml configuration file
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config: Config = match config_path {
        Some(path) => {
            let toml = fs::read_to_string(path)?;
            toml::from_str(&toml)?
        },
        None => Config::default(),
    };

    config.apply_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    T::from_str(value.trim()).map_err(|_| ConfigError::Invalid(format!("{}={}", name, value)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<String, String>>();

        move |key: &str| map.get(key).cloned()
    }

    fn complete() -> Config {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("OPENWEATHER_API_KEY", "ow"),
            ("OPENAI_API_KEY", "oa"),
            ("EMAIL_FROM", "Dinner Bot <bot@example.com>"),
            ("EMAIL_TO", "a@example.com, b@example.com"),
            ("SMTP_USER", "bot@example.com"),
            ("SMTP_PASS", "secret"),
        ])).unwrap();

        config
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_eq!(config.location.query, "Orange,CA,US");
        assert_eq!(config.location.dinner_hour, 19);
        assert_eq!(config.location.units, Units::Imperial);
        assert_eq!(config.open_ai.model, "gpt-4.1-mini");
        assert_eq!(config.mail.smtp_endpoint, "smtp.gmail.com");
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(!config.general.debug_mode);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml = r#"
            [location]
            query = "Pune,IN"
            units = "metric"

            [general]
            log_level = "debug"
            debug_mode = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.location.query, "Pune,IN");
        assert_eq!(config.location.units, Units::Metric);
        assert_eq!(config.location.dinner_hour, 19);
        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert!(config.general.debug_mode);
        assert_eq!(config.mail.smtp_endpoint, "smtp.gmail.com");
    }

    #[test]
    fn overrides_win_and_complete_config_validates() {
        let mut config = complete();
        config.apply_overrides(lookup(&[("DINNER_HOUR", "18"), ("LOCATION", "Austin,TX,US"), ("DEBUG_MODE", "true")])).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.location.dinner_hour, 18);
        assert_eq!(config.location.query, "Austin,TX,US");
        assert!(config.general.debug_mode);
        assert_eq!(config.mail.recipients(), vec!["a@example.com".to_string(), "b@example.com".to_string()]);
    }

    #[test]
    fn unparsable_override_is_invalid() {
        let mut config = Config::default();

        let err = config.apply_overrides(lookup(&[("DINNER_HOUR", "seven")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = config.apply_overrides(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_credentials_fail_validation() {
        let mut config = complete();
        config.open_ai.api_key = " ".to_string();

        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing configuration: OpenAI api key");
    }

    #[test]
    fn empty_recipient_list_fails_validation() {
        let mut config = complete();
        config.mail.to = " , ,".to_string();

        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "missing configuration: mail recipients");
    }

    #[test]
    fn dinner_hour_out_of_range_fails_validation() {
        let mut config = complete();
        config.location.dinner_hour = 25;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
