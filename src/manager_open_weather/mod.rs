pub mod errors;

use std::time::Duration;
use log::{info, warn};
use ureq::Agent;
use crate::config::LocationParameters;
use crate::manager_open_weather::errors::WeatherError;
use crate::models::forecast::{ForecastSample, LocationContext, Units};
use crate::models::open_weather_forecast::OwForecastResponse;

const REQUEST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Forecast window as delivered by the provider, ordered by time ascending
pub struct Forecast {
    pub location: LocationContext,
    pub samples: Vec<ForecastSample>,
}

/// Struct for fetching 5 day / 3 hour forecasts from OpenWeather
pub struct OpenWeather {
    agent: Agent,
    api_key: String,
    query: String,
    units: Units,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'api_key' - OpenWeather api key
    /// * 'location' - what location to fetch forecasts for and in what units
    pub fn new(api_key: &str, location: &LocationParameters) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self {
            agent,
            api_key: api_key.to_string(),
            query: location.query.to_string(),
            units: location.units,
        }
    }

    /// Retrieves the forecast window for the configured location
    ///
    pub fn get_forecast(&self) -> Result<Forecast, WeatherError> {
        info!("fetching forecast for '{}'", self.query);

        let json = self.agent
            .get(REQUEST_URL)
            .query("q", &self.query)
            .query("appid", &self.api_key)
            .query("units", self.units.as_str())
            .call()?
            .body_mut()
            .read_to_string()?;

        let forecast = parse_forecast(&self.query, &json)?;
        info!("received {} forecast samples, utc offset {}s",
            forecast.samples.len(), forecast.location.utc_offset_seconds);

        Ok(forecast)
    }
}

/// Transforms a raw OpenWeather forecast document to a location and its samples.
///
/// A missing timezone is taken as UTC, a missing weather description as "unknown"
///
/// # Arguments
///
/// * 'query' - the location query the document was fetched for
/// * 'json' - the forecast document
pub fn parse_forecast(query: &str, json: &str) -> Result<Forecast, WeatherError> {
    let raw: OwForecastResponse = serde_json::from_str(json)?;

    let utc_offset_seconds = raw.city.timezone.unwrap_or_else(|| {
        warn!("no timezone reported for '{}', assuming UTC", query);
        0
    });

    let name = match (raw.city.name, raw.city.country) {
        (Some(name), Some(country)) => Some(format!("{}, {}", name, country)),
        (Some(name), None) => Some(name),
        _ => None,
    };

    let samples = raw.list
        .into_iter()
        .map(|e| ForecastSample {
            instant: e.dt,
            temperature: e.main.temp,
            feels_like: e.main.feels_like,
            humidity_pct: e.main.humidity.min(100),
            condition_text: e.weather
                .into_iter()
                .next()
                .map(|w| w.description)
                .unwrap_or_else(|| "unknown".to_string()),
            wind_speed: e.wind.speed,
        })
        .collect::<Vec<ForecastSample>>();

    Ok(Forecast {
        location: LocationContext { query: query.to_string(), name, utc_offset_seconds },
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
      "cod": "200",
      "cnt": 2,
      "list": [
        {
          "dt": 1760486400,
          "main": { "temp": 81.3, "feels_like": 80.6, "temp_min": 79.0, "humidity": 35 },
          "weather": [ { "id": 800, "main": "Clear", "description": "clear sky" } ],
          "wind": { "speed": 6.2, "deg": 240 },
          "dt_txt": "2025-10-15 00:00:00"
        },
        {
          "dt": 1760497200,
          "main": { "temp": 72, "feels_like": 71, "humidity": 54 },
          "weather": [],
          "dt_txt": "2025-10-15 03:00:00"
        }
      ],
      "city": { "id": 5379513, "name": "Orange", "country": "US", "timezone": -25200 }
    }"#;

    #[test]
    fn parses_samples_and_location() {
        let forecast = parse_forecast("Orange,CA,US", FORECAST_JSON).unwrap();

        assert_eq!(forecast.location.utc_offset_seconds, -25200);
        assert_eq!(forecast.location.display_name(), "Orange, US");
        assert_eq!(forecast.samples.len(), 2);
        assert_eq!(forecast.samples[0].instant, 1760486400);
        assert_eq!(forecast.samples[0].condition_text, "clear sky");
        assert_eq!(forecast.samples[0].humidity_pct, 35);
        assert_eq!(forecast.samples[0].wind_speed, 6.2);
    }

    #[test]
    fn missing_description_and_wind_get_defaults() {
        let forecast = parse_forecast("Orange,CA,US", FORECAST_JSON).unwrap();

        assert_eq!(forecast.samples[1].condition_text, "unknown");
        assert_eq!(forecast.samples[1].wind_speed, 0.0);
        assert_eq!(forecast.samples[1].temperature, 72.0);
    }

    #[test]
    fn missing_timezone_defaults_to_utc() {
        let forecast = parse_forecast("Nowhere", r#"{ "list": [], "city": { "name": "Nowhere" } }"#).unwrap();

        assert_eq!(forecast.location.utc_offset_seconds, 0);
        assert_eq!(forecast.location.display_name(), "Nowhere");
        assert!(forecast.samples.is_empty());
    }

    #[test]
    fn broken_document_is_document_error() {
        let err = parse_forecast("Orange,CA,US", "<html>").err().unwrap();
        assert!(matches!(err, WeatherError::Document(_)));
    }
}
