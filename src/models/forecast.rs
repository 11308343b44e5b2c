use chrono::{DateTime, FixedOffset, NaiveTime, Offset, Utc};
use log::warn;
use serde::{Deserialize, Serialize, Serializer};
use crate::errors::ConfigError;

/// Unit system asked from the weather provider, also used for display labels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }

    pub fn temperature_label(&self) -> &'static str {
        match self {
            Units::Imperial => "°F",
            Units::Metric => "°C",
        }
    }

    pub fn speed_label(&self) -> &'static str {
        match self {
            Units::Imperial => "mph",
            Units::Metric => "m/s",
        }
    }
}

impl TryFrom<&str> for Units {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "imperial" => Ok(Units::Imperial),
            "metric" => Ok(Units::Metric),
            _ => Err(ConfigError::Invalid(format!("unknown units '{}', expected imperial or metric", value))),
        }
    }
}

/// One discrete forecast slot as reported by the weather provider
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ForecastSample {
    /// Seconds since the Unix epoch
    pub instant: i64,
    #[serde(serialize_with = "compact_number")]
    pub temperature: f64,
    #[serde(serialize_with = "compact_number")]
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub condition_text: String,
    #[serde(serialize_with = "compact_number")]
    pub wind_speed: f64,
}

/// Location the forecast was fetched for
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LocationContext {
    pub query: String,
    pub name: Option<String>,
    /// Standing offset from UTC at fetch time, already DST adjusted by the provider
    pub utc_offset_seconds: i32,
}

impl LocationContext {
    /// Returns the offset as a chrono FixedOffset.
    ///
    /// An offset outside what chrono accepts (±24h) is treated as UTC
    pub fn fixed_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| {
            warn!("utc offset {} for '{}' is out of range, using UTC", self.utc_offset_seconds, self.query);
            Utc.fix()
        })
    }

    /// Human readable location, the resolved provider name if any otherwise the query
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.query)
    }
}

/// The configured local wall clock hour dinner is served at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DinnerTarget {
    time: NaiveTime,
}

impl DinnerTarget {
    pub const DEFAULT_HOUR: u32 = 19;

    /// Returns a new DinnerTarget
    ///
    /// # Arguments
    ///
    /// * 'target_local_hour' - hour of the day, 0-23
    pub fn new(target_local_hour: u32) -> Result<Self, ConfigError> {
        NaiveTime::from_hms_opt(target_local_hour, 0, 0)
            .map(|time| Self { time })
            .ok_or_else(|| ConfigError::Invalid(format!("dinner hour {} is not within 0-23", target_local_hour)))
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }
}

impl Default for DinnerTarget {
    fn default() -> Self {
        Self { time: NaiveTime::from_hms_opt(Self::DEFAULT_HOUR, 0, 0).unwrap_or_default() }
    }
}

/// The sample chosen to represent dinner time, with its resolved local time
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedForecast {
    pub sample: ForecastSample,
    /// Sample time in location local time
    pub local_time: String,
    /// Sample time as reported by the provider, seconds since the Unix epoch
    pub instant: i64,
    /// The dinner target in location local time
    pub target: DateTime<FixedOffset>,
    pub distance_seconds: i64,
    /// True if no candidate was available and the first raw sample was used instead
    pub fallback: bool,
}

/// Writes integral floats without a fractional part so 72.0 reads as 72
fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
