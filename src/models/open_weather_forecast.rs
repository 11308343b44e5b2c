use serde::Deserialize;

#[derive(Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Deserialize)]
pub struct OwWeather {
    pub description: String,
}

#[derive(Deserialize, Default)]
pub struct OwWind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct OwForecastEntry {
    pub dt: i64,
    pub main: OwMain,
    #[serde(default)]
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub wind: OwWind,
}

#[derive(Deserialize, Default)]
pub struct OwCity {
    pub name: Option<String>,
    pub country: Option<String>,
    /// Shift in seconds from UTC
    pub timezone: Option<i32>,
}

#[derive(Deserialize)]
pub struct OwForecastResponse {
    #[serde(default)]
    pub city: OwCity,
    #[serde(default)]
    pub list: Vec<OwForecastEntry>,
}
