use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("error in communication with OpenWeather: {0}")]
    OpenWeather(String),
    #[error("malformed OpenWeather document: {0}")]
    Document(String),
}

impl From<ureq::Error> for WeatherError {
    fn from(e: ureq::Error) -> Self {
        WeatherError::OpenWeather(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> Self {
        WeatherError::Document(e.to_string())
    }
}
