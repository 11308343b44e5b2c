pub mod forecast;
pub mod menu;
pub mod open_ai_responses;
pub mod open_weather_forecast;
