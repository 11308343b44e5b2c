use chrono::DateTime;
use serde::Serialize;
use crate::models::forecast::{ForecastSample, LocationContext, SelectedForecast, Units};

const CHEF_PERSONA: &str = "You are a professional Indian home chef specializing in HEALTHY Jain vegetarian cooking.";

/// Dietary and style rules, identical for every request
pub const RULE_SET: &[&str] = &[
    "Vegetarian only.",
    "NO onion, NO garlic.",
    "Avoid root vegetables: potato, carrot, beet, radish, sweet potato, yam.",
    "Use hing, ginger, tomatoes, herbs, spices for flavor.",
    "Healthy bias: steaming, simmering, roasting, light sautéing.",
    "Avoid deep frying.",
    "Moderate sugar; desserts should be lighter in hot weather.",
    "Recipes must be realistic, cookable, and weeknight-appropriate.",
    "Tone: polished, professional, cookbook-quality.",
    "Do NOT mention AI, disclaimers, or substitutions unless required for Jain compliance.",
];

const COURSES: &[&str] = &[
    "1 Appetizer",
    "1 Main (include a simple side if appropriate)",
    "1 Dessert",
];

/// How the menu should follow the weather, left to the generation step to apply
const WEATHER_POLICY: &[&str] = &[
    "Cold / windy / rainy → warm, comforting foods",
    "Hot / humid → lighter, cooling foods",
    "Mild → balanced, healthy meal",
];

const CLOSING_RULES: &[&str] = &[
    "No prohibited ingredients.",
    "Clear steps.",
    "Common household measurements.",
    "Professional tone only.",
];

/// The exact structure the generated menu must follow
pub const OUTPUT_SCHEMA: &str = r#"{
  "title": "string",
  "weather_fit_summary": "string",
  "menu": {
    "appetizer": {
      "name": "string",
      "time_minutes": integer,
      "servings": integer,
      "ingredients": ["string"],
      "steps": ["string"],
      "plating_note": "string"
    },
    "main": {
      "name": "string",
      "time_minutes": integer,
      "servings": integer,
      "ingredients": ["string"],
      "steps": ["string"],
      "side": {
        "name": "string",
        "time_minutes": integer,
        "ingredients": ["string"],
        "steps": ["string"]
      },
      "plating_note": "string"
    },
    "dessert": {
      "name": "string",
      "time_minutes": integer,
      "servings": integer,
      "ingredients": ["string"],
      "steps": ["string"],
      "plating_note": "string"
    }
  },
  "shopping_list": {
    "produce": ["string"],
    "pantry": ["string"],
    "dairy": ["string"],
    "spices": ["string"]
  },
  "jain_compliance_notes": ["string"]
}"#;

#[derive(Serialize)]
struct WeatherContext<'a> {
    location: &'a str,
    forecast_time_local: &'a str,
    forecast_time_utc: String,
    utc_offset_seconds: i32,
    units: Units,
    #[serde(flatten)]
    sample: &'a ForecastSample,
}

/// A complete, schema constrained menu generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub rule_set: &'static [&'static str],
    /// The dinner time weather as pretty printed json
    pub context: String,
    pub output_schema: &'static str,
}

impl GenerationRequest {
    /// Builds the request for the selected dinner time forecast
    ///
    /// # Arguments
    ///
    /// * 'selected' - the forecast picked for dinner time
    /// * 'location' - location the forecast belongs to
    /// * 'units' - units the forecast values are given in
    pub fn new(selected: &SelectedForecast, location: &LocationContext, units: Units) -> Self {
        let forecast_time_utc = DateTime::from_timestamp(selected.instant, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| selected.instant.to_string());

        let context = WeatherContext {
            location: location.display_name(),
            forecast_time_local: &selected.local_time,
            forecast_time_utc,
            utc_offset_seconds: location.utc_offset_seconds,
            units,
            sample: &selected.sample,
        };

        // Plain data with string keys, serialization can not fail
        let context = serde_json::to_string_pretty(&context).unwrap_or_default();

        Self { rule_set: RULE_SET, context, output_schema: OUTPUT_SCHEMA }
    }

    /// Persona and rule set
    pub fn system_prompt(&self) -> String {
        let mut prompt = format!("{}\nSTRICT RULES:\n", CHEF_PERSONA);
        prompt += &bullets(self.rule_set, "- ");

        prompt
    }

    /// Weather context, wanted courses, weather policy and the output schema
    pub fn user_prompt(&self) -> String {
        let mut prompt = format!("Dinner time weather:\n{}\n\n", self.context);

        prompt += "Create a COMPLETE Indian Jain dinner menu with:\n";
        prompt += &bullets(COURSES, "• ");
        prompt += "\nAdjust the menu to the weather:\n";
        prompt += &bullets(WEATHER_POLICY, "- ");
        prompt += "\nReturn STRICT JSON ONLY in this exact structure:\n\n";
        prompt += self.output_schema;
        prompt += "\n\nRULES:\n";
        prompt += &bullets(CLOSING_RULES, "- ");

        prompt
    }
}

fn bullets(lines: &[&str], marker: &str) -> String {
    lines.iter().map(|l| format!("{}{}\n", marker, l)).collect()
}
