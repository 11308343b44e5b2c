use serde::Deserialize;
use crate::manager_open_ai::errors::GenerationError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Course {
    pub name: String,
    pub time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub plating_note: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Side {
    pub name: String,
    pub time_minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MainCourse {
    pub name: String,
    pub time_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub side: Option<Side>,
    pub plating_note: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Courses {
    pub appetizer: Course,
    pub main: MainCourse,
    pub dessert: Course,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShoppingList {
    pub produce: Vec<String>,
    pub pantry: Vec<String>,
    pub dairy: Vec<String>,
    pub spices: Vec<String>,
}

impl ShoppingList {
    /// Categories in display order
    pub fn categories(&self) -> [(&'static str, &Vec<String>); 4] {
        [
            ("Produce", &self.produce),
            ("Pantry", &self.pantry),
            ("Dairy", &self.dairy),
            ("Spices", &self.spices),
        ]
    }
}

/// A generated dinner menu, mirrors the output schema handed to the generation service
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DinnerMenu {
    pub title: String,
    pub weather_fit_summary: String,
    pub menu: Courses,
    pub shopping_list: ShoppingList,
    pub jain_compliance_notes: Vec<String>,
}

impl DinnerMenu {
    /// Parses and validates a generated payload.
    ///
    /// Unknown fields, missing fields and wrong types are rejected by serde, blank names
    /// and courses without steps are rejected afterwards
    ///
    /// # Arguments
    ///
    /// * 'text' - the raw text returned by the generation service
    pub fn parse(text: &str) -> Result<DinnerMenu, GenerationError> {
        let menu: DinnerMenu = serde_json::from_str(text.trim())
            .map_err(|e| GenerationError::Schema(e.to_string()))?;

        menu.validate()?;

        Ok(menu)
    }

    fn validate(&self) -> Result<(), GenerationError> {
        if self.title.trim().is_empty() {
            return Err(GenerationError::Schema("title is empty".to_string()));
        }

        let courses = [
            ("appetizer", &self.menu.appetizer.name, &self.menu.appetizer.steps),
            ("main", &self.menu.main.name, &self.menu.main.steps),
            ("dessert", &self.menu.dessert.name, &self.menu.dessert.steps),
        ];
        for (course, name, steps) in courses {
            if name.trim().is_empty() {
                return Err(GenerationError::Schema(format!("{} has no name", course)));
            }
            if steps.is_empty() {
                return Err(GenerationError::Schema(format!("{} has no steps", course)));
            }
        }

        Ok(())
    }
}
