use crate::models::forecast::{SelectedForecast, Units};
use crate::models::menu::{Course, DinnerMenu};

/// Returns the mail subject, dated with the dinner day
///
/// # Arguments
///
/// * 'selected' - the forecast picked for dinner time
pub fn subject(selected: &SelectedForecast) -> String {
    format!("Healthy Jain Dinner – {}", selected.target.format("%A, %B %d"))
}

/// Formats the plain text mail body with weather, courses, shopping list and compliance notes
///
/// # Arguments
///
/// * 'selected' - the forecast picked for dinner time
/// * 'units' - units the forecast is given in
/// * 'menu' - the generated menu
pub fn format_body(selected: &SelectedForecast, units: Units, menu: &DinnerMenu) -> String {
    let w = &selected.sample;
    let t = units.temperature_label();

    let mut lines: Vec<String> = Vec::new();
    lines.push(menu.title.clone());
    lines.push(String::new());
    lines.push(format!("Weather ({}):", selected.local_time));
    lines.push(format!("- Temp: {}{} (feels {}{})", w.temperature, t, w.feels_like, t));
    lines.push(format!("- Conditions: {}", w.condition_text));
    lines.push(format!("- Wind: {} {} | Humidity: {}%", w.wind_speed, units.speed_label(), w.humidity_pct));
    if selected.fallback {
        lines.push("- Note: no forecast was available for dinner time, nearest available forecast used".to_string());
    }
    lines.push(String::new());
    lines.push(menu.weather_fit_summary.clone());

    push_course(&mut lines, "APPETIZER", &menu.menu.appetizer);

    let main = &menu.menu.main;
    lines.push(section("MAIN"));
    lines.push(format!("{} ({} min, serves {})", main.name, main.time_minutes, main.servings));
    push_list(&mut lines, "Ingredients:", &main.ingredients);
    push_list(&mut lines, "Steps:", &main.steps);
    if let Some(side) = &main.side {
        lines.push(String::new());
        lines.push("Side:".to_string());
        lines.push(format!("{} ({} min)", side.name, side.time_minutes));
        push_list(&mut lines, "Ingredients:", &side.ingredients);
        push_list(&mut lines, "Steps:", &side.steps);
    }
    lines.push(format!("Plating: {}", main.plating_note));

    push_course(&mut lines, "DESSERT", &menu.menu.dessert);

    lines.push(section("SHOPPING LIST"));
    for (category, items) in menu.shopping_list.categories() {
        push_list(&mut lines, &format!("{}:", category), items);
    }

    lines.push(section("JAIN COMPLIANCE"));
    for note in &menu.jain_compliance_notes {
        lines.push(format!("- {}", note));
    }

    lines.join("\n")
}

fn push_course(lines: &mut Vec<String>, title: &str, course: &Course) {
    lines.push(section(title));
    lines.push(format!("{} ({} min, serves {})", course.name, course.time_minutes, course.servings));
    push_list(lines, "Ingredients:", &course.ingredients);
    push_list(lines, "Steps:", &course.steps);
    lines.push(format!("Plating: {}", course.plating_note));
}

fn push_list(lines: &mut Vec<String>, caption: &str, items: &[String]) {
    lines.push(caption.to_string());
    for i in items {
        lines.push(format!("- {}", i));
    }
}

fn section(title: &str) -> String {
    let rule = "=".repeat(title.chars().count());
    format!("\n{}\n{}\n{}", rule, title, rule)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use super::*;
    use crate::dinner_time::tests::sample;
    use crate::models::menu::tests::MENU_JSON;

    fn selected(fallback: bool) -> SelectedForecast {
        SelectedForecast {
            sample: sample(1_760_490_000, 72.0, "light rain"),
            local_time: "2025-10-14 19:00 -07:00".to_string(),
            instant: 1_760_490_000,
            target: FixedOffset::west_opt(7 * 3600).unwrap().with_ymd_and_hms(2025, 10, 14, 19, 0, 0).unwrap(),
            distance_seconds: 0,
            fallback,
        }
    }

    #[test]
    fn subject_is_dated_with_dinner_day() {
        assert_eq!(subject(&selected(false)), "Healthy Jain Dinner – Tuesday, October 14");
    }

    #[test]
    fn body_lists_every_section() {
        let menu = DinnerMenu::parse(MENU_JSON).unwrap();
        let body = format_body(&selected(false), Units::Imperial, &menu);

        assert!(body.starts_with("Monsoon Comfort Dinner\n"));
        assert!(body.contains("- Temp: 72°F (feels 72°F)"));
        assert!(body.contains("- Wind: 4 mph | Humidity: 50%"));
        assert!(body.contains("\n=========\nAPPETIZER\n=========\n"));
        assert!(body.contains("Steamed Moong Dal Dhokla (30 min, serves 4)"));
        assert!(body.contains("Side:\nJeera Rice (20 min)"));
        assert!(body.contains("Spices:\n- hing\n- cumin\n- saffron"));
        assert!(body.ends_with("- No onion, garlic or root vegetables used."));
        assert!(!body.contains("Note:"));
    }

    #[test]
    fn fallback_selection_is_noted() {
        let menu = DinnerMenu::parse(MENU_JSON).unwrap();
        let body = format_body(&selected(true), Units::Metric, &menu);

        assert!(body.contains("- Temp: 72°C"));
        assert!(body.contains("- Note: no forecast was available for dinner time"));
    }
}
