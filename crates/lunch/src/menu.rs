//! Menu lookup against the schoolcafe API
//!
//! The API wants the serving date percent-encoded inside the query string
//! (zero-padded month, unpadded day). The response is a JSON object keyed
//! by menu category; we only care about the entrees, which upstream has
//! been known to file under either "ENTREE" or "ENTREES".

use std::collections::HashMap;

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;
use thiserror::Error;

const BASE_URL: &str =
    "https://webapis.schoolcafe.com/api/CalendarView/GetDailyMenuitemsByGrade?SchoolId=";

/// Category keys checked for entrees, in order
const ENTREE_KEYS: [&str; 2] = ["ENTREE", "ENTREES"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("no school on the weekend")]
    NoMenuToday,
}

/// One menu item within a category
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "MenuItemDescription")]
    pub description: String,
}

/// The daily menu, keyed by category name
pub type Menu = HashMap<String, Vec<MenuItem>>;

/// Weekend guard. Runs before any network call.
pub fn school_day(date: NaiveDate) -> Result<NaiveDate, MenuError> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Err(MenuError::NoMenuToday),
        _ => Ok(date),
    }
}

/// Format a date the way the API's query string expects:
/// zero-padded month, unpadded day, '%2F' separators.
pub fn format_serving_date(date: NaiveDate) -> String {
    format!("{:02}%2F{}%2F{}", date.month(), date.day(), date.year())
}

/// Build the daily menu URL for a school, grade and serving date
pub fn menu_url(school_id: &str, grade: &str, serving_date: &str) -> String {
    format!(
        "{}{}&ServingDate={}&ServingLine=Traditional%20Lunch&MealType=Lunch&Grade={}&PersonId=null",
        BASE_URL, school_id, serving_date, grade
    )
}

/// Fetch the daily menu
pub fn fetch_menu(url: &str) -> Result<Menu> {
    satchel_core::http::get_json(url)
}

/// The entree descriptions, across both spellings of the category key
pub fn entrees(menu: &Menu) -> Vec<&str> {
    ENTREE_KEYS
        .iter()
        .filter_map(|key| menu.get(*key))
        .flatten()
        .map(|item| item.description.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_guard_rejects_saturday_and_sunday() {
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        assert_eq!(school_day(saturday), Err(MenuError::NoMenuToday));
        assert_eq!(school_day(sunday), Err(MenuError::NoMenuToday));
    }

    #[test]
    fn test_weekend_guard_passes_weekdays() {
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(school_day(monday), Ok(monday));
    }

    #[test]
    fn test_serving_date_pads_month_not_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_serving_date(date), "03%2F5%2F2026");
    }

    #[test]
    fn test_menu_url() {
        let url = menu_url("12345", "05", "03%2F5%2F2026");
        assert!(url.starts_with(
            "https://webapis.schoolcafe.com/api/CalendarView/GetDailyMenuitemsByGrade?SchoolId=12345"
        ));
        assert!(url.contains("&ServingDate=03%2F5%2F2026"));
        assert!(url.contains("&ServingLine=Traditional%20Lunch"));
        assert!(url.contains("&MealType=Lunch"));
        assert!(url.contains("&Grade=05"));
        assert!(url.ends_with("&PersonId=null"));
    }

    #[test]
    fn test_entrees_reads_both_category_spellings() {
        let json = r#"{
            "ENTREES": [{"MenuItemDescription": "Pizza"}],
            "SIDES": [{"MenuItemDescription": "Carrots"}]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(entrees(&menu), vec!["Pizza"]);

        let json = r#"{"ENTREE": [{"MenuItemDescription": "Tacos"}]}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(entrees(&menu), vec!["Tacos"]);
    }

    #[test]
    fn test_entrees_empty_when_no_entree_category() {
        let json = r#"{"SIDES": [{"MenuItemDescription": "Carrots"}]}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert!(entrees(&menu).is_empty());
    }

    #[test]
    fn test_menu_items_tolerate_extra_fields() {
        let json = r#"{
            "ENTREES": [
                {"MenuItemDescription": "Pizza", "Calories": 300, "Allergens": "wheat"}
            ]
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(entrees(&menu), vec!["Pizza"]);
    }
}
