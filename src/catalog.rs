//! Static food catalog
//!
//! Reference nutrition data grouped by category. Seeded at compile time and
//! never mutated; logged foods embed a copy of the values they need.

use serde::Serialize;

use crate::models::Nutrition;

/// A catalog food with per-unit nutrition facts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    /// Image resource handle, resolved by the presentation layer
    pub image: &'static str,
    /// kcal per unit
    pub calories: i64,
    /// grams per unit
    pub protein: f64,
    /// grams per unit
    pub carbs: f64,
    /// grams per unit
    pub fat: f64,
}

impl CatalogEntry {
    /// Per-unit nutrition facts as a Nutrition value
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories as f64,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

macro_rules! entry {
    ($name:expr, $image:expr, $calories:expr, $protein:expr, $carbs:expr, $fat:expr) => {
        CatalogEntry {
            name: $name,
            image: $image,
            calories: $calories,
            protein: $protein,
            carbs: $carbs,
            fat: $fat,
        }
    };
}

const DRINKS: &[CatalogEntry] = &[
    entry!("Water", "water", 0, 0.0, 0.0, 0.0),
    entry!("Green Tea", "green_tea", 2, 0.0, 0.0, 0.0),
    entry!("Protein Shake", "protein_shake", 150, 25.0, 5.0, 2.0),
];

const VEGETABLES: &[CatalogEntry] = &[
    entry!("Broccoli", "broccoli", 55, 3.7, 11.2, 0.6),
    entry!("Spinach", "spinach", 23, 2.9, 3.6, 0.4),
    entry!("Carrots", "carrots", 41, 0.9, 10.0, 0.2),
];

const CARBS: &[CatalogEntry] = &[
    entry!("Brown Rice", "brown_rice", 216, 5.0, 44.8, 1.8),
    entry!("Pasta", "pasta", 219, 5.0, 46.1, 2.0),
    entry!("Oats", "oats", 150, 5.0, 27.0, 3.0),
    entry!("Sweet Potato", "sweet_potato", 86, 1.6, 20.1, 0.1),
];

const FRUITS: &[CatalogEntry] = &[
    entry!("Banana", "banana", 89, 1.1, 23.0, 0.3),
    entry!("Apple", "apple", 52, 0.3, 14.0, 0.2),
    entry!("Berries", "berries", 57, 0.7, 14.5, 0.3),
];

const PROTEIN: &[CatalogEntry] = &[
    entry!("Chicken Breast", "chicken_breast", 165, 31.0, 0.0, 3.6),
    entry!("Tofu", "tofu", 76, 8.0, 1.9, 4.8),
    entry!("Eggs", "eggs", 155, 13.0, 1.1, 11.0),
];

const SNACKS: &[CatalogEntry] = &[
    entry!("Nuts", "nuts", 607, 20.0, 21.0, 54.0),
    entry!("Granola Bar", "granola_bar", 120, 3.0, 18.0, 4.0),
    entry!("Greek Yogurt", "greek_yogurt", 59, 10.0, 3.6, 0.4),
    entry!("Banana", "banana", 89, 1.1, 23.0, 0.3),
    entry!("Apple", "apple", 52, 0.3, 14.0, 0.2),
    entry!("Berries", "berries", 57, 0.7, 14.5, 0.3),
];

const PRE_WORKOUT: &[CatalogEntry] = &[
    entry!("Banana", "banana", 89, 1.1, 23.0, 0.3),
    entry!("Protein Shake", "protein_shake", 150, 25.0, 5.0, 2.0),
    entry!("Oats", "oats", 150, 5.0, 27.0, 3.0),
];

const POST_WORKOUT: &[CatalogEntry] = &[
    entry!("Protein Shake", "protein_shake", 150, 25.0, 5.0, 2.0),
    entry!("Chicken & Rice", "chicken_and_rice", 400, 40.0, 50.0, 5.0),
];

/// Categories in display order with their entries
const CATEGORIES: &[(&str, &[CatalogEntry])] = &[
    ("Drinks", DRINKS),
    ("Vegetables", VEGETABLES),
    ("Carbs", CARBS),
    ("Fruits", FRUITS),
    ("Protein", PROTEIN),
    ("Snacks", SNACKS),
    ("Pre-Workout", PRE_WORKOUT),
    ("Post-Workout", POST_WORKOUT),
];

/// Category names in display order
pub fn categories() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// Entries for a category; empty for an unknown category name
pub fn entries(category: &str) -> &'static [CatalogEntry] {
    CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// Find an entry by food name, searching categories in display order
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATEGORIES
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_listed_in_order() {
        let names = categories();
        assert_eq!(names.first(), Some(&"Drinks"));
        assert_eq!(names.last(), Some(&"Post-Workout"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_entries_by_category() {
        let protein = entries("Protein");
        assert_eq!(protein.len(), 3);
        assert_eq!(protein[0].name, "Chicken Breast");

        assert!(entries("vegetables").len() == 3); // case-insensitive
        assert!(entries("Desserts").is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let chicken = find("chicken breast").unwrap();
        assert_eq!(chicken.calories, 165);
        assert_eq!(chicken.protein, 31.0);
        assert!(find("Pizza").is_none());
    }

    #[test]
    fn test_nutrition_conversion() {
        let nuts = find("Nuts").unwrap().nutrition();
        assert_eq!(nuts.calories, 607.0);
        assert_eq!(nuts.fat, 54.0);
    }
}
