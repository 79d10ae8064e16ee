//! Logged Food model
//!
//! One row per food the user logged against a meal slot. Each row embeds a
//! copy of the catalog entry's per-unit nutrition so totals stay correct
//! even if the catalog data changes later.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;
use super::Nutrition;

/// Meal slot enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots, in display order
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lunch" => MealSlot::Lunch,
            "dinner" => MealSlot::Dinner,
            _ => MealSlot::Breakfast,
        }
    }
}

/// A logged food entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFood {
    pub id: i64,
    pub food_name: String,
    pub image: String,
    /// Per-unit nutrition copied from the catalog at log time
    pub nutrition: Nutrition,
    pub quantity: i64,
    pub meal: MealSlot,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a logged food entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedFoodCreate {
    pub food_name: String,
    pub image: String,
    pub nutrition: Nutrition,
    pub quantity: i64,
    pub meal: MealSlot,
}

impl LoggedFood {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            food_name: row.get("food_name")?,
            image: row.get("image")?,
            nutrition: Nutrition {
                calories: row.get("calories")?,
                protein: row.get("protein")?,
                carbs: row.get("carbs")?,
                fat: row.get("fat")?,
            },
            quantity: row.get("quantity")?,
            meal: MealSlot::from_str(row.get::<_, String>("meal")?.as_str()),
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Insert a new logged food entry
    pub fn create(conn: &Connection, data: &LoggedFoodCreate) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO logged_foods (
                food_name, image, calories, protein, carbs, fat, quantity, meal
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                data.food_name,
                data.image,
                data.nutrition.calories,
                data.nutrition.protein,
                data.nutrition.carbs,
                data.nutrition.fat,
                data.quantity,
                data.meal.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a logged food entry by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM logged_foods WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all logged food entries in insertion order
    pub fn list_all(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM logged_foods ORDER BY id")?;

        let entries = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Replace the quantity of an entry; returns None if the id is unknown
    pub fn set_quantity(conn: &Connection, id: i64, quantity: i64) -> DbResult<Option<Self>> {
        conn.execute(
            "UPDATE logged_foods SET quantity = ?1, updated_at = datetime('now') WHERE id = ?2",
            params![quantity, id],
        )?;

        Self::get_by_id(conn, id)
    }

    /// Delete a logged food entry
    /// Returns Ok(true) if deleted, Ok(false) if not found
    pub fn delete(conn: &Connection, id: i64) -> DbResult<bool> {
        let rows = conn.execute("DELETE FROM logged_foods WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    /// Delete every logged food entry, returning how many were removed
    pub fn clear(conn: &Connection) -> DbResult<usize> {
        let rows = conn.execute("DELETE FROM logged_foods", [])?;
        Ok(rows)
    }

    /// Nutrition actually consumed: per-unit values scaled by quantity
    pub fn consumed(&self) -> Nutrition {
        self.nutrition.scale(self.quantity as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, Database};

    fn test_db() -> Database {
        let db = Database::memory().unwrap();
        db.with_conn(|conn| migrations::run_migrations(conn)).unwrap();
        db
    }

    fn chicken(quantity: i64, meal: MealSlot) -> LoggedFoodCreate {
        LoggedFoodCreate {
            food_name: "Chicken Breast".to_string(),
            image: "chicken_breast".to_string(),
            nutrition: Nutrition {
                calories: 165.0,
                protein: 31.0,
                carbs: 0.0,
                fat: 3.6,
            },
            quantity,
            meal,
        }
    }

    #[test]
    fn test_create_and_list_round_trips() {
        let db = test_db();
        let conn = db.get_conn().unwrap();

        let created = LoggedFood::create(&conn, &chicken(2, MealSlot::Lunch)).unwrap();
        let listed = LoggedFood::list_all(&conn).unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(listed[0].meal, MealSlot::Lunch);
        assert_eq!(listed[0].quantity, 2);
        assert_eq!(listed[0].nutrition.calories, 165.0);
    }

    #[test]
    fn test_consumed_scales_by_quantity() {
        let db = test_db();
        let conn = db.get_conn().unwrap();

        let entry = LoggedFood::create(&conn, &chicken(2, MealSlot::Lunch)).unwrap();
        let consumed = entry.consumed();
        assert_eq!(consumed.calories, 330.0);
        assert_eq!(consumed.protein, 62.0);
        assert_eq!(consumed.carbs, 0.0);
        assert!((consumed.fat - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_none() {
        let db = test_db();
        let conn = db.get_conn().unwrap();

        let updated = LoggedFood::set_quantity(&conn, 999, 3).unwrap();
        assert!(updated.is_none());
    }

    #[test]
    fn test_delete_and_clear() {
        let db = test_db();
        let conn = db.get_conn().unwrap();

        let a = LoggedFood::create(&conn, &chicken(1, MealSlot::Breakfast)).unwrap();
        LoggedFood::create(&conn, &chicken(1, MealSlot::Dinner)).unwrap();

        assert!(LoggedFood::delete(&conn, a.id).unwrap());
        assert!(!LoggedFood::delete(&conn, a.id).unwrap());
        assert_eq!(LoggedFood::clear(&conn).unwrap(), 1);
        assert!(LoggedFood::list_all(&conn).unwrap().is_empty());
    }
}
