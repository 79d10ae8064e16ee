//! Profile model
//!
//! Single-row user profile with the derived daily calorie budget.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// Biological sex, the only classification the BMR formula uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "female" => Sex::Female,
            _ => Sex::Male,
        }
    }
}

/// Weight goal, applied as an offset on top of BMR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }
}

/// The user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub age: i64,
    pub weight: f64, // kilograms
    pub height: f64, // centimeters
    pub sex: Sex,
    pub goal: Goal,
    /// BMR adjusted by the goal offset, kcal/day
    pub calorie_budget: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: 1,
            age: 0,
            weight: 0.0,
            height: 0.0,
            sex: Sex::Male,
            goal: Goal::Maintain,
            calorie_budget: 0.0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl Profile {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            age: row.get("age")?,
            weight: row.get("weight")?,
            height: row.get("height")?,
            sex: Sex::from_str(row.get::<_, String>("sex")?.as_str()),
            goal: Goal::from_str(row.get::<_, String>("goal")?.as_str()),
            calorie_budget: row.get("calorie_budget")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get the profile (single row table)
    pub fn get(conn: &Connection) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM profile WHERE id = 1")?;

        let result = stmt.query_row([], Self::from_row);
        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace the profile wholesale (upsert)
    pub fn set(
        conn: &Connection,
        age: i64,
        weight: f64,
        height: f64,
        sex: Sex,
        goal: Goal,
        calorie_budget: f64,
    ) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO profile (id, age, weight, height, sex, goal, calorie_budget)
            VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                age = excluded.age,
                weight = excluded.weight,
                height = excluded.height,
                sex = excluded.sex,
                goal = excluded.goal,
                calorie_budget = excluded.calorie_budget,
                updated_at = datetime('now')
            "#,
            params![age, weight, height, sex.as_str(), goal.as_str(), calorie_budget],
        )?;

        Self::get(conn)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }
}
