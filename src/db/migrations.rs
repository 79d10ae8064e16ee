//! Database migrations
//!
//! Schema creation and migration logic.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    // Create migrations table if it doesn't exist
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    // Get current version
    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    // Run migrations
    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: Initial schema
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- PROFILE
        -- Single-row user profile, id pinned to 1
        -- ============================================
        CREATE TABLE profile (
            id INTEGER PRIMARY KEY CHECK(id = 1),
            age INTEGER NOT NULL DEFAULT 0,
            weight REAL NOT NULL DEFAULT 0,       -- kilograms
            height REAL NOT NULL DEFAULT 0,       -- centimeters
            sex TEXT NOT NULL CHECK(sex IN ('male', 'female')) DEFAULT 'male',
            goal TEXT NOT NULL CHECK(goal IN ('lose', 'maintain', 'gain')) DEFAULT 'maintain',

            -- Derived from the fields above, rewritten on every profile update
            calorie_budget REAL NOT NULL DEFAULT 0,

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- ============================================
        -- LOGGED FOODS
        -- What was actually consumed, one row per log action
        -- ============================================
        CREATE TABLE logged_foods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            food_name TEXT NOT NULL,
            image TEXT NOT NULL DEFAULT '',

            -- Embedded copy of the catalog entry's per-unit nutrition,
            -- so deleting or reseeding the catalog never corrupts the log
            calories REAL NOT NULL DEFAULT 0,
            protein REAL NOT NULL DEFAULT 0,      -- grams
            carbs REAL NOT NULL DEFAULT 0,        -- grams
            fat REAL NOT NULL DEFAULT 0,          -- grams

            quantity INTEGER NOT NULL DEFAULT 1,  -- positive multiplier
            meal TEXT NOT NULL CHECK(meal IN ('breakfast', 'lunch', 'dinner')),

            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_logged_foods_meal ON logged_foods(meal);
        "#,
    )?;

    Ok(())
}

/// Get the current schema version of the database
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);
    Ok(version)
}

/// Check if the database needs migration
pub fn needs_migration(conn: &Connection) -> DbResult<bool> {
    let current = get_schema_version(conn)?;
    Ok(current < SCHEMA_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_needs_migration_flips_after_running() {
        let db = Database::memory().unwrap();
        db.with_conn(|conn| {
            assert!(needs_migration(conn)?);
            run_migrations(conn)?;
            assert!(!needs_migration(conn)?);
            assert_eq!(get_schema_version(conn)?, 1);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_run_migrations_is_idempotent() {
        let db = Database::memory().unwrap();
        db.with_conn(|conn| {
            run_migrations(conn)?;
            run_migrations(conn)?;
            assert_eq!(get_schema_version(conn)?, 1);
            Ok(())
        })
        .unwrap();
    }
}
