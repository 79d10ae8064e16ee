//! Utility to print the current day's nutrition summary as JSON

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use fitlog::build_info;
use fitlog::engine::NutritionEngine;

fn get_database_path() -> PathBuf {
    std::env::var("FITLOG_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            std::fs::create_dir_all(&path).ok();
            path.push("fitlog.db");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitlog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let db_path = get_database_path();
    eprintln!("Database path: {}", db_path.display());

    let database = fitlog::db::Database::new(&db_path)?;
    database.with_conn(|conn| {
        if fitlog::db::migrations::needs_migration(conn)? {
            fitlog::db::migrations::run_migrations(conn)?;
        }
        let version = fitlog::db::migrations::get_schema_version(conn)?;
        eprintln!("Database schema version: {}", version);
        Ok(())
    })?;

    let engine = NutritionEngine::open(database);
    let summary = engine.day_summary();

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
