//! Utility to set the user profile in the database
//!
//! Usage: set_profile <age> <weight-kg> <height-cm> <male|female> <lose|maintain|gain>

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use fitlog::engine::{EngineEvent, NutritionEngine};
use fitlog::models::{Goal, Sex};

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

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        eprintln!("Usage: set_profile <age> <weight-kg> <height-cm> <male|female> <lose|maintain|gain>");
        std::process::exit(2);
    }

    let age: i64 = args[0].parse()?;
    let weight: f64 = args[1].parse()?;
    let height: f64 = args[2].parse()?;
    let sex = Sex::from_str(&args[3]);
    let goal = Goal::from_str(&args[4]);

    let db_path = get_database_path();
    println!("Database path: {}", db_path.display());

    let database = fitlog::db::Database::new(&db_path)?;
    database.with_conn(|conn| {
        if fitlog::db::migrations::needs_migration(conn)? {
            fitlog::db::migrations::run_migrations(conn)?;
        }
        Ok(())
    })?;

    let mut engine = NutritionEngine::open(database);
    engine.subscribe(Box::new(|event: &EngineEvent| {
        tracing::info!("engine event: {:?}", event);
    }));

    let profile = engine.set_profile(age, weight, height, sex, goal)?;
    println!("Profile set:");
    println!("  Age: {} | Weight: {} kg | Height: {} cm", profile.age, profile.weight, profile.height);
    println!("  Sex: {} | Goal: {}", profile.sex.as_str(), profile.goal.as_str());
    println!("  Calorie budget: {:.2} kcal/day", profile.calorie_budget);

    Ok(())
}
