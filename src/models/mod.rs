//! Data models
//!
//! Rust structs representing the profile and food-log entities.

mod logged_food;
mod nutrition;
mod profile;

pub use logged_food::{LoggedFood, LoggedFoodCreate, MealSlot};
pub use nutrition::Nutrition;
pub use profile::{Goal, Profile, Sex};
