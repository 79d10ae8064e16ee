//! Nutrition calculations
//!
//! Pure formulas for basal metabolic rate and the goal-adjusted calorie budget.

mod bmr;

pub use bmr::{basal_metabolic_rate, calorie_budget};
