//! Basal metabolic rate
//!
//! Mifflin-St Jeor style estimate plus the goal offset used for the daily
//! calorie budget.

use crate::models::{Goal, Sex};

/// Estimated daily energy expenditure at rest, in kcal
///
/// BMR = 10·weight + 6.25·height − 5·age + (5 male | −161 female)
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: i64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Daily calorie budget: BMR adjusted by the weight goal
pub fn calorie_budget(bmr: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Gain => bmr + 400.0,
        Goal::Lose => bmr - 200.0,
        Goal::Maintain => bmr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male() {
        // 10*70 + 6.25*175 - 5*25 + 5 = 1673.75
        let bmr = basal_metabolic_rate(70.0, 175.0, 25, Sex::Male);
        assert_eq!(bmr, 1673.75);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*30 - 161 = 1320.25
        let bmr = basal_metabolic_rate(60.0, 165.0, 30, Sex::Female);
        assert_eq!(bmr, 1320.25);
    }

    #[test]
    fn test_bmr_sex_offset_is_166() {
        let male = basal_metabolic_rate(80.0, 180.0, 40, Sex::Male);
        let female = basal_metabolic_rate(80.0, 180.0, 40, Sex::Female);
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn test_bmr_applied_as_is_at_age_zero() {
        // Implausible inputs are not rejected here; validation is the
        // engine's concern
        let bmr = basal_metabolic_rate(3.5, 50.0, 0, Sex::Male);
        assert_eq!(bmr, 10.0 * 3.5 + 6.25 * 50.0 + 5.0);
    }

    #[test]
    fn test_goal_offsets() {
        assert_eq!(calorie_budget(1673.75, Goal::Maintain), 1673.75);
        assert_eq!(calorie_budget(1673.75, Goal::Gain), 2073.75);
        assert_eq!(calorie_budget(1673.75, Goal::Lose), 1473.75);
    }
}
