//! Shared nutrition data structure
//!
//! Used for catalog entries, logged foods, and aggregate totals.

use serde::{Deserialize, Serialize};

/// Nutritional information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let n = Nutrition {
            calories: 100.0,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
        };
        let doubled = n.scale(2.0);
        assert_eq!(doubled.calories, 200.0);
        assert_eq!(doubled.protein, 20.0);
        assert_eq!(doubled.carbs, 40.0);
        assert_eq!(doubled.fat, 10.0);
    }

    #[test]
    fn test_sum() {
        let parts = vec![
            Nutrition {
                calories: 100.0,
                protein: 10.0,
                carbs: 20.0,
                fat: 5.0,
            },
            Nutrition {
                calories: 50.0,
                protein: 5.0,
                carbs: 10.0,
                fat: 2.5,
            },
        ];
        let total: Nutrition = parts.into_iter().sum();
        assert_eq!(total.calories, 150.0);
        assert_eq!(total.protein, 15.0);
        assert_eq!(total.carbs, 30.0);
        assert_eq!(total.fat, 7.5);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Nutrition = std::iter::empty().sum();
        assert_eq!(total, Nutrition::zero());
    }
}
