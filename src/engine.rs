//! Nutrition engine
//!
//! Owns the user profile and the food log. Every mutation validates its
//! input, writes through to the database, updates the in-memory state, and
//! then synchronously notifies registered observers. Queries recompute from
//! the authoritative in-memory log, so totals are never stale.

use chrono::Local;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::CatalogEntry;
use crate::db::{Database, DbError};
use crate::models::{Goal, LoggedFood, LoggedFoodCreate, MealSlot, Nutrition, Profile, Sex};
use crate::nutrition::{basal_metabolic_rate, calorie_budget};

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("invalid profile: {0}")]
    InvalidProfile(&'static str),

    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Event emitted after every committed mutation
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ProfileChanged,
    FoodLogged(i64),
    QuantityChanged(i64),
    FoodRemoved(i64),
    LogCleared,
}

/// Observer of committed engine mutations
///
/// Notification is synchronous, inside the mutating call, so observers always
/// see the state the mutation left behind.
pub trait Observer {
    fn on_event(&self, event: &EngineEvent);
}

impl<F: Fn(&EngineEvent)> Observer for F {
    fn on_event(&self, event: &EngineEvent) {
        self(event)
    }
}

/// One-shot snapshot of a day's consumption against the budget
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub calorie_budget: f64,
    pub consumed: Nutrition,
    pub remaining_calories: f64,
    pub breakfast: Nutrition,
    pub lunch: Nutrition,
    pub dinner: Nutrition,
}

/// The nutrition engine
///
/// Single logical owner of profile and log state. Mutations take `&mut self`
/// and queries take `&self`, which gives callers the single-writer,
/// consistent-snapshot discipline for free.
pub struct NutritionEngine {
    db: Database,
    profile: Profile,
    log: Vec<LoggedFood>,
    observers: Vec<Box<dyn Observer>>,
}

impl NutritionEngine {
    /// Hydrate an engine from the database
    ///
    /// Unreadable persisted state degrades to the zeroed profile or empty
    /// log; it is never surfaced as an error.
    pub fn open(db: Database) -> Self {
        let profile = match db.with_conn(|conn| Profile::get(conn)) {
            Ok(Some(profile)) => profile,
            Ok(None) => Profile::default(),
            Err(e) => {
                warn!("failed to load profile, starting from defaults: {}", e);
                Profile::default()
            }
        };

        let log = match db.with_conn(|conn| LoggedFood::list_all(conn)) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to load food log, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            db,
            profile,
            log,
            observers: Vec::new(),
        }
    }

    /// Register an observer for committed mutations
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// The current profile
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The current food log, in insertion order
    pub fn log(&self) -> &[LoggedFood] {
        &self.log
    }

    /// Replace the profile wholesale and recompute the calorie budget
    ///
    /// Rejects non-positive weight/height and negative age; the logged foods
    /// are left untouched.
    pub fn set_profile(
        &mut self,
        age: i64,
        weight: f64,
        height: f64,
        sex: Sex,
        goal: Goal,
    ) -> EngineResult<Profile> {
        if age < 0 {
            return Err(EngineError::InvalidProfile("age must be non-negative"));
        }
        if weight <= 0.0 {
            return Err(EngineError::InvalidProfile("weight must be positive"));
        }
        if height <= 0.0 {
            return Err(EngineError::InvalidProfile("height must be positive"));
        }

        let bmr = basal_metabolic_rate(weight, height, age, sex);
        let budget = calorie_budget(bmr, goal);

        let profile = self
            .db
            .with_conn(|conn| Profile::set(conn, age, weight, height, sex, goal, budget))?;

        debug!("profile updated, calorie budget {}", profile.calorie_budget);
        self.profile = profile.clone();
        self.notify(&EngineEvent::ProfileChanged);

        Ok(profile)
    }

    /// Log a catalog food against a meal slot
    ///
    /// Appends a fresh entry with a new id and timestamp; nothing is mutated
    /// in place. Quantity must be positive.
    pub fn log_food(
        &mut self,
        entry: &CatalogEntry,
        quantity: i64,
        meal: MealSlot,
    ) -> EngineResult<LoggedFood> {
        if quantity <= 0 {
            return Err(EngineError::InvalidQuantity(quantity));
        }

        let data = LoggedFoodCreate {
            food_name: entry.name.to_string(),
            image: entry.image.to_string(),
            nutrition: entry.nutrition(),
            quantity,
            meal,
        };

        let food = self.db.with_conn(|conn| LoggedFood::create(conn, &data))?;

        debug!("logged {} x{} for {}", food.food_name, food.quantity, meal.as_str());
        let id = food.id;
        self.log.push(food.clone());
        self.notify(&EngineEvent::FoodLogged(id));

        Ok(food)
    }

    /// Replace the quantity of a logged food
    ///
    /// A quantity of zero or less deletes the entry, matching the contract
    /// the presentation layer depends on. An unknown id is a silent no-op.
    pub fn update_quantity(&mut self, id: i64, quantity: i64) -> EngineResult<()> {
        if quantity <= 0 {
            self.remove_food(id)?;
            return Ok(());
        }

        let updated = self
            .db
            .with_conn(|conn| LoggedFood::set_quantity(conn, id, quantity))?;

        match updated {
            Some(food) => {
                if let Some(slot) = self.log.iter_mut().find(|f| f.id == id) {
                    *slot = food;
                }
                self.notify(&EngineEvent::QuantityChanged(id));
            }
            None => debug!("update_quantity: id {} not found, ignoring", id),
        }

        Ok(())
    }

    /// Remove a logged food by id; Ok(false) if the id is unknown
    pub fn remove_food(&mut self, id: i64) -> EngineResult<bool> {
        let removed = self.db.with_conn(|conn| LoggedFood::delete(conn, id))?;

        if removed {
            self.log.retain(|f| f.id != id);
            self.notify(&EngineEvent::FoodRemoved(id));
        } else {
            debug!("remove_food: id {} not found, ignoring", id);
        }

        Ok(removed)
    }

    /// Empty the log for all meals
    pub fn clear_all(&mut self) -> EngineResult<()> {
        self.db.with_conn(|conn| LoggedFood::clear(conn))?;
        self.log.clear();
        self.notify(&EngineEvent::LogCleared);
        Ok(())
    }

    /// Consumed calorie/macro totals, for one meal slot or the whole day
    ///
    /// Recomputed from the log on every call.
    pub fn totals(&self, meal: Option<MealSlot>) -> Nutrition {
        self.log
            .iter()
            .filter(|f| meal.map_or(true, |m| f.meal == m))
            .map(LoggedFood::consumed)
            .sum()
    }

    /// Calories left in today's budget; may go negative, callers clamp for
    /// display
    pub fn remaining(&self) -> f64 {
        self.profile.calorie_budget - self.totals(None).calories
    }

    /// Snapshot of the day's consumption against the budget
    pub fn day_summary(&self) -> DaySummary {
        DaySummary {
            date: Local::now().format("%d %b %Y").to_string(),
            calorie_budget: self.profile.calorie_budget,
            consumed: self.totals(None),
            remaining_calories: self.remaining(),
            breakfast: self.totals(Some(MealSlot::Breakfast)),
            lunch: self.totals(Some(MealSlot::Lunch)),
            dinner: self.totals(Some(MealSlot::Dinner)),
        }
    }

    fn notify(&self, event: &EngineEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}
