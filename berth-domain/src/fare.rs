use serde::Deserialize;
use std::collections::HashMap;

/// Meal chosen for every fresh booking.
pub const NO_MEAL: &str = "none";

/// Fare table applied when bookings are created or meals are attached.
#[derive(Debug, Clone, Deserialize)]
pub struct FareRules {
    /// Ticket price before any meal surcharge
    #[serde(default = "default_base_fare")]
    pub base_fare: i64,

    /// Surcharge per meal name (e.g., "veg" => 150)
    #[serde(default = "default_meal_prices")]
    pub meal_prices: HashMap<String, i64>,
}

fn default_base_fare() -> i64 { 500 }

fn default_meal_prices() -> HashMap<String, i64> {
    let mut m = HashMap::new();
    m.insert("veg".to_string(), 150);
    m.insert("non-veg".to_string(), 200);
    m.insert(NO_MEAL.to_string(), 0);
    m
}

impl Default for FareRules {
    fn default() -> Self {
        Self {
            base_fare: default_base_fare(),
            meal_prices: default_meal_prices(),
        }
    }
}

impl FareRules {
    /// Surcharge for a meal; names missing from the table cost nothing.
    pub fn surcharge(&self, meal: &str) -> i64 {
        self.meal_prices.get(meal).copied().unwrap_or(0)
    }
}
