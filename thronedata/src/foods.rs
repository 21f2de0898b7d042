use serde::{Deserialize, Serialize};

/// Happiness range a feast draws from, inclusive.
pub const FEAST_HAPPINESS_MIN: i64 = 3;
pub const FEAST_HAPPINESS_MAX: i64 = 6;

/// Market stock for the kingdom's larder. Bread is the staple the day
/// pipeline consumes; the other three are feast fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Bread,
    Meat,
    Cheese,
    Apples,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Bread,
        FoodKind::Meat,
        FoodKind::Cheese,
        FoodKind::Apples,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FoodKind::Bread => "Bread",
            FoodKind::Meat => "Meat",
            FoodKind::Cheese => "Cheese",
            FoodKind::Apples => "Apples",
        }
    }

    /// Market price per unit in gold.
    pub fn price(self) -> i64 {
        match self {
            FoodKind::Bread => 2,
            FoodKind::Meat => 6,
            FoodKind::Cheese => 5,
            FoodKind::Apples => 3,
        }
    }
}
