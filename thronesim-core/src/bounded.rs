//! Self-clamping integer used for every gauge-like value in the Ledger.
//!
//! Happiness and both health bars must never leave their bounds no matter
//! which system pushes on them, so the clamp lives in the type instead of at
//! each call site.

use serde::{Deserialize, Serialize};

use thronedata::defines::{combat, morale};

/// An integer that clamps itself into `[min, max]` on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedInt {
    value: i64,
    min: i64,
    max: i64,
}

impl BoundedInt {
    pub const fn new(value: i64, min: i64, max: i64) -> Self {
        let clamped = if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        };
        Self { value: clamped, min, max }
    }

    pub fn get(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Add a (possibly negative) delta, clamping to the bounds.
    pub fn add(&mut self, delta: i64) {
        self.value = (self.value + delta).clamp(self.min, self.max);
    }

    /// Overwrite the value, clamping to the bounds.
    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn is_empty(&self) -> bool {
        self.value <= self.min
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }
}

/// Happiness gauge at its starting value.
pub fn new_happiness() -> BoundedInt {
    BoundedInt::new(
        morale::START_HAPPINESS,
        morale::HAPPINESS_MIN,
        morale::HAPPINESS_MAX,
    )
}

/// Player health bar, full.
pub fn new_player_health() -> BoundedInt {
    BoundedInt::new(combat::PLAYER_MAX_HEALTH, 0, combat::PLAYER_MAX_HEALTH)
}

/// Enemy health bar sized to the given maximum, full.
pub fn new_enemy_health(max: i64) -> BoundedInt {
    BoundedInt::new(max, 0, max.max(0))
}
