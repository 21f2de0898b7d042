//! Game mechanic constants (defines).
//!
//! Tuning values shared across the simulation systems, grouped by concern so
//! the balance of the day pipeline, combat and merchant can be read in one
//! place.

/// Reign length constants
pub mod days {
    /// Shortest reign drawn at game start (inclusive)
    pub const DEATH_DAY_MIN: i64 = 80;

    /// Longest reign drawn at game start (inclusive)
    pub const DEATH_DAY_MAX: i64 = 150;
}

/// Economy constants
pub mod economy {
    /// Starting treasury in gold
    pub const START_MONEY: i64 = 150;

    /// Gold collected per citizen by the tax command
    pub const TAX_PER_CITIZEN: i64 = 2;

    /// Gold paid per citizen by the wage command
    pub const PAY_PER_CITIZEN: i64 = 1;

    /// Cost of the first expansion; doubles after every expansion
    pub const START_EXPAND_COST: i64 = 300;
}

/// Population constants
pub mod population {
    /// Citizens at game start
    pub const START_PEOPLE: u32 = 10;

    /// Housing at game start
    pub const START_MAX_PEOPLE: u32 = 50;

    /// Housing gained per expansion
    pub const EXPAND_HOUSING_GAIN: u32 = 50;

    /// Settlers arriving per expansion, drawn inclusive
    pub const EXPAND_SETTLERS_MIN: i64 = 5;
    pub const EXPAND_SETTLERS_MAX: i64 = 15;
}

/// Morale constants
pub mod morale {
    /// Kingdom happiness at game start
    pub const START_HAPPINESS: i64 = 70;

    /// Happiness is clamped to this closed range at all times
    pub const HAPPINESS_MIN: i64 = 0;
    pub const HAPPINESS_MAX: i64 = 100;

    /// Below this value, collecting taxes stirs a protest
    pub const TAX_UNREST_THRESHOLD: i64 = 20;
}

/// Combat constants
pub mod combat {
    /// A weapon's damage roll spans bonus + these base bounds
    pub const BASE_MIN_DMG: i64 = 5;
    pub const BASE_MAX_DMG: i64 = 15;

    /// Ruler health, restored to full at every fight start
    pub const PLAYER_MAX_HEALTH: i64 = 100;

    /// Shield block roll, subtracted from the enemy attack (floored at 0)
    pub const BLOCK_MIN: i64 = 10;
    pub const BLOCK_MAX: i64 = 30;

    /// Flat bonus a damage potion adds to the strike roll
    pub const DAMAGE_POTION_BONUS: i64 = 10;

    /// Turns a dose of poison lasts; re-poisoning overwrites, never stacks
    pub const POISON_TURNS: u8 = 3;

    /// Damage per poison tick
    pub const POISON_DAMAGE: i64 = 5;

    /// Daily action budget at game start
    pub const START_STRENGTH: u32 = 3;
}

/// Merchant constants
pub mod merchant {
    /// Chance the travelling merchant shows a weapon instead of a unique item
    pub const WEAPON_OFFER_CHANCE: f64 = 0.03;

    /// Discount percent granted per relationship tier
    pub const DISCOUNT_PER_TIER: i64 = 6;

    /// Relationship stops improving at this tier
    pub const RELATIONSHIP_CAP: u8 = 5;
}

/// Daily event constants
pub mod events {
    /// Chance per day that a court dilemma is put before the ruler
    pub const CHOICE_EVENT_CHANCE: f64 = 0.10;
}
