use serde::{Deserialize, Serialize};

/// Arena tiers the ruler may challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Stat block for one arena opponent. Damage and coin ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDef {
    pub name: &'static str,
    pub health: i64,
    pub dmg_min: i64,
    pub dmg_max: i64,
    pub coins_min: i64,
    pub coins_max: i64,
}

const BANDIT: EnemyDef = EnemyDef {
    name: "Bandit",
    health: 100,
    dmg_min: 2,
    dmg_max: 7,
    coins_min: 50,
    coins_max: 150,
};

const MARAUDER: EnemyDef = EnemyDef {
    name: "Marauder",
    health: 200,
    dmg_min: 7,
    dmg_max: 12,
    coins_min: 100,
    coins_max: 500,
};

const WARLORD: EnemyDef = EnemyDef {
    name: "Warlord",
    health: 300,
    dmg_min: 10,
    dmg_max: 20,
    coins_min: 150,
    coins_max: 800,
};

pub fn enemy(difficulty: Difficulty) -> &'static EnemyDef {
    match difficulty {
        Difficulty::Easy => &BANDIT,
        Difficulty::Medium => &MARAUDER,
        Difficulty::Hard => &WARLORD,
    }
}
