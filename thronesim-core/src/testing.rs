//! Test support: a Ledger builder and scripted dice.
//!
//! Compiled into the crate proper so downstream crates can drive scripted
//! scenarios in their own tests.

use std::collections::VecDeque;

use thronedata::enemies;
use thronedata::{Difficulty, PolicyId};

use crate::bounded::{new_enemy_health, new_player_health};
use crate::dice::Dice;
use crate::state::{FightState, Ledger};

/// Builds Ledgers with a fixed reign length so nothing about the start is
/// random. Defaults mirror a fresh game.
pub struct LedgerBuilder {
    ledger: Ledger,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::with_death_day("Testheim", 100),
        }
    }

    pub fn day(mut self, day: u32) -> Self {
        self.ledger.day = day;
        self
    }

    pub fn death_day(mut self, death_day: u32) -> Self {
        self.ledger.death_day = death_day;
        self
    }

    pub fn money(mut self, money: i64) -> Self {
        self.ledger.money = money;
        self
    }

    pub fn people(mut self, people: u32) -> Self {
        self.ledger.people = people;
        self.ledger.max_people = self.ledger.max_people.max(people);
        self
    }

    pub fn bread(mut self, bread: u32) -> Self {
        self.ledger.inventory.bread = bread;
        self
    }

    pub fn happiness(mut self, value: i64) -> Self {
        self.ledger.happiness.set(value);
        self
    }

    pub fn strength(mut self, strength: u32) -> Self {
        self.ledger.strength = strength.min(self.ledger.max_strength);
        self
    }

    pub fn era(mut self, era: i32) -> Self {
        self.ledger.era = era;
        self
    }

    /// Unlock a policy without activating it.
    pub fn unlocked(mut self, id: PolicyId) -> Self {
        if let Some(state) = self.ledger.policies.get_mut(&id) {
            state.locked = false;
        }
        self
    }

    /// Unlock and activate a policy.
    pub fn active_policy(mut self, id: PolicyId) -> Self {
        if let Some(state) = self.ledger.policies.get_mut(&id) {
            state.locked = false;
            state.active = true;
        }
        self
    }

    pub fn with_building(mut self, id: u16) -> Self {
        self.ledger.buildings.insert(id);
        self
    }

    /// Drop the ruler into a running fight without spending strength.
    pub fn in_fight(mut self, difficulty: Difficulty) -> Self {
        let cfg = enemies::enemy(difficulty);
        self.ledger.player_health = new_player_health();
        self.ledger.enemy_health = new_enemy_health(cfg.health);
        self.ledger.fight = Some(FightState {
            difficulty,
            enemy_name: cfg.name.to_string(),
            dmg_min: cfg.dmg_min,
            dmg_max: cfg.dmg_max,
            coins_min: cfg.coins_min,
            coins_max: cfg.coins_max,
            stunned: false,
            poison_turns: 0,
            over: false,
        });
        self
    }

    pub fn build(self) -> Ledger {
        self.ledger
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Dice that replay scripted draws. Integer and unit draws pop from separate
/// queues; running a queue dry is a bug in the test and panics.
pub struct ScriptedDice {
    ints: VecDeque<i64>,
    units: VecDeque<f64>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self {
            ints: VecDeque::new(),
            units: VecDeque::new(),
        }
    }

    pub fn ints(mut self, draws: &[i64]) -> Self {
        self.ints.extend(draws);
        self
    }

    pub fn units(mut self, draws: &[f64]) -> Self {
        self.units.extend(draws);
        self
    }
}

impl Default for ScriptedDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for ScriptedDice {
    fn draw_int(&mut self, lo: i64, hi: i64) -> i64 {
        let v = self
            .ints
            .pop_front()
            .expect("scripted dice ran out of integer draws");
        debug_assert!(
            (lo..=hi).contains(&v),
            "scripted draw {v} outside {lo}..={hi}"
        );
        v
    }

    fn draw_unit(&mut self) -> f64 {
        self.units
            .pop_front()
            .expect("scripted dice ran out of unit draws")
    }
}
