//! Bot players that steer the kingdom between nights.
//!
//! A bot sees the current ledger and picks the commands to issue before
//! the driver sleeps the day away. Bots must be deterministic for a given
//! seed so that a run can be replayed from the command line.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use thronedata::enemies::Difficulty;
use thronedata::foods::FoodKind;
use thronedata::{buildings, defines, eras};
use thronesim_core::{Command, FightAction, Ledger};

/// Decides which commands to issue each day.
///
/// Returns a list of commands to execute before sleeping. May return
/// empty to spend the day idle.
pub trait Bot {
    fn decide(&mut self, ledger: &Ledger) -> Vec<Command>;
}

/// Builds the bot named on the command line.
pub fn make_bot(kind: &str, seed: u64) -> Result<Box<dyn Bot>> {
    match kind {
        "rest" => Ok(Box::new(RestBot)),
        "random" => Ok(Box::new(RandomBot::new(seed))),
        other => anyhow::bail!("Unknown bot '{}', expected 'rest' or 'random'", other),
    }
}

/// Caretaker that mostly sleeps.
///
/// Answers whatever lands on the throne, keeps the pantry stocked, and
/// otherwise alternates between taxing and paying off protests.
pub struct RestBot;

impl Bot for RestBot {
    fn decide(&mut self, ledger: &Ledger) -> Vec<Command> {
        let mut orders = Vec::new();

        if ledger.pending_choice.is_some() {
            orders.push(Command::ResolveChoice { option: 0 });
        }
        if let Some(offer) = &ledger.pending_offer {
            if ledger.money >= offer.price() {
                orders.push(Command::BuyMerchant);
            }
        }

        // Restock when the pantry would not cover tomorrow's meals.
        let shortfall = ledger.people as i64 - ledger.inventory.bread as i64;
        if shortfall > 0 {
            let affordable = ledger.money / FoodKind::Bread.price();
            let amount = shortfall.min(affordable) as u32;
            if amount > 0 {
                orders.push(Command::BuyFood {
                    kind: FoodKind::Bread,
                    amount,
                });
            }
        }

        if ledger.strength > 0 {
            let wages = defines::economy::PAY_PER_CITIZEN * ledger.people as i64;
            if ledger.protests > 0 && ledger.money >= wages {
                orders.push(Command::PayCitizens);
            } else if ledger.happiness.get() > 30 {
                orders.push(Command::CollectTax);
            }
        }

        orders
    }
}

/// Picks one random legal command a day, half the time doing nothing.
pub struct RandomBot {
    rng: rand::rngs::StdRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

/// Commands the ledger would accept right now.
fn available_commands(ledger: &Ledger) -> Vec<Command> {
    let mut menu = Vec::new();

    if ledger.pending_choice.is_some() {
        menu.push(Command::ResolveChoice { option: 0 });
        menu.push(Command::ResolveChoice { option: 1 });
    }
    if let Some(offer) = &ledger.pending_offer {
        if ledger.money >= offer.price() {
            menu.push(Command::BuyMerchant);
        }
    }

    // An open duel wants finishing before anything else.
    if ledger.fight_active() {
        menu.push(Command::FightAction {
            action: FightAction::Strike,
        });
        menu.push(Command::FightAction {
            action: FightAction::Block,
        });
        return menu;
    }

    if ledger.strength > 0 {
        menu.push(Command::CollectTax);
        if ledger.money >= defines::economy::PAY_PER_CITIZEN * ledger.people as i64 {
            menu.push(Command::PayCitizens);
        }
        if ledger.money >= ledger.expand_cost && ledger.era < eras::LAST_ERA {
            menu.push(Command::Expand);
        }
        for def in &buildings::BUILDINGS {
            if !ledger.buildings.contains(&def.id) && ledger.money >= def.cost {
                menu.push(Command::Build { building: def.id });
                break;
            }
        }
        menu.push(Command::StartFight {
            difficulty: Difficulty::Easy,
        });
    }
    if ledger.money >= FoodKind::Bread.price() * 5 {
        menu.push(Command::BuyFood {
            kind: FoodKind::Bread,
            amount: 5,
        });
    }

    menu
}

impl Bot for RandomBot {
    fn decide(&mut self, ledger: &Ledger) -> Vec<Command> {
        let menu = available_commands(ledger);
        if menu.is_empty() {
            return vec![];
        }

        // Fights get pressed every day; everything else half the time.
        if ledger.fight_active() || self.rng.gen::<bool>() {
            if let Some(command) = menu.choose(&mut self.rng) {
                return vec![command.clone()];
            }
        }

        vec![]
    }
}
