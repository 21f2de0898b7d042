//! The command layer: one Ledger in, one Ledger out.
//!
//! [`apply_command`] is the only entry point the outside world needs. It
//! clones the Ledger, dispatches the command against the clone and returns
//! it. Handlers validate every precondition before touching state, so a
//! refusal leaves the clone identical to the input except for one log entry,
//! and a refusal draws no dice.

use thiserror::Error;
use tracing::instrument;

use thronedata::defines::{economy, morale, population};
use thronedata::policies;
use thronedata::potions::{CHEER_POTION_GAIN, STRENGTH_POTION_GAIN};
use thronedata::foods::{FEAST_HAPPINESS_MAX, FEAST_HAPPINESS_MIN};
use thronedata::{eras, weapons, FoodKind, PolicyId, PotionKind};

use crate::dice::Dice;
use crate::input::Command;
use crate::logbook::LogTag;
use crate::state::{EquippedWeapon, Ledger};
use crate::systems;

/// Why a command was refused. Refusals are ordinary outcomes, not faults:
/// the command layer records them in the chronicle and changes nothing else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The chronicle has closed; the realm rests.")]
    RunEnded,
    #[error("The treasury cannot cover it: {need} gold needed, {have} on hand.")]
    NotEnoughMoney { need: i64, have: i64 },
    #[error("The crown is spent for today; sleep restores strength.")]
    Exhausted,
    #[error("No {0} left in the stores.")]
    OutOfStock(String),
    #[error("The {0} answers only to a fight action.")]
    CombatPotion(String),
    #[error("Strength is already at its fullest.")]
    StrengthAlreadyFull,
    #[error("A feast wants one meat, one cheese and one apples.")]
    FeastWantsStock,
    #[error("Nothing was ordered.")]
    NothingOrdered,
    #[error("The {0} policy remains sealed.")]
    PolicyLocked(String),
    #[error("No road leads past the Modern Age.")]
    LastEra,
    #[error("Era {era} lies beyond the kingdom's reach.")]
    EraNotReached { era: i32 },
    #[error("No armory lists weapon {id} for era {era}.")]
    UnknownWeapon { era: i32, id: u8 },
    #[error("The {0} already hangs in the armory.")]
    WeaponAlreadyOwned(String),
    #[error("No blueprint bears the number {id}.")]
    UnknownBuilding { id: u16 },
    #[error("The {0} already stands.")]
    AlreadyBuilt(String),
    #[error("A fight is already underway.")]
    FightInProgress,
    #[error("There is no fight to act in.")]
    NoFight,
    #[error("That fight is already settled.")]
    FightOver,
    #[error("The merchant has nothing on the table.")]
    NoOffer,
    #[error("No decision awaits the throne.")]
    NoChoice,
    #[error("There is no option {option}; the dilemma offers two.")]
    BadChoiceOption { option: u8 },
}

impl CommandError {
    /// Chronicle tag a refusal is recorded under.
    pub fn tag(&self) -> LogTag {
        match self {
            CommandError::RunEnded => LogTag::Muted,
            _ => LogTag::Warn,
        }
    }
}

/// Apply one command, returning the next Ledger. The input is untouched.
#[instrument(skip_all, name = "command", fields(day = ledger.day))]
pub fn apply_command(ledger: &Ledger, dice: &mut dyn Dice, command: &Command) -> Ledger {
    let mut next = ledger.clone();
    if let Err(refusal) = dispatch(&mut next, dice, command) {
        log::debug!("refused {command:?}: {refusal}");
        next.log.push(refusal.tag(), refusal.to_string());
    }
    next
}

fn dispatch(
    ledger: &mut Ledger,
    dice: &mut dyn Dice,
    command: &Command,
) -> Result<(), CommandError> {
    if ledger.run_ended {
        return Err(CommandError::RunEnded);
    }
    match command {
        Command::Sleep => {
            run_day(ledger, dice);
            Ok(())
        }
        Command::CollectTax => collect_tax(ledger),
        Command::PayCitizens => pay_citizens(ledger, dice),
        Command::Expand => expand(ledger, dice),
        Command::Build { building } => build(ledger, *building),
        Command::BuyWeapon { era, weapon } => buy_weapon(ledger, *era, *weapon),
        Command::BuyPotion { kind } => buy_potion(ledger, *kind),
        Command::BuyFood { kind, amount } => buy_food(ledger, *kind, *amount),
        Command::UsePotion { kind } => use_potion(ledger, *kind),
        Command::Feast => feast(ledger, dice),
        Command::TogglePolicy { policy } => toggle_policy(ledger, *policy),
        Command::StartFight { difficulty } => systems::combat::start_fight(ledger, *difficulty),
        Command::FightAction { action } => systems::combat::fight_turn(ledger, dice, *action),
        Command::BuyMerchant => systems::merchant::buy_offer(ledger),
        Command::ResolveChoice { option } => systems::choice::resolve_choice(ledger, dice, *option),
    }
}

/// The overnight pipeline, in fixed order.
#[instrument(skip_all, name = "sleep")]
fn run_day(ledger: &mut Ledger, dice: &mut dyn Dice) {
    // 1. Rest: restore strength and advance the calendar.
    ledger.strength = ledger.max_strength;
    ledger.day += 1;

    // 2. The kingdom eats.
    systems::upkeep::run_food_tick(ledger);

    // 3. One random event for the day.
    systems::events::run_event_tick(ledger, dice);

    // 4. Constructed buildings pay out.
    systems::buildings::run_building_tick(ledger);

    // 5. A court dilemma may surface.
    systems::choice::run_choice_tick(ledger, dice);

    // 6. Active policies take their daily effect.
    systems::upkeep::run_policy_tick(ledger, dice);

    // 7. The reign may reach its end.
    if ledger.day >= ledger.death_day {
        ledger.run_ended = true;
        ledger.log.push(
            LogTag::Danger,
            format!(
                "On day {}, {}'s reign reaches its appointed end. The chronicle has closed.",
                ledger.day, ledger.name
            ),
        );
    }
}

fn collect_tax(ledger: &mut Ledger) -> Result<(), CommandError> {
    if ledger.strength < 1 {
        return Err(CommandError::Exhausted);
    }
    ledger.strength -= 1;
    let levy = economy::TAX_PER_CITIZEN * i64::from(ledger.people);
    ledger.gain_money(levy);
    ledger.happiness.add(-2);
    ledger.log.push(
        LogTag::Event,
        format!("Tax collectors bring in {levy} gold."),
    );
    // Squeezing an already unhappy kingdom stirs protest.
    if ledger.happiness.get() < morale::TAX_UNREST_THRESHOLD {
        ledger.protests += 1;
        ledger.log.push(
            LogTag::Warn,
            "The taxman's heavy hand stirs protest in the streets.",
        );
    }
    Ok(())
}

fn pay_citizens(ledger: &mut Ledger, dice: &mut dyn Dice) -> Result<(), CommandError> {
    if ledger.strength < 1 {
        return Err(CommandError::Exhausted);
    }
    let wages = economy::PAY_PER_CITIZEN * i64::from(ledger.people);
    if ledger.money < wages {
        return Err(CommandError::NotEnoughMoney {
            need: wages,
            have: ledger.money,
        });
    }
    ledger.strength -= 1;
    ledger.money -= wages;
    let cheer = dice.draw_int(3, 7);
    ledger.happiness.add(cheer);
    ledger.protests = ledger.protests.saturating_sub(1);
    ledger.log.push(
        LogTag::Good,
        format!("You pay {wages} gold in wages; the streets warm to you."),
    );
    Ok(())
}

fn expand(ledger: &mut Ledger, dice: &mut dyn Dice) -> Result<(), CommandError> {
    if ledger.strength < 1 {
        return Err(CommandError::Exhausted);
    }
    if ledger.era >= eras::LAST_ERA {
        return Err(CommandError::LastEra);
    }
    if ledger.money < ledger.expand_cost {
        return Err(CommandError::NotEnoughMoney {
            need: ledger.expand_cost,
            have: ledger.money,
        });
    }

    ledger.strength -= 1;
    ledger.money -= ledger.expand_cost;
    ledger.expand_cost *= 2;
    ledger.era += 1;
    ledger.max_people += population::EXPAND_HOUSING_GAIN;
    let settlers = dice.draw_int(
        population::EXPAND_SETTLERS_MIN,
        population::EXPAND_SETTLERS_MAX,
    ) as u32;
    ledger.gain_people(settlers);
    ledger.happiness.add(5);
    ledger.log.push(
        LogTag::Good,
        format!(
            "The kingdom expands into the {}. {settlers} settlers arrive.",
            ledger.era_name()
        ),
    );
    Ok(())
}

fn build(ledger: &mut Ledger, id: u16) -> Result<(), CommandError> {
    if ledger.strength < 1 {
        return Err(CommandError::Exhausted);
    }
    let def =
        thronedata::buildings::building(id).ok_or(CommandError::UnknownBuilding { id })?;
    if ledger.buildings.contains(&id) {
        return Err(CommandError::AlreadyBuilt(def.name.to_string()));
    }
    if ledger.money < def.cost {
        return Err(CommandError::NotEnoughMoney {
            need: def.cost,
            have: ledger.money,
        });
    }

    ledger.strength -= 1;
    ledger.money -= def.cost;
    ledger.buildings.insert(id);
    ledger.log.push(
        LogTag::Good,
        format!("The {} rises for {} gold.", def.name, def.cost),
    );
    Ok(())
}

fn buy_weapon(ledger: &mut Ledger, era: i32, id: u8) -> Result<(), CommandError> {
    if era > ledger.era {
        return Err(CommandError::EraNotReached { era });
    }
    let def = weapons::weapon(era, id).ok_or(CommandError::UnknownWeapon { era, id })?;
    if ledger
        .owned_weapons
        .get(&era)
        .map_or(false, |&highest| id <= highest)
    {
        return Err(CommandError::WeaponAlreadyOwned(def.name.to_string()));
    }
    if ledger.money < def.price {
        return Err(CommandError::NotEnoughMoney {
            need: def.price,
            have: ledger.money,
        });
    }

    ledger.money -= def.price;
    ledger.owned_weapons.insert(era, id);
    // A weaker purchase joins the armory without displacing better arms.
    if def.bonus >= ledger.weapon.bonus {
        ledger.weapon = EquippedWeapon::from_bonus(def.name, def.bonus);
        ledger.log.push(
            LogTag::Good,
            format!("You buy the {} for {} gold and strap it on.", def.name, def.price),
        );
    } else {
        ledger.log.push(
            LogTag::Good,
            format!("You buy the {} for {} gold; it joins the armory.", def.name, def.price),
        );
    }
    Ok(())
}

fn buy_potion(ledger: &mut Ledger, kind: PotionKind) -> Result<(), CommandError> {
    let price = kind.price();
    if ledger.money < price {
        return Err(CommandError::NotEnoughMoney {
            need: price,
            have: ledger.money,
        });
    }
    ledger.money -= price;
    *ledger.inventory.potion_mut(kind) += 1;
    ledger.log.push(
        LogTag::Event,
        format!("One {} joins the stores for {price} gold.", kind.name()),
    );
    Ok(())
}

fn buy_food(ledger: &mut Ledger, kind: FoodKind, amount: u32) -> Result<(), CommandError> {
    if amount == 0 {
        return Err(CommandError::NothingOrdered);
    }
    let cost = kind.price() * i64::from(amount);
    if ledger.money < cost {
        return Err(CommandError::NotEnoughMoney {
            need: cost,
            have: ledger.money,
        });
    }
    ledger.money -= cost;
    *ledger.inventory.food_mut(kind) += amount;
    ledger.log.push(
        LogTag::Event,
        format!("{amount} {} bought for {cost} gold.", kind.name()),
    );
    Ok(())
}

fn use_potion(ledger: &mut Ledger, kind: PotionKind) -> Result<(), CommandError> {
    match kind {
        PotionKind::Strength => {
            if ledger.inventory.strength_potions == 0 {
                return Err(CommandError::OutOfStock(kind.name().to_string()));
            }
            if ledger.strength >= ledger.max_strength {
                return Err(CommandError::StrengthAlreadyFull);
            }
            ledger.inventory.strength_potions -= 1;
            ledger.strength = (ledger.strength + STRENGTH_POTION_GAIN).min(ledger.max_strength);
            ledger
                .log
                .push(LogTag::Good, "The strength potion steels you for more work.");
            Ok(())
        }
        PotionKind::Cheer => {
            if ledger.inventory.cheer_potions == 0 {
                return Err(CommandError::OutOfStock(kind.name().to_string()));
            }
            ledger.inventory.cheer_potions -= 1;
            ledger.happiness.add(CHEER_POTION_GAIN);
            ledger
                .log
                .push(LogTag::Good, "The cheer potion warms the whole court.");
            Ok(())
        }
        other => Err(CommandError::CombatPotion(other.name().to_string())),
    }
}

fn feast(ledger: &mut Ledger, dice: &mut dyn Dice) -> Result<(), CommandError> {
    let inv = &ledger.inventory;
    if inv.meat == 0 || inv.cheese == 0 || inv.apples == 0 {
        return Err(CommandError::FeastWantsStock);
    }
    ledger.inventory.meat -= 1;
    ledger.inventory.cheese -= 1;
    ledger.inventory.apples -= 1;
    let cheer = dice.draw_int(FEAST_HAPPINESS_MIN, FEAST_HAPPINESS_MAX);
    ledger.happiness.add(cheer);
    ledger.log.push(
        LogTag::Good,
        format!("A feast of meat, cheese and apples lifts the court (+{cheer} happiness)."),
    );
    Ok(())
}

fn toggle_policy(ledger: &mut Ledger, id: PolicyId) -> Result<(), CommandError> {
    let def = policies::policy(id);
    let state = ledger
        .policies
        .get_mut(&id)
        .ok_or_else(|| CommandError::PolicyLocked(def.name.to_string()))?;
    if state.locked {
        return Err(CommandError::PolicyLocked(def.name.to_string()));
    }
    state.active = !state.active;
    let verb = if state.active { "enacted" } else { "repealed" };
    ledger
        .log
        .push(LogTag::System, format!("{} {verb}.", def.name));
    Ok(())
}


#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
