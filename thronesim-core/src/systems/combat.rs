//! Turn-based combat resolver.
//!
//! A fight runs strictly turn by turn: the player's action resolves first,
//! then the enemy answers, then poison ticks, then the fight settles if a
//! health bar hit zero. Potion actions other than the damage potion end the
//! turn on the spot, so the enemy never answers them; poison still ticks.

use tracing::instrument;

use thronedata::defines::combat as defines;
use thronedata::enemies;
use thronedata::{Difficulty, PotionKind};

use crate::bounded::{new_enemy_health, new_player_health};
use crate::dice::Dice;
use crate::input::FightAction;
use crate::logbook::LogTag;
use crate::state::{FightState, Ledger};
use crate::step::CommandError;

/// Open a fight: snapshot the enemy, refill both health bars, spend strength.
pub fn start_fight(ledger: &mut Ledger, difficulty: Difficulty) -> Result<(), CommandError> {
    if ledger.fight_active() {
        return Err(CommandError::FightInProgress);
    }
    if ledger.strength < 1 {
        return Err(CommandError::Exhausted);
    }

    ledger.strength -= 1;
    let cfg = enemies::enemy(difficulty);
    ledger.player_health = new_player_health();
    ledger.enemy_health = new_enemy_health(cfg.health);
    ledger.fight = Some(FightState {
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
    ledger.log.push(
        LogTag::System,
        format!("You step into the ring against a {}.", cfg.name),
    );
    Ok(())
}

/// Resolve one combat turn.
#[instrument(skip_all, name = "fight_turn")]
pub fn fight_turn(
    ledger: &mut Ledger,
    dice: &mut dyn Dice,
    action: FightAction,
) -> Result<(), CommandError> {
    let fight = ledger.fight.as_ref().ok_or(CommandError::NoFight)?;
    if fight.over {
        return Err(CommandError::FightOver);
    }

    match action {
        FightAction::Heal => drink_heal(ledger),
        FightAction::Lightning => drink_stun(ledger, PotionKind::Lightning),
        FightAction::SleepPotion => drink_stun(ledger, PotionKind::Sleep),
        FightAction::Poison => drink_poison(ledger),
        FightAction::Strike => swing(ledger, dice, 0),
        FightAction::DamagePotion => {
            take_potion(ledger, PotionKind::Damage)?;
            swing(ledger, dice, defines::DAMAGE_POTION_BONUS)
        }
        FightAction::Block => brace(ledger, dice),
    }
}

fn swing(ledger: &mut Ledger, dice: &mut dyn Dice, bonus: i64) -> Result<(), CommandError> {
    let roll = dice.draw_int(ledger.weapon.min_dmg, ledger.weapon.max_dmg) + bonus;
    ledger.enemy_health.add(-roll);
    let name = enemy_name(ledger);
    ledger.log.push(
        LogTag::Event,
        format!("You strike the {name} for {roll}."),
    );
    enemy_turn(ledger, dice, 0);
    poison_tick(ledger);
    settle(ledger, dice);
    Ok(())
}

fn brace(ledger: &mut Ledger, dice: &mut dyn Dice) -> Result<(), CommandError> {
    let guard = dice.draw_int(defines::BLOCK_MIN, defines::BLOCK_MAX);
    ledger.log.push(
        LogTag::Event,
        format!("You raise your shield ({guard} guard)."),
    );
    enemy_turn(ledger, dice, guard);
    poison_tick(ledger);
    settle(ledger, dice);
    Ok(())
}

fn drink_heal(ledger: &mut Ledger) -> Result<(), CommandError> {
    take_potion(ledger, PotionKind::Health)?;
    let full = ledger.player_health.max();
    ledger.player_health.set(full);
    ledger
        .log
        .push(LogTag::Good, "You drain a health potion; your wounds close.");
    poison_tick(ledger);
    Ok(())
}

fn drink_stun(ledger: &mut Ledger, kind: PotionKind) -> Result<(), CommandError> {
    take_potion(ledger, kind)?;
    if let Some(fight) = ledger.fight.as_mut() {
        fight.stunned = true;
    }
    ledger.log.push(
        LogTag::Event,
        format!("The {} flashes; the enemy will miss its next turn.", kind.name()),
    );
    poison_tick(ledger);
    Ok(())
}

fn drink_poison(ledger: &mut Ledger) -> Result<(), CommandError> {
    take_potion(ledger, PotionKind::Poison)?;
    // A fresh dose overwrites whatever was left, never stacks.
    if let Some(fight) = ledger.fight.as_mut() {
        fight.poison_turns = defines::POISON_TURNS;
    }
    ledger
        .log
        .push(LogTag::Event, "Venom coats your blade; the enemy is poisoned.");
    poison_tick(ledger);
    Ok(())
}

fn take_potion(ledger: &mut Ledger, kind: PotionKind) -> Result<(), CommandError> {
    let count = ledger.inventory.potion_mut(kind);
    if *count == 0 {
        return Err(CommandError::OutOfStock(kind.name().to_string()));
    }
    *count -= 1;
    Ok(())
}

fn enemy_name(ledger: &Ledger) -> String {
    ledger
        .fight
        .as_ref()
        .map(|f| f.enemy_name.clone())
        .unwrap_or_default()
}

fn enemy_turn(ledger: &mut Ledger, dice: &mut dyn Dice, guard: i64) {
    let (name, dmg_min, dmg_max, stunned) = match &ledger.fight {
        Some(f) => (f.enemy_name.clone(), f.dmg_min, f.dmg_max, f.stunned),
        None => return,
    };

    if stunned {
        if let Some(fight) = ledger.fight.as_mut() {
            fight.stunned = false;
        }
        ledger.log.push(
            LogTag::System,
            format!("The {name} reels, stunned, and loses its turn."),
        );
        return;
    }

    let roll = dice.draw_int(dmg_min, dmg_max);
    let dealt = (roll - guard).max(0);
    ledger.player_health.add(-dealt);
    if guard > 0 {
        ledger.log.push(
            LogTag::Warn,
            format!("Your shield takes the brunt; the {name} still lands {dealt}."),
        );
    } else {
        ledger.log.push(
            LogTag::Warn,
            format!("The {name} strikes back for {dealt}."),
        );
    }
}

fn poison_tick(ledger: &mut Ledger) {
    let ticking = match &ledger.fight {
        Some(f) => f.poison_turns > 0 && ledger.enemy_health.get() > 0,
        None => false,
    };
    if !ticking {
        return;
    }
    if let Some(fight) = ledger.fight.as_mut() {
        fight.poison_turns -= 1;
    }
    ledger.enemy_health.add(-defines::POISON_DAMAGE);
    ledger.log.push(
        LogTag::Event,
        format!("Poison sears the enemy for {}.", defines::POISON_DAMAGE),
    );
}

fn settle(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let (name, coins_min, coins_max) = match &ledger.fight {
        Some(f) => (f.enemy_name.clone(), f.coins_min, f.coins_max),
        None => return,
    };

    if ledger.enemy_health.is_empty() {
        let reward = dice.draw_int(coins_min, coins_max);
        ledger.gain_money(reward);
        ledger.wins += 1;
        if let Some(fight) = ledger.fight.as_mut() {
            fight.over = true;
        }
        ledger.log.push(
            LogTag::Good,
            format!("The {name} falls. You claim {reward} gold."),
        );
    } else if ledger.player_health.is_empty() {
        ledger.losses += 1;
        if let Some(fight) = ledger.fight.as_mut() {
            fight.over = true;
        }
        ledger.log.push(
            LogTag::Danger,
            format!("You are carried from the ring. The {name} stands."),
        );
    }
}

#[cfg(test)]
#[path = "combat_tests.rs"]
mod tests;
