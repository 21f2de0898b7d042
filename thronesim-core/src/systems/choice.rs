//! Court dilemmas: the daily trigger and the player's resolution.

use tracing::instrument;

use thronedata::choices::{self, ChoiceEffect};
use thronedata::defines::events;

use crate::dice::Dice;
use crate::logbook::LogTag;
use crate::state::Ledger;
use crate::step::CommandError;

/// Maybe put a dilemma before the throne. At most one is ever pending, and
/// an unanswered one blocks new ones rather than being replaced.
#[instrument(skip_all, name = "choice")]
pub fn run_choice_tick(ledger: &mut Ledger, dice: &mut dyn Dice) {
    if ledger.pending_choice.is_some() {
        return;
    }
    if !dice.chance(events::CHOICE_EVENT_CHANCE) {
        return;
    }
    let idx = dice.draw_int(0, choices::CHOICES.len() as i64 - 1) as usize;
    let def = &choices::CHOICES[idx];
    ledger.pending_choice = Some(def.id);
    ledger.log.push(
        LogTag::System,
        format!("A decision awaits the throne: {}", def.prompt),
    );
}

/// Answer the pending dilemma with option 0 or 1.
pub fn resolve_choice(
    ledger: &mut Ledger,
    dice: &mut dyn Dice,
    option: u8,
) -> Result<(), CommandError> {
    let id = ledger.pending_choice.ok_or(CommandError::NoChoice)?;
    if option >= 2 {
        return Err(CommandError::BadChoiceOption { option });
    }
    let Some(def) = choices::choice(id) else {
        // A stale id from an old save: the matter resolves itself.
        ledger.pending_choice = None;
        ledger
            .log
            .push(LogTag::Muted, "The matter before the throne resolved itself.");
        return Ok(());
    };

    let picked = &def.options[option as usize];
    for effect in picked.effects {
        apply_effect(ledger, dice, *effect);
    }
    ledger.pending_choice = None;
    ledger
        .log
        .push(LogTag::Event, format!("Decision made: {}.", picked.label));
    Ok(())
}

/// Flat effects (equal bounds) apply without touching the dice, so replays
/// only spend draws on genuinely random outcomes.
fn draw_delta(dice: &mut dyn Dice, lo: i64, hi: i64) -> i64 {
    if lo == hi {
        lo
    } else {
        dice.draw_int(lo, hi)
    }
}

fn apply_effect(ledger: &mut Ledger, dice: &mut dyn Dice, effect: ChoiceEffect) {
    match effect {
        ChoiceEffect::Money(lo, hi) => {
            let delta = draw_delta(dice, lo, hi);
            if delta >= 0 {
                ledger.gain_money(delta);
            } else {
                ledger.lose_money(-delta);
            }
        }
        ChoiceEffect::Happiness(lo, hi) => {
            let delta = draw_delta(dice, lo, hi);
            ledger.happiness.add(delta);
        }
        ChoiceEffect::People(lo, hi) => {
            let delta = draw_delta(dice, lo, hi);
            if delta >= 0 {
                ledger.gain_people(delta as u32);
            } else {
                ledger.lose_people((-delta) as u32);
            }
        }
        ChoiceEffect::Bread(lo, hi) => {
            let delta = draw_delta(dice, lo, hi);
            if delta >= 0 {
                ledger.inventory.bread += delta as u32;
            } else {
                ledger.inventory.bread = ledger.inventory.bread.saturating_sub((-delta) as u32);
            }
        }
        ChoiceEffect::Strength(lo, hi) => {
            let delta = draw_delta(dice, lo, hi);
            let next = i64::from(ledger.strength) + delta;
            ledger.strength = next.clamp(0, i64::from(ledger.max_strength)) as u32;
        }
        ChoiceEffect::Protests(delta) => {
            let next = i64::from(ledger.protests) + delta;
            ledger.protests = next.max(0) as u32;
        }
    }
}
