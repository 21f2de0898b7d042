//! Daily random event: one d100 roll dispatched through cumulative buckets.

use tracing::instrument;

use thronedata::policies;
use thronedata::PolicyId;

use crate::dice::Dice;
use crate::logbook::LogTag;
use crate::state::Ledger;
use crate::systems::merchant;

/// Roll the day's event and apply it. Bucket bounds are inclusive.
#[instrument(skip_all, name = "event")]
pub fn run_event_tick(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let roll = dice.draw_int(1, 100);
    log::debug!("event roll {roll} on day {}", ledger.day);
    match roll {
        1..=10 => protest(ledger, dice),
        11..=20 => rogue_faction(ledger, dice),
        21..=30 => merchant::run_merchant_visit(ledger, dice),
        31..=40 => disaster(ledger, dice),
        41..=50 => royal_decision(ledger),
        51..=55 => relic(ledger, dice),
        56..=60 => policy_unlock(ledger, dice),
        61..=70 => festival(ledger, dice),
        71..=80 => treasure(ledger, dice),
        _ => calm(ledger),
    }
}

fn protest(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let gold = dice.draw_int(100, 300);
    let morale = dice.draw_int(5, 15);
    ledger.lose_money(gold);
    ledger.happiness.add(-morale);
    ledger.protests += 1;
    ledger.log.push(
        LogTag::Warn,
        format!("Protesters fill the square. {gold} gold lost, happiness -{morale}."),
    );
}

fn rogue_faction(ledger: &mut Ledger, dice: &mut dyn Dice) {
    if dice.chance(0.60) {
        let spoils = dice.draw_int(300, 800);
        ledger.gain_money(spoils);
        ledger.log.push(
            LogTag::Good,
            format!("Your guard routed a rogue faction and seized {spoils} gold."),
        );
    } else {
        let taken = dice.draw_int(3, 10) as u32;
        let ransom = dice.draw_int(100, 400);
        ledger.lose_people(taken);
        ledger.lose_money(ransom);
        ledger.log.push(
            LogTag::Danger,
            format!("A rogue faction raided the outskirts: {taken} citizens taken, {ransom} gold lost."),
        );
    }
}

fn disaster(ledger: &mut Ledger, dice: &mut dyn Dice) {
    if dice.chance(0.5) {
        // Famine takes citizens and bread in equal measure, one draw.
        let toll = dice.draw_int(5, 15);
        ledger.lose_people(toll as u32);
        ledger.inventory.bread = ledger.inventory.bread.saturating_sub(toll as u32);
        ledger.happiness.add(-10);
        ledger.log.push(
            LogTag::Danger,
            format!("Famine grips the land: {toll} citizens and {toll} bread lost."),
        );
    } else {
        let spoiled = dice.draw_int(10, 20) as u32;
        ledger.inventory.bread = ledger.inventory.bread.saturating_sub(spoiled);
        ledger.happiness.add(-5);
        ledger.log.push(
            LogTag::Danger,
            format!("Floodwaters spoil {spoiled} bread in the granaries."),
        );
    }
}

fn royal_decision(ledger: &mut Ledger) {
    ledger.happiness.add(10);
    ledger.log.push(
        LogTag::Good,
        "A popular royal decision lifts the realm's spirits.",
    );
}

fn relic(ledger: &mut Ledger, dice: &mut dyn Dice) {
    if dice.chance(0.5) {
        ledger.happiness.add(-10);
        ledger.lose_money(200);
        ledger.log.push(
            LogTag::Warn,
            "A cursed relic surfaces; the rites to contain it cost 200 gold.",
        );
    } else {
        ledger.happiness.add(10);
        ledger.gain_money(500);
        ledger.log.push(
            LogTag::Good,
            "A blessed relic draws pilgrims bearing 500 gold.",
        );
    }
}

fn policy_unlock(ledger: &mut Ledger, dice: &mut dyn Dice) {
    // BTreeMap iteration keeps the candidate order stable for a given state.
    let locked: Vec<PolicyId> = ledger
        .policies
        .iter()
        .filter(|(_, state)| state.locked)
        .map(|(id, _)| *id)
        .collect();
    if locked.is_empty() {
        calm(ledger);
        return;
    }
    let pick = locked[dice.draw_int(0, locked.len() as i64 - 1) as usize];
    if let Some(state) = ledger.policies.get_mut(&pick) {
        state.locked = false;
    }
    let def = policies::policy(pick);
    ledger.log.push(
        LogTag::System,
        format!("New policy unlocked: {}. {}", def.name, def.desc),
    );
}

fn festival(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let cheer = dice.draw_int(10, 30);
    ledger.happiness.add(cheer);
    ledger.log.push(
        LogTag::Good,
        format!("A spontaneous festival sweeps the kingdom (+{cheer} happiness)."),
    );
}

fn treasure(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let trove = dice.draw_int(200, 600);
    ledger.gain_money(trove);
    ledger.log.push(
        LogTag::Good,
        format!("A treasure hoard is unearthed: {trove} gold for the crown."),
    );
}

fn calm(ledger: &mut Ledger) {
    ledger.log.push(LogTag::Muted, "A calm day passes.");
}
