//! Daily upkeep: the kingdom eats, then active policies take their effect.

use tracing::instrument;

use thronedata::eras;
use thronedata::policies::POLICIES;
use thronedata::PolicyId;

use crate::dice::Dice;
use crate::logbook::LogTag;
use crate::state::Ledger;

/// Bread demanded for one day, after rationing.
pub fn required_food(ledger: &Ledger) -> u32 {
    if ledger.policy_active(PolicyId::FoodRationing) {
        ledger.people * 3 / 4
    } else {
        ledger.people
    }
}

/// Feed the kingdom, or take the shortage out of morale and population.
#[instrument(skip_all, name = "food")]
pub fn run_food_tick(ledger: &mut Ledger) {
    let required = required_food(ledger);
    let bread = ledger.inventory.bread;
    if bread >= required {
        ledger.inventory.bread -= required;
        ledger.log.push(
            LogTag::Event,
            format!("The kingdom consumed {required} bread."),
        );
        return;
    }

    // Shortage splits: half the missing bread as lost morale, a fifth as
    // citizens leaving.
    let shortage = required - bread;
    let happiness_loss = i64::from(shortage / 2);
    let people_lost = shortage / 5;
    ledger.inventory.bread = 0;
    ledger.happiness.add(-happiness_loss);
    ledger.lose_people(people_lost);
    log::debug!("food shortage on day {}: required {required}, had {bread}", ledger.day);
    ledger.log.push(
        LogTag::Warn,
        format!(
            "Bread ran short by {shortage}. The realm goes hungry: \
             happiness -{happiness_loss}, {people_lost} citizens leave."
        ),
    );
}

/// Each active policy takes its daily effect, in charter order.
#[instrument(skip_all, name = "policies")]
pub fn run_policy_tick(ledger: &mut Ledger, dice: &mut dyn Dice) {
    for def in &POLICIES {
        if !ledger.policy_active(def.id) {
            continue;
        }
        match def.id {
            PolicyId::UniversalTax => {
                let levy = dice.draw_int(20, 50);
                ledger.gain_money(levy);
                ledger.happiness.add(-2);
                ledger.log.push(
                    LogTag::Event,
                    format!("The universal tax raised {levy} gold."),
                );
            }
            PolicyId::CharityRelief => {
                if ledger.money >= 30 {
                    ledger.money -= 30;
                    ledger.happiness.add(4);
                    ledger
                        .log
                        .push(LogTag::Good, "Charity kitchens fed the poor today.");
                }
            }
            PolicyId::RoyalFestival => {
                if ledger.day % 5 == 0 {
                    ledger.happiness.add(8);
                    ledger
                        .log
                        .push(LogTag::Good, "The royal festival filled the streets.");
                }
            }
            PolicyId::PublicHealth => {
                if dice.chance(0.10) {
                    ledger.log.push(
                        LogTag::System,
                        "The physicians stamped out a budding sickness.",
                    );
                } else {
                    ledger.happiness.add(1);
                    ledger
                        .log
                        .push(LogTag::Good, "Clean wells keep spirits up.");
                }
            }
            PolicyId::OpenBorders => {
                if dice.chance(0.15) {
                    let settlers = dice.draw_int(2, 8) as u32;
                    ledger.gain_people(settlers);
                    ledger.log.push(
                        LogTag::Good,
                        format!("{settlers} travelers settled under open borders."),
                    );
                }
            }
            PolicyId::ElectricWelfare => {
                if ledger.era == eras::ELECTRIC_ERA && dice.chance(0.20) {
                    ledger.log.push(
                        LogTag::System,
                        "Electric safeguards averted a disaster in the night.",
                    );
                }
            }
            // Rationing acts through the food tick, not here.
            PolicyId::FoodRationing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{LedgerBuilder, ScriptedDice};

    #[test]
    fn test_full_larder_feeds_everyone() {
        let mut ledger = LedgerBuilder::new().people(10).bread(25).build();
        run_food_tick(&mut ledger);
        assert_eq!(ledger.inventory.bread, 15);
        assert_eq!(ledger.people, 10);
        assert_eq!(ledger.happiness.get(), 70);
        assert_eq!(ledger.log.latest().unwrap().tag, LogTag::Event);
    }

    #[test]
    fn test_shortage_arithmetic() {
        // 50 mouths, 10 bread: shortage 40, so happiness -20 and 8 leave.
        let mut ledger = LedgerBuilder::new().people(50).bread(10).build();
        run_food_tick(&mut ledger);
        assert_eq!(ledger.inventory.bread, 0);
        assert_eq!(ledger.happiness.get(), 50);
        assert_eq!(ledger.people, 42);
        assert_eq!(ledger.log.latest().unwrap().tag, LogTag::Warn);
    }

    #[test]
    fn test_rationing_cuts_demand_by_a_quarter() {
        let ledger = LedgerBuilder::new()
            .people(50)
            .active_policy(PolicyId::FoodRationing)
            .build();
        assert_eq!(required_food(&ledger), 37);

        // 10 people ration down to 7 (floor of 7.5).
        let ledger = LedgerBuilder::new()
            .people(10)
            .active_policy(PolicyId::FoodRationing)
            .build();
        assert_eq!(required_food(&ledger), 7);
    }

    #[test]
    fn test_inactive_policies_do_nothing() {
        let mut ledger = LedgerBuilder::new().money(500).build();
        let before = ledger.clone();
        let mut dice = ScriptedDice::new();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_universal_tax_levies_and_grates() {
        let mut ledger = LedgerBuilder::new()
            .money(100)
            .active_policy(PolicyId::UniversalTax)
            .build();
        let mut dice = ScriptedDice::new().ints(&[35]);
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.money, 135);
        assert_eq!(ledger.happiness.get(), 68);
    }

    #[test]
    fn test_charity_needs_thirty_gold() {
        let mut ledger = LedgerBuilder::new()
            .money(29)
            .active_policy(PolicyId::CharityRelief)
            .build();
        let mut dice = ScriptedDice::new();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.money, 29);
        assert_eq!(ledger.happiness.get(), 70);

        let mut ledger = LedgerBuilder::new()
            .money(30)
            .active_policy(PolicyId::CharityRelief)
            .build();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.money, 0);
        assert_eq!(ledger.happiness.get(), 74);
    }

    #[test]
    fn test_festival_fires_on_fifth_days_only() {
        let mut ledger = LedgerBuilder::new()
            .day(10)
            .active_policy(PolicyId::RoyalFestival)
            .build();
        let mut dice = ScriptedDice::new();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.happiness.get(), 78);

        let mut ledger = LedgerBuilder::new()
            .day(11)
            .active_policy(PolicyId::RoyalFestival)
            .build();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.happiness.get(), 70);
    }

    #[test]
    fn test_public_health_prevention_roll() {
        // Roll under 0.10: prevention, log only.
        let mut ledger = LedgerBuilder::new()
            .active_policy(PolicyId::PublicHealth)
            .build();
        let mut dice = ScriptedDice::new().units(&[0.05]);
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.happiness.get(), 70);
        assert_eq!(ledger.log.latest().unwrap().tag, LogTag::System);

        // Roll over: steady +1 happiness.
        let mut ledger = LedgerBuilder::new()
            .active_policy(PolicyId::PublicHealth)
            .build();
        let mut dice = ScriptedDice::new().units(&[0.5]);
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.happiness.get(), 71);
    }

    #[test]
    fn test_open_borders_brings_settlers() {
        let mut ledger = LedgerBuilder::new()
            .people(10)
            .active_policy(PolicyId::OpenBorders)
            .build();
        let mut dice = ScriptedDice::new().units(&[0.10]).ints(&[6]);
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.people, 16);

        // Failed roll draws no settler count at all.
        let mut ledger = LedgerBuilder::new()
            .people(10)
            .active_policy(PolicyId::OpenBorders)
            .build();
        let mut dice = ScriptedDice::new().units(&[0.9]);
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.people, 10);
    }

    #[test]
    fn test_electric_welfare_sleeps_outside_its_era() {
        let mut ledger = LedgerBuilder::new()
            .era(3)
            .active_policy(PolicyId::ElectricWelfare)
            .build();
        // No unit draw scripted: outside the Electric Age the roll is skipped.
        let mut dice = ScriptedDice::new();
        run_policy_tick(&mut ledger, &mut dice);

        let mut ledger = LedgerBuilder::new()
            .era(5)
            .active_policy(PolicyId::ElectricWelfare)
            .build();
        let mut dice = ScriptedDice::new().units(&[0.1]);
        let before_len = ledger.log.len();
        run_policy_tick(&mut ledger, &mut dice);
        assert_eq!(ledger.log.len(), before_len + 1);
    }
}
