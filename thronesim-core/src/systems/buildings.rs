//! Daily payout from constructed buildings.

use tracing::instrument;

use thronedata::buildings;

use crate::logbook::LogTag;
use crate::state::Ledger;

/// Sum each resource over all constructed buildings and apply the nonzero
/// sums, one log entry per resource.
#[instrument(skip_all, name = "buildings")]
pub fn run_building_tick(ledger: &mut Ledger) {
    let mut money = 0i64;
    let mut bread = 0i64;
    let mut happiness = 0i64;
    for id in &ledger.buildings {
        // Stale ids from old saves miss and contribute nothing.
        if let Some(def) = buildings::building(*id) {
            money += def.money;
            bread += def.bread;
            happiness += def.happiness;
        }
    }

    if money != 0 {
        ledger.gain_money(money);
        ledger.log.push(
            LogTag::Good,
            format!("Your buildings earn {money} gold."),
        );
    }
    if bread != 0 {
        ledger.inventory.bread += bread as u32;
        ledger.log.push(
            LogTag::Good,
            format!("The mills add {bread} bread to the stores."),
        );
    }
    if happiness != 0 {
        ledger.happiness.add(happiness);
        ledger.log.push(
            LogTag::Good,
            format!("Public works lift happiness by {happiness}."),
        );
    }
}
