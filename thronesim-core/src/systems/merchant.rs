//! The travelling merchant: offer generation and purchase settlement.
//!
//! The merchant shows one offer at a time. A new visit replaces any unbought
//! offer, weapon offers never repeat back to back, and each era's weapon can
//! be bought once. Relationship grows with every purchase and is paid back
//! as a discount on the next one.

use tracing::instrument;

use thronedata::defines::merchant as defines;
use thronedata::merchants::{self, MerchantWeaponDef, UniqueItemDef};
use thronedata::UniqueEffect;

use crate::dice::Dice;
use crate::logbook::LogTag;
use crate::state::{EquippedWeapon, Ledger, MerchantOffer};
use crate::step::CommandError;

/// Anti-repeat key recorded for weapon offers.
const WEAPON_OFFER_KEY: &str = "weapon";

/// Put a fresh offer in front of the player, replacing any unbought one.
#[instrument(skip_all, name = "merchant")]
pub fn run_merchant_visit(ledger: &mut Ledger, dice: &mut dyn Dice) {
    if wants_weapon_offer(ledger, dice) {
        weapon_offer(ledger, dice);
    } else {
        unique_offer(ledger, dice);
    }
}

/// Weapon promotion gate. The order matters: the rare-offer die is only
/// rolled once the era actually has unbought stock, and a weapon shown on
/// the previous visit forces a unique item even on a winning roll.
fn wants_weapon_offer(ledger: &Ledger, dice: &mut dyn Dice) -> bool {
    !merchants::catalog(ledger.era).is_empty()
        && !ledger.merchant.bought_eras.contains(&ledger.era)
        && dice.chance(defines::WEAPON_OFFER_CHANCE)
        && ledger.merchant.last_offer_key != WEAPON_OFFER_KEY
}

fn weapon_offer(ledger: &mut Ledger, dice: &mut dyn Dice) {
    let catalog = merchants::catalog(ledger.era);
    // Weighted pick by list duplication: common entries appear three times,
    // rare twice, epic once. Easy to audit by counting.
    let mut pool: Vec<&MerchantWeaponDef> = Vec::new();
    for def in catalog {
        for _ in 0..def.rarity.weight() {
            pool.push(def);
        }
    }
    let def = pool[dice.draw_int(0, pool.len() as i64 - 1) as usize];

    let discount_pct = merchants::discount_percent(ledger.merchant.relationship);
    let price = merchants::discounted_price(def.base_price, ledger.merchant.relationship);
    ledger.merchant.last_offer_key = WEAPON_OFFER_KEY.to_string();
    ledger.pending_offer = Some(MerchantOffer::Weapon {
        era: ledger.era,
        name: def.name.to_string(),
        rarity: def.rarity,
        bonus: def.bonus,
        price,
        discount_pct,
    });
    ledger.log.push(
        LogTag::Merchant,
        format!(
            "The merchant unwraps a {} {} (+{} dmg): {price} gold ({discount_pct}% off).",
            def.rarity.label(),
            def.name,
            def.bonus,
        ),
    );
}

fn unique_offer(ledger: &mut Ledger, dice: &mut dyn Dice) {
    // Whatever was shown last time is off the table this visit.
    let pool: Vec<&UniqueItemDef> = merchants::UNIQUE_ITEMS
        .iter()
        .filter(|item| item.name != ledger.merchant.last_offer_key)
        .collect();
    let item = pool[dice.draw_int(0, pool.len() as i64 - 1) as usize];

    let discount_pct = merchants::discount_percent(ledger.merchant.relationship);
    let price = merchants::discounted_price(item.base_price, ledger.merchant.relationship);
    ledger.merchant.last_offer_key = item.name.to_string();
    ledger.pending_offer = Some(MerchantOffer::Unique {
        name: item.name.to_string(),
        effect: item.effect,
        price,
        discount_pct,
    });
    ledger.log.push(
        LogTag::Merchant,
        format!(
            "The merchant presents the {}: {price} gold ({discount_pct}% off).",
            item.name
        ),
    );
}

/// Settle the outstanding offer: charge, hand over, improve relations.
pub fn buy_offer(ledger: &mut Ledger) -> Result<(), CommandError> {
    let offer = ledger.pending_offer.clone().ok_or(CommandError::NoOffer)?;
    let price = offer.price();
    if ledger.money < price {
        return Err(CommandError::NotEnoughMoney {
            need: price,
            have: ledger.money,
        });
    }

    ledger.money -= price;
    match offer {
        MerchantOffer::Weapon {
            era, name, bonus, ..
        } => {
            ledger.weapon = EquippedWeapon::from_bonus(&name, bonus);
            ledger.merchant.bought_eras.insert(era);
            ledger.log.push(
                LogTag::Good,
                format!("You buy the {name} for {price} gold and take it up at once."),
            );
        }
        MerchantOffer::Unique { name, effect, .. } => {
            match effect {
                UniqueEffect::Happiness(gain) => ledger.happiness.add(gain),
                UniqueEffect::MaxStrength(gain) => ledger.max_strength += gain,
                UniqueEffect::Collectible => {}
            }
            ledger.log.push(
                LogTag::Good,
                format!("You buy the {name} for {price} gold."),
            );
        }
    }
    ledger.merchant.relationship =
        (ledger.merchant.relationship + 1).min(defines::RELATIONSHIP_CAP);
    ledger.pending_offer = None;
    Ok(())
}
