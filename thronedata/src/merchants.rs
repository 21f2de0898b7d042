//! Travelling merchant stock: per-era weapon catalogs and the fixed table of
//! unique curiosities. Merchant weapons sit a notch above the armory stock of
//! the same era and are offered at most once per era.

use serde::{Deserialize, Serialize};

use crate::defines::merchant;

/// Offer rarity tier. The offer pool duplicates entries by `weight`, so
/// common stock shows up three times as often as epic stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

impl Rarity {
    pub fn weight(self) -> usize {
        match self {
            Rarity::Common => 3,
            Rarity::Rare => 2,
            Rarity::Epic => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
        }
    }
}

/// One weapon in a merchant's era catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerchantWeaponDef {
    pub name: &'static str,
    pub rarity: Rarity,
    /// Flat damage bonus on top of the base 5..15 roll.
    pub bonus: i64,
    pub base_price: i64,
}

const ENCAMPMENT: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Traveler's Dirk", rarity: Rarity::Common, bonus: 3, base_price: 150 },
    MerchantWeaponDef { name: "Hunter's Hatchet", rarity: Rarity::Rare, bonus: 4, base_price: 260 },
    MerchantWeaponDef { name: "Wolffang Blade", rarity: Rarity::Epic, bonus: 6, base_price: 450 },
];

const STONE: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Polished Axe", rarity: Rarity::Common, bonus: 5, base_price: 380 },
    MerchantWeaponDef { name: "Obsidian Knife", rarity: Rarity::Rare, bonus: 7, base_price: 600 },
    MerchantWeaponDef { name: "Ancestor Spear", rarity: Rarity::Epic, bonus: 9, base_price: 950 },
];

const BRONZE: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Bronze Saber", rarity: Rarity::Common, bonus: 9, base_price: 900 },
    MerchantWeaponDef { name: "Engraved Halberd", rarity: Rarity::Rare, bonus: 11, base_price: 1400 },
    MerchantWeaponDef { name: "Sunforged Blade", rarity: Rarity::Epic, bonus: 14, base_price: 2200 },
];

const IRON: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Iron Falchion", rarity: Rarity::Common, bonus: 14, base_price: 2000 },
    MerchantWeaponDef { name: "Runed Greatblade", rarity: Rarity::Rare, bonus: 17, base_price: 3000 },
    MerchantWeaponDef { name: "Frostbite Edge", rarity: Rarity::Epic, bonus: 20, base_price: 4500 },
];

const MEDIEVAL: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Knight's Flail", rarity: Rarity::Common, bonus: 21, base_price: 4000 },
    MerchantWeaponDef { name: "Cathedral Blade", rarity: Rarity::Rare, bonus: 25, base_price: 6000 },
    MerchantWeaponDef { name: "Dragonbone Claymore", rarity: Rarity::Epic, bonus: 29, base_price: 9000 },
];

const RENAISSANCE: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Duelist's Rapier", rarity: Rarity::Common, bonus: 29, base_price: 7500 },
    MerchantWeaponDef { name: "Gilded Pistol", rarity: Rarity::Rare, bonus: 33, base_price: 11000 },
    MerchantWeaponDef { name: "Alchemist's Edge", rarity: Rarity::Epic, bonus: 38, base_price: 16000 },
];

const ELECTRIC: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Coil Blade", rarity: Rarity::Common, bonus: 39, base_price: 13000 },
    MerchantWeaponDef { name: "Storm Lance", rarity: Rarity::Rare, bonus: 44, base_price: 19000 },
    MerchantWeaponDef { name: "Dynamo Saber", rarity: Rarity::Epic, bonus: 50, base_price: 28000 },
];

const MODERN: [MerchantWeaponDef; 3] = [
    MerchantWeaponDef { name: "Composite Blade", rarity: Rarity::Common, bonus: 52, base_price: 24000 },
    MerchantWeaponDef { name: "Gauss Edge", rarity: Rarity::Rare, bonus: 58, base_price: 34000 },
    MerchantWeaponDef { name: "Singularity Blade", rarity: Rarity::Epic, bonus: 65, base_price: 48000 },
];

/// Merchant weapon catalog for an era. Unknown eras carry no stock.
pub fn catalog(era: i32) -> &'static [MerchantWeaponDef] {
    match era {
        -1 => &ENCAMPMENT,
        0 => &STONE,
        1 => &BRONZE,
        2 => &IRON,
        3 => &MEDIEVAL,
        4 => &RENAISSANCE,
        5 => &ELECTRIC,
        6 => &MODERN,
        _ => &[],
    }
}

/// What a unique curiosity does when bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniqueEffect {
    /// Flat happiness gain on purchase.
    Happiness(i64),
    /// Permanent increase of the daily action budget.
    MaxStrength(u32),
    /// A trophy with no numeric effect.
    Collectible,
}

/// One entry of the fixed unique-item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueItemDef {
    pub name: &'static str,
    pub effect: UniqueEffect,
    pub base_price: i64,
}

pub const UNIQUE_ITEMS: [UniqueItemDef; 3] = [
    UniqueItemDef { name: "Golden Cheese", effect: UniqueEffect::Happiness(5), base_price: 400 },
    UniqueItemDef { name: "Ancient Scroll", effect: UniqueEffect::MaxStrength(1), base_price: 650 },
    UniqueItemDef { name: "Map Fragment", effect: UniqueEffect::Collectible, base_price: 250 },
];

/// Discount percent for a relationship tier (6% per tier, capped at tier 5).
pub fn discount_percent(relationship: u8) -> i64 {
    i64::from(relationship.min(merchant::RELATIONSHIP_CAP)) * merchant::DISCOUNT_PER_TIER
}

/// Final asking price after the relationship rebate is knocked off.
pub fn discounted_price(base_price: i64, relationship: u8) -> i64 {
    base_price - base_price * discount_percent(relationship) / 100
}
