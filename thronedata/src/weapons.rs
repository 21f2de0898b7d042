use crate::defines::combat;

/// One armory entry. Weapons are ordered within an era by id (list position);
/// owning id N implies owning every id below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponDef {
    pub name: &'static str,
    /// Flat damage bonus on top of the base 5..15 roll.
    pub bonus: i64,
    pub price: i64,
}

impl WeaponDef {
    pub fn min_dmg(&self) -> i64 {
        combat::BASE_MIN_DMG + self.bonus
    }

    pub fn max_dmg(&self) -> i64 {
        combat::BASE_MAX_DMG + self.bonus
    }
}

/// Sidearm every ruler starts with. Not part of any era catalog.
pub const STARTING_WEAPON: WeaponDef = WeaponDef {
    name: "Rusty Dagger",
    bonus: 0,
    price: 0,
};

const ENCAMPMENT: [WeaponDef; 2] = [
    WeaponDef { name: "Flint Knife", bonus: 1, price: 60 },
    WeaponDef { name: "Club", bonus: 2, price: 120 },
];

const STONE: [WeaponDef; 2] = [
    WeaponDef { name: "Stone Axe", bonus: 3, price: 200 },
    WeaponDef { name: "Stone Spear", bonus: 4, price: 320 },
];

const BRONZE: [WeaponDef; 2] = [
    WeaponDef { name: "Bronze Shortsword", bonus: 6, price: 520 },
    WeaponDef { name: "Bronze Halberd", bonus: 8, price: 800 },
];

const IRON: [WeaponDef; 2] = [
    WeaponDef { name: "Iron Sword", bonus: 10, price: 1200 },
    WeaponDef { name: "Iron Greatblade", bonus: 13, price: 1800 },
];

const MEDIEVAL: [WeaponDef; 2] = [
    WeaponDef { name: "Knight's Longsword", bonus: 16, price: 2600 },
    WeaponDef { name: "Tower Greatsword", bonus: 20, price: 3600 },
];

const RENAISSANCE: [WeaponDef; 2] = [
    WeaponDef { name: "Rapier", bonus: 24, price: 5000 },
    WeaponDef { name: "Flintlock Pistol", bonus: 28, price: 6800 },
];

const ELECTRIC: [WeaponDef; 2] = [
    WeaponDef { name: "Arc Saber", bonus: 33, price: 9000 },
    WeaponDef { name: "Tesla Lance", bonus: 38, price: 12000 },
];

const MODERN: [WeaponDef; 2] = [
    WeaponDef { name: "Carbon Blade", bonus: 44, price: 16000 },
    WeaponDef { name: "Railgun", bonus: 50, price: 22000 },
];

/// Armory catalog for an era, cheapest first. Unknown eras have no stock.
pub fn era_weapons(era: i32) -> &'static [WeaponDef] {
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

/// Single armory entry by era and list position.
pub fn weapon(era: i32, id: u8) -> Option<&'static WeaponDef> {
    era_weapons(era).get(id as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eras;

    #[test]
    fn test_every_era_stocks_two_weapons() {
        for era in eras::FIRST_ERA..=eras::LAST_ERA {
            assert_eq!(era_weapons(era).len(), 2, "era {era} catalog");
        }
        assert!(era_weapons(7).is_empty());
        assert!(era_weapons(-2).is_empty());
    }

    #[test]
    fn test_bonus_and_price_strictly_increase() {
        let mut last_bonus = STARTING_WEAPON.bonus;
        let mut last_price = 0;
        for era in eras::FIRST_ERA..=eras::LAST_ERA {
            for def in era_weapons(era) {
                assert!(def.bonus > last_bonus, "{} bonus out of order", def.name);
                assert!(def.price > last_price, "{} price out of order", def.name);
                last_bonus = def.bonus;
                last_price = def.price;
            }
        }
    }

    #[test]
    fn test_damage_bounds_derive_from_bonus() {
        // Iron Sword: bonus 10 -> rolls 15..25.
        let sword = weapon(2, 0).unwrap();
        assert_eq!(sword.min_dmg(), 15);
        assert_eq!(sword.max_dmg(), 25);
        assert!(weapon(2, 9).is_none());
    }
}
