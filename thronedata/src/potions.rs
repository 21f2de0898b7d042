use serde::{Deserialize, Serialize};

/// Strength restored by drinking a strength potion outside combat.
pub const STRENGTH_POTION_GAIN: u32 = 2;

/// Happiness granted by drinking a cheer potion.
pub const CHEER_POTION_GAIN: i64 = 5;

/// The seven brews the apothecary stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    Health,
    Damage,
    Lightning,
    Sleep,
    Poison,
    Strength,
    Cheer,
}

impl PotionKind {
    pub const ALL: [PotionKind; 7] = [
        PotionKind::Health,
        PotionKind::Damage,
        PotionKind::Lightning,
        PotionKind::Sleep,
        PotionKind::Poison,
        PotionKind::Strength,
        PotionKind::Cheer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PotionKind::Health => "Health Potion",
            PotionKind::Damage => "Damage Potion",
            PotionKind::Lightning => "Lightning Potion",
            PotionKind::Sleep => "Sleep Potion",
            PotionKind::Poison => "Poison Potion",
            PotionKind::Strength => "Strength Potion",
            PotionKind::Cheer => "Cheer Potion",
        }
    }

    /// Shop price in gold.
    pub fn price(self) -> i64 {
        match self {
            PotionKind::Health => 40,
            PotionKind::Damage => 50,
            PotionKind::Lightning => 60,
            PotionKind::Sleep => 55,
            PotionKind::Poison => 65,
            PotionKind::Strength => 45,
            PotionKind::Cheer => 35,
        }
    }

    /// Brews that only act inside a fight; the rest are drunk at court.
    pub fn is_combat(self) -> bool {
        !matches!(self, PotionKind::Strength | PotionKind::Cheer)
    }
}
