//! Commands: the complete set of player actions.

use serde::{Deserialize, Serialize};

use thronedata::{Difficulty, FoodKind, PolicyId, PotionKind};

/// One discrete player action. A command either applies fully or is refused
/// with a single log entry; there are no partial applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// End the day and run the overnight pipeline.
    Sleep,
    /// Levy gold from every citizen. Costs strength, costs goodwill.
    CollectTax,
    /// Pay wages to every citizen. Costs gold, buys goodwill.
    PayCitizens,
    /// Advance the kingdom into the next era.
    Expand,
    Build { building: u16 },
    /// Buy from the armory of an era already reached.
    BuyWeapon { era: i32, weapon: u8 },
    BuyPotion { kind: PotionKind },
    BuyFood { kind: FoodKind, amount: u32 },
    /// Drink a court potion (strength or cheer). Combat potions are spent
    /// through [`Command::FightAction`] instead.
    UsePotion { kind: PotionKind },
    /// Burn one meat, one cheese and one apples for a morale boost.
    Feast,
    TogglePolicy { policy: PolicyId },
    StartFight { difficulty: Difficulty },
    FightAction { action: FightAction },
    /// Accept the outstanding merchant offer.
    BuyMerchant,
    /// Answer the pending court dilemma with option 0 or 1.
    ResolveChoice { option: u8 },
}

/// One combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FightAction {
    /// Swing the equipped weapon.
    Strike,
    /// Raise the shield; the roll reduces the incoming hit instead.
    Block,
    /// Drink a health potion and end the turn at once.
    Heal,
    /// Drink a damage potion and strike with +10 on the roll.
    DamagePotion,
    /// Stun the enemy for its next attack.
    Lightning,
    /// Stun the enemy for its next attack.
    SleepPotion,
    /// Poison the enemy for three ticks.
    Poison,
}
