use serde::{Deserialize, Serialize};

/// Standing rules of the realm. Serialized by name in the save payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PolicyId {
    UniversalTax,
    CharityRelief,
    RoyalFestival,
    PublicHealth,
    OpenBorders,
    ElectricWelfare,
    FoodRationing,
}

/// One policy definition. Locked policies cannot be toggled; the unlock is a
/// random-event side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDef {
    pub id: PolicyId,
    pub name: &'static str,
    pub desc: &'static str,
    pub starts_locked: bool,
}

/// Canonical order. Daily upkeep runs through this list top to bottom.
pub const POLICIES: [PolicyDef; 7] = [
    PolicyDef {
        id: PolicyId::UniversalTax,
        name: "Universal Tax",
        desc: "A daily levy squeezes 20 to 50 gold from the realm but sours the mood.",
        starts_locked: false,
    },
    PolicyDef {
        id: PolicyId::CharityRelief,
        name: "Charity Relief",
        desc: "Spend 30 gold a day feeding the poor; the commons take heart.",
        starts_locked: true,
    },
    PolicyDef {
        id: PolicyId::RoyalFestival,
        name: "Royal Festival",
        desc: "Every fifth day the court throws open its feast halls.",
        starts_locked: true,
    },
    PolicyDef {
        id: PolicyId::PublicHealth,
        name: "Public Health",
        desc: "Physicians watch the wells; sickness rarely takes hold.",
        starts_locked: true,
    },
    PolicyDef {
        id: PolicyId::OpenBorders,
        name: "Open Borders",
        desc: "Travelers may settle freely; newcomers trickle in.",
        starts_locked: true,
    },
    PolicyDef {
        id: PolicyId::ElectricWelfare,
        name: "Electric Welfare",
        desc: "Modern safeguards blunt disasters in the Electric Age.",
        starts_locked: true,
    },
    PolicyDef {
        id: PolicyId::FoodRationing,
        name: "Food Rationing",
        desc: "Strict portions cut the kingdom's bread consumption by a quarter.",
        starts_locked: true,
    },
];

pub fn policy(id: PolicyId) -> &'static PolicyDef {
    match id {
        PolicyId::UniversalTax => &POLICIES[0],
        PolicyId::CharityRelief => &POLICIES[1],
        PolicyId::RoyalFestival => &POLICIES[2],
        PolicyId::PublicHealth => &POLICIES[3],
        PolicyId::OpenBorders => &POLICIES[4],
        PolicyId::ElectricWelfare => &POLICIES[5],
        PolicyId::FoodRationing => &POLICIES[6],
    }
}
