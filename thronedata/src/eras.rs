/// First era a fresh kingdom starts in.
pub const FIRST_ERA: i32 = -1;

/// Final era; expansion stops here.
pub const LAST_ERA: i32 = 6;

/// Era index the Electric Welfare policy keys off.
pub const ELECTRIC_ERA: i32 = 5;

/// Era names in progression order; index into this list is `era + 1`.
const ERA_NAMES: [&str; 8] = [
    "Encampment",
    "Stone Age",
    "Bronze Age",
    "Iron Age",
    "Medieval Age",
    "Renaissance",
    "Electric Age",
    "Modern Age",
];

/// Display name for an era index. Out-of-range indices clamp to the nearest
/// valid era so stale saves still render something sensible.
pub fn era_name(era: i32) -> &'static str {
    let clamped = era.clamp(FIRST_ERA, LAST_ERA);
    ERA_NAMES[(clamped - FIRST_ERA) as usize]
}
