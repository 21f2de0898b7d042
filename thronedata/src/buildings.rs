/// One constructable structure and its daily yield. Each can be built once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingDef {
    pub id: u16,
    pub name: &'static str,
    pub cost: i64,
    /// Daily gold yield.
    pub money: i64,
    /// Daily bread yield.
    pub bread: i64,
    /// Daily happiness yield.
    pub happiness: i64,
}

pub const BUILDINGS: [BuildingDef; 5] = [
    BuildingDef { id: 0, name: "Grain Mill", cost: 350, money: 0, bread: 4, happiness: 0 },
    BuildingDef { id: 1, name: "Marketplace", cost: 500, money: 25, bread: 0, happiness: 0 },
    BuildingDef { id: 2, name: "Amphitheater", cost: 650, money: 0, bread: 0, happiness: 2 },
    BuildingDef { id: 3, name: "Trading Post", cost: 900, money: 40, bread: 0, happiness: 1 },
    BuildingDef { id: 4, name: "Granary", cost: 550, money: 0, bread: 6, happiness: 0 },
];

/// Lookup by id. Stale ids from old saves miss and are skipped by callers.
pub fn building(id: u16) -> Option<&'static BuildingDef> {
    BUILDINGS.iter().find(|b| b.id == id)
}
