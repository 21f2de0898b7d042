//! Static reference tables for the kingdom simulation.
//!
//! Everything here is compiled-in, read-only data: era names, the armory and
//! merchant catalogs, potion and food prices, enemy stat blocks, policy and
//! building definitions, and the choice-event table. The simulation core
//! looks values up by id and never mutates them; unknown ids miss with
//! `Option::None` so stale saves degrade to no-ops instead of failing.

pub mod buildings;
pub mod choices;
pub mod defines;
pub mod enemies;
pub mod eras;
pub mod foods;
pub mod merchants;
pub mod policies;
pub mod potions;
pub mod weapons;

// Re-export the id types the simulation core names in commands and state.
pub use enemies::Difficulty;
pub use foods::FoodKind;
pub use merchants::{Rarity, UniqueEffect};
pub use policies::PolicyId;
pub use potions::PotionKind;
