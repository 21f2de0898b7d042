//! Simulation systems invoked by the day pipeline and the command layer.

pub mod buildings;
pub mod choice;
pub mod combat;
pub mod events;
pub mod merchant;
pub mod upkeep;

pub use buildings::run_building_tick;
pub use choice::run_choice_tick;
pub use events::run_event_tick;
pub use merchant::run_merchant_visit;
pub use upkeep::{run_food_tick, run_policy_tick};
