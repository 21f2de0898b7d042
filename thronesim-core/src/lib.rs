//! # Thronesim Core
//!
//! Deterministic simulation core for a single-player kingdom management
//! game: rule a realm day by day, feed it, fight for it, and trade with a
//! travelling merchant until the reign reaches its appointed end.
//!
//! The whole game is expressed as pure state transitions. A [`Ledger`] value
//! holds every resource, flag and sub-state; [`apply_command`] clones it,
//! applies one [`Command`] and returns the next Ledger. All randomness flows
//! through the [`Dice`] trait, so one seed replays one run and scripted dice
//! can reproduce any scenario draw for draw.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐      ┌───────────────┐      ┌───────────────┐
//! │ Driver / bot │─────▶│    Command    │─────▶│ apply_command │
//! │   (decide)   │      │  (one action) │      │   (pure fn)   │
//! └──────────────┘      └───────────────┘      └───────┬───────┘
//!                                                      │
//!                       ┌───────────────┐      ┌───────▼───────┐
//!                       │    LogBook    │◀─────│     Ledger    │
//!                       │  (chronicle)  │      │  (next value) │
//!                       └───────────────┘      └───────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Ledger`] | Complete game state (economy, population, combat, chronicle) |
//! | [`Command`] | One player action (sleep, tax, build, fight, buy, ...) |
//! | [`apply_command`] | Pure transition: `(ledger, dice, command) -> ledger` |
//! | [`Dice`] | Randomness source: inclusive integer and unit-interval draws |
//! | [`LogBook`] | Bounded in-state chronicle a driver can render |

pub mod bounded;
pub mod config;
pub mod dice;
pub mod input;
pub mod logbook;
pub mod state;
pub mod step;
pub mod systems;
pub mod testing;

pub use bounded::BoundedInt;
pub use config::SimConfig;
pub use dice::{Dice, SeededDice};
pub use input::{Command, FightAction};
pub use logbook::{LogBook, LogEntry, LogTag};
pub use state::{Ledger, MerchantOffer};
pub use step::{apply_command, CommandError};
