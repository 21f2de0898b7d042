//! Reading and writing ledger save files.
//!
//! Saves are pretty-printed JSON so a curious player can open one in a
//! text editor and poke at their kingdom.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thronesim_core::Ledger;

/// Writes the ledger to `path` as pretty JSON.
pub fn save_ledger(ledger: &Ledger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger).context("Failed to serialize the ledger")?;
    fs::write(path, json).with_context(|| format!("Failed to write save file {:?}", path))?;
    Ok(())
}

/// Reads a ledger back from `path`.
pub fn load_ledger(path: &Path) -> Result<Ledger> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read save file {:?}", path))?;
    let ledger = serde_json::from_str(&json)
        .with_context(|| format!("Save file {:?} is not a valid chronicle", path))?;
    Ok(ledger)
}
