//! Snapshot persistence
//!
//! Saves and loads the engine's full state as a JSON image. The load
//! path never fails: a missing, unreadable, or corrupt snapshot yields
//! a fresh empty engine, and the reason is logged rather than raised.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use domain_bank::{Bank, BankSnapshot};

use crate::error::StoreError;

/// Loads an engine from a snapshot file.
///
/// Returns an empty engine when the file does not exist or the snapshot
/// cannot be read or parsed.
pub fn load(path: impl AsRef<Path>) -> Bank {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "No snapshot file; starting empty");
        return Bank::new();
    }

    match try_load(path) {
        Ok(bank) => bank,
        Err(error) => {
            warn!(path = %path.display(), %error, "Unreadable snapshot; starting empty");
            Bank::new()
        }
    }
}

/// Saves the engine's state to a snapshot file.
///
/// Returns whether the write succeeded; failures are logged. The file
/// handle is released on every exit path.
pub fn save(path: impl AsRef<Path>, bank: &Bank) -> bool {
    let path = path.as_ref();
    match try_save(path, bank) {
        Ok(()) => {
            debug!(path = %path.display(), "Snapshot saved");
            true
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "Snapshot save failed");
            false
        }
    }
}

fn try_load(path: &Path) -> Result<Bank, StoreError> {
    let bytes = fs::read(path)?;
    let snapshot: BankSnapshot = serde_json::from_slice(&bytes)?;
    Ok(Bank::restore(snapshot))
}

fn try_save(path: &Path, bank: &Bank) -> Result<(), StoreError> {
    let image = serde_json::to_vec_pretty(&bank.snapshot())?;
    fs::write(path, image)?;
    Ok(())
}
