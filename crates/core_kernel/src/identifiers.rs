//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers prevent accidental mixing of identifier kinds and
//! keep display formatting in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for account numbers
const ACCOUNT_PREFIX: &str = "ACC";

/// A unique account number minted from the engine's monotonic sequence.
///
/// Account numbers order numerically, not lexicographically, so listings
/// stay sorted even when the sequence grows another digit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Creates an account number from its raw sequence value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ACCOUNT_PREFIX, self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "ACC100100" and "100100"
        let digits = s.strip_prefix(ACCOUNT_PREFIX).unwrap_or(s);
        Ok(Self(digits.parse()?))
    }
}

impl From<u64> for AccountNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Unique identifier for a single ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
