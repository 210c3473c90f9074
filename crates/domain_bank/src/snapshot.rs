//! Serializable image of the full engine state
//!
//! The snapshot is the persistence contract: every account, every
//! ledger entry in order, and the account-number sequence counter.
//! The on-disk format is whatever the infrastructure layer chooses to
//! serialize this type as.

use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Full engine state captured under the engine lock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSnapshot {
    /// Next value of the account-number sequence
    pub next_sequence: u64,
    /// Every open account, with its complete ledger
    pub accounts: Vec<Account>,
}
