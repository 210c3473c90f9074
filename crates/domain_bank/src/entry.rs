//! Ledger entry types
//!
//! This module defines the immutable record written for every
//! balance-affecting event on an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{EntryId, Money};

/// Timestamp rendering shared by the display and CSV forms
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of balance-affecting event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Opening entry written when the account is created
    Initial,
    /// Cash paid into the account
    Deposit,
    /// Cash taken out of the account
    Withdrawal,
    /// Credit leg of an inter-account transfer
    TransferIn,
    /// Debit leg of an inter-account transfer
    TransferOut,
}

impl EntryKind {
    /// Canonical wire/display name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Initial => "INITIAL",
            EntryKind::Deposit => "DEPOSIT",
            EntryKind::Withdrawal => "WITHDRAWAL",
            EntryKind::TransferIn => "TRANSFER_IN",
            EntryKind::TransferOut => "TRANSFER_OUT",
        }
    }

    /// True for kinds that increase the balance
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            EntryKind::Initial | EntryKind::Deposit | EntryKind::TransferIn
        )
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable record in an account's ledger.
///
/// Entries are constructed once and never mutated; the ledger they live
/// in is strictly append-only. `amount` is the magnitude of the event,
/// never a signed delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry identifier
    pub id: EntryId,
    /// When the entry was applied
    pub timestamp: DateTime<Utc>,
    /// Kind of event
    pub kind: EntryKind,
    /// Magnitude of the event
    pub amount: Money,
    /// Account balance immediately after this entry
    pub balance_after: Money,
    /// Optional annotation (e.g. counterparty account number)
    pub note: Option<String>,
}

impl LedgerEntry {
    /// Creates a new entry stamped with the current time.
    ///
    /// The timestamp is clamped to `floor` so a sequence of entries is
    /// monotonically non-decreasing even if the wall clock steps back.
    pub(crate) fn new(
        kind: EntryKind,
        amount: Money,
        balance_after: Money,
        note: Option<String>,
        floor: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        let timestamp = match floor {
            Some(floor) if now < floor => floor,
            _ => now,
        };

        Self {
            id: EntryId::new(),
            timestamp,
            kind,
            amount,
            balance_after,
            note,
        }
    }

    /// Signed contribution of this entry to the balance
    pub fn signed_delta(&self) -> Money {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Canonical delimited-row rendering for statement export.
    ///
    /// The note is always quoted, even when empty, and embedded quote
    /// characters are escaped by doubling.
    pub fn csv_row(&self) -> String {
        let note = self.note.as_deref().unwrap_or("");
        format!(
            "{},{},{},{},\"{}\"",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount,
            self.balance_after,
            note.replace('"', "\"\""),
        )
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | Bal: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount,
            self.balance_after,
        )?;
        match self.note.as_deref() {
            Some(note) if !note.is_empty() => write!(f, " | {note}"),
            _ => Ok(()),
        }
    }
}
