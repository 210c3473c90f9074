//! Bank Domain - Account Ledger Engine
//!
//! This crate implements the account/ledger engine: money-safe balance
//! mutation, an immutable per-account transaction ledger, and atomic
//! inter-account transfers.
//!
//! # Invariants
//!
//! - Every balance equals its opening deposit plus the sum of signed
//!   deltas of all ledger entries
//! - Ledgers are strictly append-only; entries are never mutated
//! - At most one mutating operation executes at a time across the
//!   entire account collection (single engine-wide lock)
//! - A transfer either applies both legs or neither; no observer can
//!   see only one leg
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_bank::Bank;
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let bank = Bank::new();
//! let a = bank.create_account("Ada", "1234", Some(Money::new(dec!(100.00))))?;
//! let b = bank.create_account("Grace", "5678", None)?;
//!
//! let outcome = bank.transfer(a.account_number, b.account_number, Money::new(dec!(75.00)))?;
//! assert!(outcome.is_completed());
//! ```

pub mod account;
pub mod bank;
pub mod entry;
pub mod error;
pub mod snapshot;

pub use account::Account;
pub use bank::{AccountView, Bank};
pub use entry::{EntryKind, LedgerEntry};
pub use error::{BankError, Outcome};
pub use snapshot::BankSnapshot;
