//! Core Kernel - Foundational types for the account ledger engine
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Money with precise fixed-point decimal arithmetic
//! - Strongly-typed identifiers for accounts and ledger entries
//! - One-way credential hashing

pub mod credential;
pub mod identifiers;
pub mod money;

pub use credential::{hash_credential, is_valid_credential};
pub use identifiers::{AccountNumber, EntryId};
pub use money::{Money, MoneyError};
