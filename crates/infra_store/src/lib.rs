//! Infrastructure Storage Layer
//!
//! This crate provides the file-based persistence for the ledger
//! engine: an opaque JSON snapshot of the full engine state, and CSV
//! statement export.
//!
//! Failure handling follows the engine's boundary contract: loading a
//! missing or corrupt snapshot yields a fresh empty engine instead of
//! an error, and save/export report success through a boolean while
//! logging the cause of any failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{load, save, export_statement_csv};
//!
//! let bank = load("bank.json");
//! let account = bank.create_account("Ada", "1234", None)?;
//! save("bank.json", &bank);
//! export_statement_csv(&bank, account.account_number, "statement.csv");
//! ```

pub mod error;
pub mod snapshot;
pub mod statement;

pub use error::StoreError;
pub use snapshot::{load, save};
pub use statement::export_statement_csv;
