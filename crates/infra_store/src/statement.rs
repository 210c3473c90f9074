//! Statement export
//!
//! Projects an account's ledger into a CSV statement file using the
//! canonical row rendering from the domain.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use core_kernel::AccountNumber;
use domain_bank::{Bank, LedgerEntry};

use crate::error::StoreError;

/// Column header row of every exported statement
const HEADER: &str = "Timestamp,Type,Amount,BalanceAfter,Note";

/// Exports an account's statement as CSV.
///
/// Writes the header row followed by one row per ledger entry in
/// chronological order. Returns false when the account does not exist
/// or the write fails.
pub fn export_statement_csv(
    bank: &Bank,
    number: AccountNumber,
    path: impl AsRef<Path>,
) -> bool {
    let path = path.as_ref();
    let Some(ledger) = bank.ledger_of(number) else {
        warn!(account = %number, "Statement export for unknown account");
        return false;
    };

    match try_export(&ledger, path) {
        Ok(()) => {
            debug!(account = %number, path = %path.display(), "Statement exported");
            true
        }
        Err(error) => {
            warn!(account = %number, path = %path.display(), %error, "Statement export failed");
            false
        }
    }
}

fn try_export(ledger: &[LedgerEntry], path: &Path) -> Result<(), StoreError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{HEADER}")?;
    for entry in ledger {
        writeln!(writer, "{}", entry.csv_row())?;
    }
    writer.flush()?;
    Ok(())
}
