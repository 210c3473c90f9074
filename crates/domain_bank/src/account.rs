//! Account state and balance-mutation primitives
//!
//! An account owns its balance and its append-only ledger. Every
//! mutation goes through the primitives here, each of which records
//! exactly one ledger entry.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountNumber, Money};

use crate::entry::{EntryKind, LedgerEntry};
use crate::error::{BankError, Outcome};

/// A bank account: identity, balance, and ledger history.
///
/// # Invariants
///
/// - `balance` equals the `balance_after` of the most recent entry
/// - `balance` equals the sum of signed deltas of all entries
/// - the ledger is append-only; entries are never mutated or removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    credential_hash: String,
    balance: Money,
    ledger: Vec<LedgerEntry>,
}

impl Account {
    /// Creates an account with an opening balance.
    ///
    /// Writes the `INITIAL` entry whose amount and balance both equal
    /// the opening balance, establishing the base case for the balance
    /// invariant.
    pub(crate) fn new(
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        credential_hash: impl Into<String>,
        opening_balance: Money,
    ) -> Self {
        let mut account = Self {
            account_number,
            holder_name: holder_name.into(),
            credential_hash: credential_hash.into(),
            balance: opening_balance,
            ledger: Vec::new(),
        };
        account.record(
            EntryKind::Initial,
            opening_balance,
            Some("Account opened".to_string()),
        );
        account
    }

    /// Returns the account number
    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Returns the holder's name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Returns the stored credential digest
    pub(crate) fn credential_hash(&self) -> &str {
        &self.credential_hash
    }

    /// Returns the current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns the ledger as an immutable view, oldest entry first
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Deposits a positive amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when the amount is not strictly positive.
    pub fn deposit(&mut self, amount: Money) -> Result<(), BankError> {
        require_positive(amount)?;
        self.balance = self.balance + amount;
        self.record(EntryKind::Deposit, amount, None);
        Ok(())
    }

    /// Withdraws a positive amount if funds are sufficient.
    ///
    /// Insufficient funds is a declined business outcome, not an error;
    /// nothing is mutated on a decline.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when the amount is not strictly positive.
    pub fn withdraw(&mut self, amount: Money) -> Result<Outcome, BankError> {
        require_positive(amount)?;
        if self.balance < amount {
            return Ok(Outcome::Declined);
        }
        self.balance = self.balance - amount;
        self.record(EntryKind::Withdrawal, amount, None);
        Ok(Outcome::Completed)
    }

    /// Debit leg of a transfer. Sufficiency is checked by the engine
    /// before either leg runs, never here.
    pub(crate) fn transfer_out(&mut self, amount: Money, counterparty: AccountNumber) {
        self.balance = self.balance - amount;
        self.record(
            EntryKind::TransferOut,
            amount,
            Some(format!("to {counterparty}")),
        );
    }

    /// Credit leg of a transfer
    pub(crate) fn transfer_in(&mut self, amount: Money, counterparty: AccountNumber) {
        self.balance = self.balance + amount;
        self.record(
            EntryKind::TransferIn,
            amount,
            Some(format!("from {counterparty}")),
        );
    }

    /// Appends the ledger entry for a mutation that was just applied
    fn record(&mut self, kind: EntryKind, amount: Money, note: Option<String>) {
        let floor = self.ledger.last().map(|e| e.timestamp);
        self.ledger
            .push(LedgerEntry::new(kind, amount, self.balance, note, floor));
    }
}

/// Rejects zero and negative amounts
fn require_positive(amount: Money) -> Result<(), BankError> {
    if !amount.is_positive() {
        return Err(BankError::invalid_amount("Amount must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_account(opening: Money) -> Account {
        Account::new(AccountNumber::new(100100), "Ada Lovelace", "digest", opening)
    }

    fn ledger_sum(account: &Account) -> Money {
        account
            .ledger()
            .iter()
            .fold(Money::zero(), |acc, e| acc + e.signed_delta())
    }

    #[test]
    fn test_new_account_writes_initial_entry() {
        let account = test_account(Money::new(dec!(100.00)));

        assert_eq!(account.balance(), Money::new(dec!(100.00)));
        assert_eq!(account.ledger().len(), 1);

        let initial = &account.ledger()[0];
        assert_eq!(initial.kind, EntryKind::Initial);
        assert_eq!(initial.amount, Money::new(dec!(100.00)));
        assert_eq!(initial.balance_after, Money::new(dec!(100.00)));
    }

    #[test]
    fn test_deposit_appends_entry_with_empty_note() {
        let mut account = test_account(Money::new(dec!(100.00)));

        account.deposit(Money::new(dec!(50.00))).unwrap();

        assert_eq!(account.balance(), Money::new(dec!(150.00)));
        assert_eq!(account.ledger().len(), 2);

        let entry = &account.ledger()[1];
        assert_eq!(entry.kind, EntryKind::Deposit);
        assert_eq!(entry.amount, Money::new(dec!(50.00)));
        assert_eq!(entry.balance_after, Money::new(dec!(150.00)));
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = test_account(Money::zero());

        assert_eq!(
            account.deposit(Money::zero()),
            Err(BankError::invalid_amount("Amount must be positive"))
        );
        assert!(account.deposit(Money::new(dec!(-5.00))).is_err());
        assert_eq!(account.ledger().len(), 1);
    }

    #[test]
    fn test_withdraw_insufficient_funds_is_declined_not_error() {
        let mut account = test_account(Money::new(dec!(150.00)));

        let outcome = account.withdraw(Money::new(dec!(200.00))).unwrap();

        assert!(outcome.is_declined());
        assert_eq!(account.balance(), Money::new(dec!(150.00)));
        assert_eq!(account.ledger().len(), 1);
    }

    #[test]
    fn test_withdraw_exact_balance_completes() {
        let mut account = test_account(Money::new(dec!(75.00)));

        let outcome = account.withdraw(Money::new(dec!(75.00))).unwrap();

        assert!(outcome.is_completed());
        assert_eq!(account.balance(), Money::zero());
    }

    #[test]
    fn test_transfer_legs_annotate_counterparty() {
        let mut account = test_account(Money::new(dec!(100.00)));
        let other = AccountNumber::new(100101);

        account.transfer_out(Money::new(dec!(25.00)), other);
        account.transfer_in(Money::new(dec!(10.00)), other);

        let out = &account.ledger()[1];
        assert_eq!(out.kind, EntryKind::TransferOut);
        assert_eq!(out.note.as_deref(), Some("to ACC100101"));

        let inc = &account.ledger()[2];
        assert_eq!(inc.kind, EntryKind::TransferIn);
        assert_eq!(inc.note.as_deref(), Some("from ACC100101"));

        assert_eq!(account.balance(), Money::new(dec!(85.00)));
    }

    #[test]
    fn test_balance_equals_sum_of_signed_deltas() {
        let mut account = test_account(Money::new(dec!(10.00)));
        account.deposit(Money::new(dec!(5.50))).unwrap();
        let _ = account.withdraw(Money::new(dec!(2.25))).unwrap();
        account.transfer_in(Money::new(dec!(1.00)), AccountNumber::new(100101));

        assert_eq!(account.balance(), ledger_sum(&account));
        assert_eq!(
            account.balance(),
            account.ledger().last().unwrap().balance_after
        );
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut account = test_account(Money::new(dec!(10.00)));
        for _ in 0..5 {
            account.deposit(Money::new(dec!(1.00))).unwrap();
        }

        let stamps: Vec<_> = account.ledger().iter().map(|e| e.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
