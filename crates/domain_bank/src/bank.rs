//! The ledger engine
//!
//! `Bank` owns every account, mints account numbers from a monotonic
//! sequence, and serializes all access behind one engine-wide lock so
//! that no caller can observe a half-applied mutation.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{hash_credential, is_valid_credential, AccountNumber, Money};

use crate::account::Account;
use crate::entry::LedgerEntry;
use crate::error::{BankError, Outcome};
use crate::snapshot::BankSnapshot;

/// First value of the account-number sequence
const FIRST_ACCOUNT_NUMBER: u64 = 100_100;

/// Read projection of an account handed across the engine boundary.
///
/// Views are snapshots taken under the engine lock; they never expose
/// the credential digest and cannot mutate engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub account_number: AccountNumber,
    pub holder_name: String,
    pub balance: Money,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            account_number: account.account_number(),
            holder_name: account.holder_name().to_string(),
            balance: account.balance(),
        }
    }
}

/// Mutable engine state guarded by the engine-wide lock
#[derive(Debug)]
struct BankState {
    accounts: BTreeMap<AccountNumber, Account>,
    next_sequence: u64,
}

impl BankState {
    /// Mints the next account number. Values are never reused, even
    /// after an account is closed.
    fn mint_account_number(&mut self) -> AccountNumber {
        let number = AccountNumber::new(self.next_sequence);
        self.next_sequence += 1;
        number
    }
}

/// The account collection and transfer engine.
///
/// Every public operation acquires the single engine-wide lock for its
/// whole duration, so at most one mutating operation is in flight at a
/// time and the two legs of a transfer are applied as one atomic step.
/// Operations are bounded and synchronous; none suspends or blocks
/// indefinitely.
#[derive(Debug)]
pub struct Bank {
    state: Mutex<BankState>,
}

impl Bank {
    /// Creates an empty engine
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BankState {
                accounts: BTreeMap::new(),
                next_sequence: FIRST_ACCOUNT_NUMBER,
            }),
        }
    }

    /// Creates an account with a hashed credential and optional opening
    /// deposit.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when the holder name is empty after trimming
    ///   or the credential is not 4-6 digits
    /// - `InvalidAmount` when the opening deposit is negative
    pub fn create_account(
        &self,
        holder_name: &str,
        credential: &str,
        opening_deposit: Option<Money>,
    ) -> Result<AccountView, BankError> {
        let holder_name = holder_name.trim();
        if holder_name.is_empty() {
            return Err(BankError::invalid_argument("Holder name required"));
        }
        if !is_valid_credential(credential) {
            return Err(BankError::invalid_argument(
                "Credential must be 4-6 digits",
            ));
        }
        let opening = opening_deposit.unwrap_or_else(Money::zero);
        if opening.is_negative() {
            return Err(BankError::invalid_amount(
                "Opening deposit cannot be negative",
            ));
        }

        let mut state = self.state.lock();
        let number = state.mint_account_number();
        let account = Account::new(number, holder_name, hash_credential(credential), opening);
        let view = AccountView::from(&account);
        state.accounts.insert(number, account);

        info!(account = %number, "Account created");
        Ok(view)
    }

    /// Looks up an account; absence is not an error
    pub fn get_account(&self, number: AccountNumber) -> Option<AccountView> {
        let state = self.state.lock();
        state.accounts.get(&number).map(AccountView::from)
    }

    /// Authenticates with an account number and credential.
    ///
    /// Unknown account and wrong credential both report the same `None`,
    /// so callers cannot enumerate account numbers.
    pub fn authenticate(&self, number: AccountNumber, credential: &str) -> Option<AccountView> {
        let state = self.state.lock();
        let account = state.accounts.get(&number)?;
        if hash_credential(credential) != account.credential_hash() {
            return None;
        }
        Some(AccountView::from(account))
    }

    /// Deposits into an account, returning the balance after.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when the account is absent, `InvalidAmount`
    /// when the amount is not strictly positive.
    pub fn deposit(&self, number: AccountNumber, amount: Money) -> Result<Money, BankError> {
        let mut state = self.state.lock();
        let account = state
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound(number))?;
        account.deposit(amount)?;

        debug!(account = %number, %amount, "Deposit applied");
        Ok(account.balance())
    }

    /// Withdraws from an account.
    ///
    /// Returns `Outcome::Declined` (with no mutation) when funds are
    /// insufficient.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` when the account is absent, `InvalidAmount`
    /// when the amount is not strictly positive.
    pub fn withdraw(&self, number: AccountNumber, amount: Money) -> Result<Outcome, BankError> {
        let mut state = self.state.lock();
        let account = state
            .accounts
            .get_mut(&number)
            .ok_or(BankError::AccountNotFound(number))?;
        let outcome = account.withdraw(amount)?;

        debug!(account = %number, %amount, declined = outcome.is_declined(), "Withdrawal processed");
        Ok(outcome)
    }

    /// Transfers between two accounts as a single atomic step.
    ///
    /// Validation order: same-account, existence of both accounts,
    /// amount positivity, then sufficiency. A decline mutates nothing;
    /// on success the debit leg runs before the credit leg under the
    /// same lock acquisition, so no observer ever sees only one leg.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for a same-account transfer
    /// - `AccountNotFound` when either account is absent
    /// - `InvalidAmount` when the amount is not strictly positive
    pub fn transfer(
        &self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Money,
    ) -> Result<Outcome, BankError> {
        if from == to {
            return Err(BankError::invalid_argument(
                "Cannot transfer to the same account",
            ));
        }

        let mut state = self.state.lock();
        let from_balance = state
            .accounts
            .get(&from)
            .map(Account::balance)
            .ok_or(BankError::AccountNotFound(from))?;
        if !state.accounts.contains_key(&to) {
            return Err(BankError::AccountNotFound(to));
        }
        if !amount.is_positive() {
            return Err(BankError::invalid_amount("Amount must be positive"));
        }
        if from_balance < amount {
            debug!(%from, %to, %amount, "Transfer declined: insufficient funds");
            return Ok(Outcome::Declined);
        }

        // Existence of both accounts was checked above under this same
        // lock acquisition.
        state.accounts.get_mut(&from).unwrap().transfer_out(amount, to);
        state.accounts.get_mut(&to).unwrap().transfer_in(amount, from);

        info!(%from, %to, %amount, "Transfer completed");
        Ok(Outcome::Completed)
    }

    /// Closes an account, forfeiting its ledger permanently.
    ///
    /// Returns whether the account existed. The account number is never
    /// reissued.
    pub fn close_account(&self, number: AccountNumber) -> bool {
        let mut state = self.state.lock();
        let existed = state.accounts.remove(&number).is_some();
        if existed {
            info!(account = %number, "Account closed");
        }
        existed
    }

    /// Lists all accounts in ascending account-number order
    pub fn list_accounts(&self) -> Vec<AccountView> {
        let state = self.state.lock();
        state.accounts.values().map(AccountView::from).collect()
    }

    /// Returns an owned copy of an account's ledger, oldest entry first
    pub fn ledger_of(&self, number: AccountNumber) -> Option<Vec<LedgerEntry>> {
        let state = self.state.lock();
        state.accounts.get(&number).map(|a| a.ledger().to_vec())
    }

    /// Returns the current balance of an account
    pub fn balance_of(&self, number: AccountNumber) -> Option<Money> {
        let state = self.state.lock();
        state.accounts.get(&number).map(Account::balance)
    }

    /// Captures the full engine state for persistence
    pub fn snapshot(&self) -> BankSnapshot {
        let state = self.state.lock();
        BankSnapshot {
            next_sequence: state.next_sequence,
            accounts: state.accounts.values().cloned().collect(),
        }
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// The sequence counter is bumped past the highest restored account
    /// number so a stale counter can never mint a duplicate.
    pub fn restore(snapshot: BankSnapshot) -> Self {
        let highest = snapshot
            .accounts
            .iter()
            .map(|a| a.account_number().value())
            .max();
        let next_sequence = snapshot
            .next_sequence
            .max(highest.map_or(FIRST_ACCOUNT_NUMBER, |h| h + 1));

        let accounts = snapshot
            .accounts
            .into_iter()
            .map(|a| (a.account_number(), a))
            .collect();

        Self {
            state: Mutex::new(BankState {
                accounts,
                next_sequence,
            }),
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
