//! Journal entry and entry line domain types.

use chrono::NaiveDate;
use razonete_shared::types::{AccountId, JournalEntryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tax::{TaxBreakdown, TaxRates};

/// Snapshot of the tax amounts and the rates that produced them,
/// persisted on the main line of a decomposed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSnapshot {
    /// Rates supplied by the caller.
    pub rates: TaxRates,
    /// Amounts calculated from those rates.
    pub amounts: TaxBreakdown,
}

/// A single line of a journal entry.
///
/// Exactly one of `debit`/`credit` is the active side; the other is zero.
/// Both positive on the same line is a domain invariant violation and is
/// prevented by the constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryLine {
    /// The journal entry this line belongs to.
    pub journal_entry_id: JournalEntryId,
    /// The account affected by this line.
    pub account_id: AccountId,
    /// Debit amount (zero when this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero when this is a debit line).
    pub credit: Decimal,
    /// Linked product, for inventory-affecting lines.
    pub product_id: Option<ProductId>,
    /// Product quantity.
    pub quantity: Option<Decimal>,
    /// Unit cost at posting time.
    pub unit_cost: Option<Decimal>,
    /// Gross transaction total (main line only).
    pub total_gross: Option<Decimal>,
    /// Net transaction total (main line only).
    pub total_net: Option<Decimal>,
    /// Tax snapshot (main line only).
    pub taxes: Option<TaxSnapshot>,
}

impl EntryLine {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(journal_entry_id: JournalEntryId, account_id: AccountId, amount: Decimal) -> Self {
        Self {
            journal_entry_id,
            account_id,
            debit: amount,
            credit: Decimal::ZERO,
            product_id: None,
            quantity: None,
            unit_cost: None,
            total_gross: None,
            total_net: None,
            taxes: None,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(
        journal_entry_id: JournalEntryId,
        account_id: AccountId,
        amount: Decimal,
    ) -> Self {
        Self {
            journal_entry_id,
            account_id,
            debit: Decimal::ZERO,
            credit: amount,
            product_id: None,
            quantity: None,
            unit_cost: None,
            total_gross: None,
            total_net: None,
            taxes: None,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Returns true when at most one side carries a positive amount.
    #[must_use]
    pub fn is_one_sided(&self) -> bool {
        !(self.debit > Decimal::ZERO && self.credit > Decimal::ZERO)
    }
}

/// A journal entry with its lines attached.
///
/// Invariant: the sum of `debit` across lines equals the sum of `credit`
/// across lines. The engine checks this via [`crate::ledger::is_balanced`];
/// enforcement on persisted data is the storage collaborator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Date the entry was recorded for.
    pub entry_date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// The entry's lines, in display order.
    pub lines: Vec<EntryLine>,
}
