//! Double-entry bookkeeping logic.
//!
//! This module implements the core ledger functionality:
//! - Account and journal entry domain types
//! - Entry lines (debits and credits) with tax snapshots
//! - The double-entry balance invariant check
//! - Per-account aggregation into trial-balance summaries

pub mod account;
pub mod aggregate;
pub mod entry;
pub mod validation;

#[cfg(test)]
mod aggregate_props;

pub use account::{Account, AccountNature, AccountType};
pub use aggregate::{aggregate, AccountSummary};
pub use entry::{EntryLine, JournalEntry, TaxSnapshot};
pub use validation::{is_balanced, line_totals, LineTotals, BALANCE_TOLERANCE};
