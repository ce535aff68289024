//! The double-entry balance invariant check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::EntryLine;

/// Fixed tolerance for comparing debit and credit totals.
///
/// Absorbs rounding differences up to one minor currency unit.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Debit and credit totals for a set of entry lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Sum of all debit amounts.
    pub debits: Decimal,
    /// Sum of all credit amounts.
    pub credits: Decimal,
    /// Whether the totals agree within [`BALANCE_TOLERANCE`].
    pub is_balanced: bool,
}

impl LineTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debits: Decimal, credits: Decimal) -> Self {
        Self {
            debits,
            credits,
            is_balanced: (debits - credits).abs() <= BALANCE_TOLERANCE,
        }
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debits - self.credits
    }

    /// Checks the totals against a caller-supplied tolerance, e.g. the
    /// configured `posting.balance_tolerance`.
    #[must_use]
    pub fn is_balanced_within(&self, tolerance: Decimal) -> bool {
        self.difference().abs() <= tolerance
    }
}

/// Sums the debit and credit sides of a set of entry lines.
#[must_use]
pub fn line_totals(lines: &[EntryLine]) -> LineTotals {
    let debits: Decimal = lines.iter().map(|l| l.debit).sum();
    let credits: Decimal = lines.iter().map(|l| l.credit).sum();
    LineTotals::new(debits, credits)
}

/// Checks the double-entry invariant over a set of entry lines.
///
/// An empty line set is balanced by definition (vacuous truth). This is a
/// deliberate policy: callers probe entries that have not yet received
/// lines, and those must not read as corrupt.
///
/// The check is pure and reports a boolean; whether an unbalanced entry is
/// rejected is the caller's decision.
#[must_use]
pub fn is_balanced(lines: &[EntryLine]) -> bool {
    line_totals(lines).is_balanced
}
