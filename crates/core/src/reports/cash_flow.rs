//! Cash flow classification.
//!
//! Movements on cash-like accounts are bucketed into operating, investing,
//! and financing activities by looking at the *other* accounts in the same
//! journal entry. Classification is name- and type-based; anything
//! unrecognized falls into operating as the conservative default.

use std::collections::HashMap;

use razonete_shared::types::AccountId;
use rust_decimal::Decimal;

use crate::ledger::{Account, AccountType, JournalEntry};

/// Cash deltas per activity bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ActivityTotals {
    pub operating: Decimal,
    pub investing: Decimal,
    pub financing: Decimal,
}

impl ActivityTotals {
    pub(super) fn net(&self) -> Decimal {
        self.operating + self.investing + self.financing
    }
}

/// Whether an account holds cash or cash equivalents, by name.
pub(super) fn is_cash_like(account: &Account) -> bool {
    let name = account.name.to_lowercase();
    account.account_type == AccountType::Asset
        && ["cash", "bank", "caixa", "banco"]
            .iter()
            .any(|kw| name.contains(kw))
}

/// Whether an asset account looks like a fixed asset (investing bucket).
fn is_fixed_asset_name(name: &str) -> bool {
    let name = name.to_lowercase();
    [
        "equipment",
        "imobilizado",
        "property",
        "vehicle",
        "machin",
        "máquina",
        "invest",
    ]
    .iter()
    .any(|kw| name.contains(kw))
}

/// Whether a liability account looks like borrowed funds (financing bucket).
fn is_loan_name(name: &str) -> bool {
    let name = name.to_lowercase();
    ["loan", "emprést", "emprest", "financ", "capital"]
        .iter()
        .any(|kw| name.contains(kw))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Operating,
    Investing,
    Financing,
}

/// Classifies one journal entry's cash movement by its non-cash
/// counterpart accounts.
fn classify(entry: &JournalEntry, accounts: &HashMap<AccountId, &Account>) -> Activity {
    let counterparts: Vec<&Account> = entry
        .lines
        .iter()
        .filter_map(|line| accounts.get(&line.account_id).copied())
        .filter(|account| !is_cash_like(account))
        .collect();

    if counterparts.iter().any(|a| {
        matches!(
            a.account_type,
            AccountType::Revenue | AccountType::Expense
        )
    }) {
        return Activity::Operating;
    }
    if counterparts
        .iter()
        .any(|a| a.account_type == AccountType::Asset && is_fixed_asset_name(&a.name))
    {
        return Activity::Investing;
    }
    if counterparts.iter().any(|a| {
        a.account_type == AccountType::Equity
            || (a.account_type == AccountType::Liability && is_loan_name(&a.name))
    }) {
        return Activity::Financing;
    }
    Activity::Operating
}

/// Computes cash deltas per activity bucket over a set of entries.
///
/// For each entry, the cash delta is the signed sum over its cash-like
/// lines; the whole delta lands in the bucket chosen by the entry's
/// counterparts. Summing the buckets therefore reproduces the period's
/// change in cash balances exactly.
pub(super) fn activity_totals(accounts: &[Account], entries: &[JournalEntry]) -> ActivityTotals {
    let by_id: HashMap<AccountId, &Account> =
        accounts.iter().map(|a| (a.id, a)).collect();

    let mut totals = ActivityTotals::default();
    for entry in entries {
        let cash_delta: Decimal = entry
            .lines
            .iter()
            .filter(|line| {
                by_id
                    .get(&line.account_id)
                    .is_some_and(|account| is_cash_like(account))
            })
            .map(|line| line.debit - line.credit)
            .sum();

        if cash_delta == Decimal::ZERO {
            continue;
        }
        match classify(entry, &by_id) {
            Activity::Operating => totals.operating += cash_delta,
            Activity::Investing => totals.investing += cash_delta,
            Activity::Financing => totals.financing += cash_delta,
        }
    }
    totals
}
