//! Per-account aggregation of journal entries.
//!
//! Produces one summary per account for the reporting period: total
//! debits, total credits, and the nature-signed final balance. This is the
//! input shared by all financial statement calculators.

use std::collections::HashMap;

use razonete_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::{Account, AccountType};
use super::entry::JournalEntry;

/// Aggregated activity for one account over a period.
///
/// Derived data; recomputed on every report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    /// The account this summary belongs to.
    pub account_id: AccountId,
    /// Account name, carried for display and classification.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Sum of all debit amounts posted to the account.
    pub total_debits: Decimal,
    /// Sum of all credit amounts posted to the account.
    pub total_credits: Decimal,
    /// Nature-signed balance (see [`super::account::AccountNature`]).
    pub final_balance: Decimal,
}

/// Aggregates journal entries into one summary per account.
///
/// Every input account gets a summary, including accounts with zero
/// activity. Lines referencing accounts absent from `accounts` are
/// silently skipped: they belong to a different scope and must not
/// corrupt this period's summaries.
///
/// The aggregation is a pure fold; addition is commutative, so the result
/// is independent of traversal order.
#[must_use]
pub fn aggregate(accounts: &[Account], entries: &[JournalEntry]) -> Vec<AccountSummary> {
    let mut summaries: Vec<AccountSummary> = accounts
        .iter()
        .map(|account| AccountSummary {
            account_id: account.id,
            name: account.name.clone(),
            account_type: account.account_type,
            total_debits: Decimal::ZERO,
            total_credits: Decimal::ZERO,
            final_balance: Decimal::ZERO,
        })
        .collect();

    let index: HashMap<AccountId, usize> = accounts
        .iter()
        .enumerate()
        .map(|(i, account)| (account.id, i))
        .collect();

    for entry in entries {
        for line in &entry.lines {
            let Some(&i) = index.get(&line.account_id) else {
                continue;
            };
            summaries[i].total_debits += line.debit;
            summaries[i].total_credits += line.credit;
        }
    }

    for summary in &mut summaries {
        summary.final_balance = summary
            .account_type
            .nature()
            .signed_balance(summary.total_debits, summary.total_credits);
    }

    summaries
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use razonete_shared::types::JournalEntryId;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ledger::entry::EntryLine;

    fn account(name: &str, account_type: AccountType) -> Account {
        Account::new(AccountId::new(), name, account_type)
    }

    fn entry(lines: Vec<EntryLine>) -> JournalEntry {
        JournalEntry {
            id: JournalEntryId::new(),
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "Test entry".to_string(),
            lines,
        }
    }

    #[test]
    fn test_zero_activity_accounts_included() {
        let accounts = vec![
            account("Cash", AccountType::Asset),
            account("Revenue", AccountType::Revenue),
        ];
        let summaries = aggregate(&accounts, &[]);

        assert_eq!(summaries.len(), 2);
        for summary in &summaries {
            assert_eq!(summary.total_debits, dec!(0));
            assert_eq!(summary.total_credits, dec!(0));
            assert_eq!(summary.final_balance, dec!(0));
        }
    }

    #[test]
    fn test_totals_and_signed_balances() {
        let cash = account("Cash", AccountType::Asset);
        let revenue = account("Sales Revenue", AccountType::Revenue);
        let je = JournalEntryId::new();

        let entries = vec![entry(vec![
            EntryLine::debit(je, cash.id, dec!(500)),
            EntryLine::credit(je, revenue.id, dec!(500)),
        ])];

        let summaries = aggregate(&[cash, revenue], &entries);

        assert_eq!(summaries[0].total_debits, dec!(500));
        assert_eq!(summaries[0].final_balance, dec!(500));
        assert_eq!(summaries[1].total_credits, dec!(500));
        assert_eq!(summaries[1].final_balance, dec!(500));
    }

    #[test]
    fn test_out_of_scope_lines_skipped() {
        let cash = account("Cash", AccountType::Asset);
        let je = JournalEntryId::new();

        let entries = vec![entry(vec![
            EntryLine::debit(je, cash.id, dec!(100)),
            // Account from another period; must not appear or corrupt totals.
            EntryLine::credit(je, AccountId::new(), dec!(100)),
        ])];

        let summaries = aggregate(std::slice::from_ref(&cash), &entries);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_debits, dec!(100));
        assert_eq!(summaries[0].total_credits, dec!(0));
    }

    #[test]
    fn test_credit_normal_balance_nets_debits() {
        let revenue = account("Sales Revenue", AccountType::Revenue);
        let je = JournalEntryId::new();

        // Gross revenue 1000, ICMS deduction debited back against revenue.
        let entries = vec![entry(vec![
            EntryLine::credit(je, revenue.id, dec!(1000)),
            EntryLine::debit(je, revenue.id, dec!(180)),
        ])];

        let summaries = aggregate(std::slice::from_ref(&revenue), &entries);
        assert_eq!(summaries[0].final_balance, dec!(820));
    }
}
