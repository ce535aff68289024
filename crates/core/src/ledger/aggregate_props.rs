//! Property-based tests for account aggregation.
//!
//! - Signed balances always follow the account nature table.
//! - Totals are monotone sums of non-negative line amounts.
//! - Aggregation is deterministic.

use chrono::NaiveDate;
use proptest::prelude::*;
use razonete_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;

use super::account::{Account, AccountNature, AccountType};
use super::aggregate::aggregate;
use super::entry::{EntryLine, JournalEntry};

/// Strategy to generate positive decimal amounts (0.00 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an account type.
fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    prop_oneof![
        Just(AccountType::Asset),
        Just(AccountType::Liability),
        Just(AccountType::Equity),
        Just(AccountType::Revenue),
        Just(AccountType::Expense),
    ]
}

/// Strategy to generate raw line specs: (account index, amount, is_debit).
fn line_specs() -> impl Strategy<Value = Vec<(usize, Decimal, bool)>> {
    prop::collection::vec((0usize..16, amount(), any::<bool>()), 0..24)
}

/// Builds the chart of accounts and one journal entry from generated specs.
fn build_fixture(
    account_types: &[AccountType],
    specs: &[(usize, Decimal, bool)],
) -> (Vec<Account>, Vec<JournalEntry>) {
    let accounts: Vec<Account> = account_types
        .iter()
        .map(|&account_type| Account::new(AccountId::new(), "Generated", account_type))
        .collect();

    let entry_id = JournalEntryId::new();
    let lines: Vec<EntryLine> = specs
        .iter()
        .map(|&(i, line_amount, is_debit)| {
            let account_id = accounts[i % accounts.len()].id;
            if is_debit {
                EntryLine::debit(entry_id, account_id, line_amount)
            } else {
                EntryLine::credit(entry_id, account_id, line_amount)
            }
        })
        .collect();

    let entries = vec![JournalEntry {
        id: entry_id,
        entry_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        description: "Generated".to_string(),
        lines,
    }];

    (accounts, entries)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* set of accounts and lines, the final balance SHALL equal
    /// debits minus credits for debit-normal accounts and credits minus
    /// debits for credit-normal accounts.
    #[test]
    fn prop_balance_follows_nature(
        account_types in prop::collection::vec(account_type_strategy(), 1..8),
        specs in line_specs(),
    ) {
        let (accounts, entries) = build_fixture(&account_types, &specs);
        let summaries = aggregate(&accounts, &entries);

        prop_assert_eq!(summaries.len(), accounts.len());
        for summary in &summaries {
            let expected = match summary.account_type.nature() {
                AccountNature::DebitNormal => summary.total_debits - summary.total_credits,
                AccountNature::CreditNormal => summary.total_credits - summary.total_debits,
            };
            prop_assert_eq!(summary.final_balance, expected);
        }
    }

    /// *For any* input, debit and credit totals are non-negative sums.
    #[test]
    fn prop_totals_non_negative(
        account_types in prop::collection::vec(account_type_strategy(), 1..8),
        specs in line_specs(),
    ) {
        let (accounts, entries) = build_fixture(&account_types, &specs);
        for summary in aggregate(&accounts, &entries) {
            prop_assert!(summary.total_debits >= Decimal::ZERO);
            prop_assert!(summary.total_credits >= Decimal::ZERO);
        }
    }

    /// *For any* fixed input, two aggregation runs agree.
    #[test]
    fn prop_deterministic(
        account_types in prop::collection::vec(account_type_strategy(), 1..8),
        specs in line_specs(),
    ) {
        let (accounts, entries) = build_fixture(&account_types, &specs);
        let first = aggregate(&accounts, &entries);
        let second = aggregate(&accounts, &entries);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.account_id, b.account_id);
            prop_assert_eq!(a.total_debits, b.total_debits);
            prop_assert_eq!(a.total_credits, b.total_credits);
            prop_assert_eq!(a.final_balance, b.final_balance);
        }
    }
}
