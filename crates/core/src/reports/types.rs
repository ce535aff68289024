//! Report data types.

use chrono::NaiveDate;
use razonete_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::AccountSummary;

/// Trial balance report: one row per account plus grand totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Currency code.
    pub currency: String,
    /// Per-account summaries, in chart order.
    pub accounts: Vec<AccountSummary>,
    /// Grand totals.
    pub totals: TrialBalanceTotals,
}

/// Trial balance grand totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debits across all accounts.
    pub total_debits: Decimal,
    /// Total credits across all accounts.
    pub total_credits: Decimal,
    /// Whether debits equal credits within tolerance.
    pub is_balanced: bool,
}

/// Income statement (DRE).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Currency code.
    pub currency: String,
    /// Sum of final balances over revenue accounts.
    pub total_revenue: Decimal,
    /// Sum of final balances over expense accounts.
    pub total_expenses: Decimal,
    /// `total_revenue - total_expenses`.
    pub net_income: Decimal,
}

/// Balance sheet.
///
/// The period's net income is folded into equity internally (retained
/// earnings), so a self-consistent entry set always balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Currency code.
    pub currency: String,
    /// Sum of final balances over asset accounts.
    pub total_assets: Decimal,
    /// Sum of final balances over liability accounts.
    pub total_liabilities: Decimal,
    /// Sum over equity accounts, plus the period's net income.
    pub total_equity: Decimal,
    /// `total_liabilities + total_equity`.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity within tolerance.
    pub is_balanced: bool,
}

/// Cash flow summary (DFC).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowReport {
    /// Currency code.
    pub currency: String,
    /// Net cash from operating activities.
    pub operating_activities: Decimal,
    /// Net cash from investing activities.
    pub investing_activities: Decimal,
    /// Net cash from financing activities.
    pub financing_activities: Decimal,
    /// Sum of the three buckets; equals the period's change in cash-like
    /// account balances.
    pub net_cash_flow: Decimal,
}

/// One movement in an account's ledger, with the running balance after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLedgerRow {
    /// Date of the journal entry.
    pub entry_date: NaiveDate,
    /// Journal entry description.
    pub description: String,
    /// Debit amount on this line.
    pub debit: Decimal,
    /// Credit amount on this line.
    pub credit: Decimal,
    /// Nature-signed balance after this movement.
    pub running_balance: Decimal,
}

/// Ledger detail for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLedger {
    /// The account.
    pub account_id: AccountId,
    /// Account name.
    pub name: String,
    /// Movements in entry order.
    pub rows: Vec<AccountLedgerRow>,
    /// Balance after the last movement.
    pub final_balance: Decimal,
}

/// All statements for one reporting request, derived from a single
/// snapshot of accounts and entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReports {
    /// Trial balance.
    pub trial_balance: TrialBalanceReport,
    /// Income statement.
    pub income_statement: IncomeStatementReport,
    /// Balance sheet.
    pub balance_sheet: BalanceSheetReport,
    /// Cash flow summary.
    pub cash_flow: CashFlowReport,
    /// Per-account ledger details.
    pub ledgers: Vec<AccountLedger>,
}
