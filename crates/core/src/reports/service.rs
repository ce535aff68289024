//! Financial statement calculators.
//!
//! All statements are pure derivations from a snapshot of accounts and
//! journal entries; nothing here touches storage or caches results.

use rust_decimal::Decimal;

use super::cash_flow;
use super::types::{
    AccountLedger, AccountLedgerRow, BalanceSheetReport, CashFlowReport, FinancialReports,
    IncomeStatementReport, TrialBalanceReport, TrialBalanceTotals,
};
use crate::ledger::{
    aggregate, Account, AccountSummary, AccountType, JournalEntry, BALANCE_TOLERANCE,
};

/// Statement calculator over a fixed reporting currency.
#[derive(Debug, Clone)]
pub struct ReportService {
    currency: String,
}

impl ReportService {
    /// Creates a calculator reporting in the given currency.
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Generates the trial balance from per-account summaries.
    #[must_use]
    pub fn trial_balance(&self, accounts: Vec<AccountSummary>) -> TrialBalanceReport {
        let total_debits: Decimal = accounts.iter().map(|a| a.total_debits).sum();
        let total_credits: Decimal = accounts.iter().map(|a| a.total_credits).sum();

        TrialBalanceReport {
            currency: self.currency.clone(),
            accounts,
            totals: TrialBalanceTotals {
                total_debits,
                total_credits,
                is_balanced: (total_debits - total_credits).abs() <= BALANCE_TOLERANCE,
            },
        }
    }

    /// Generates the income statement (DRE).
    ///
    /// Revenue balances already net out deductions debited against revenue
    /// accounts, so gross-revenue carve-outs like ICMS need no special
    /// handling here.
    #[must_use]
    pub fn income_statement(&self, summaries: &[AccountSummary]) -> IncomeStatementReport {
        let total_revenue = Self::sum_by_type(summaries, AccountType::Revenue);
        let total_expenses = Self::sum_by_type(summaries, AccountType::Expense);

        IncomeStatementReport {
            currency: self.currency.clone(),
            total_revenue,
            total_expenses,
            net_income: total_revenue - total_expenses,
        }
    }

    /// Generates the balance sheet.
    ///
    /// The period's net income is folded into equity here (retained
    /// earnings); callers pass raw summaries and never pre-adjust equity.
    #[must_use]
    pub fn balance_sheet(&self, summaries: &[AccountSummary]) -> BalanceSheetReport {
        let total_assets = Self::sum_by_type(summaries, AccountType::Asset);
        let total_liabilities = Self::sum_by_type(summaries, AccountType::Liability);

        let net_income = self.income_statement(summaries).net_income;
        let total_equity = Self::sum_by_type(summaries, AccountType::Equity) + net_income;
        let liabilities_and_equity = total_liabilities + total_equity;

        BalanceSheetReport {
            currency: self.currency.clone(),
            total_assets,
            total_liabilities,
            total_equity,
            liabilities_and_equity,
            is_balanced: (total_assets - liabilities_and_equity).abs() <= BALANCE_TOLERANCE,
        }
    }

    /// Generates the cash flow summary (DFC).
    #[must_use]
    pub fn cash_flow(&self, accounts: &[Account], entries: &[JournalEntry]) -> CashFlowReport {
        let totals = cash_flow::activity_totals(accounts, entries);

        CashFlowReport {
            currency: self.currency.clone(),
            operating_activities: totals.operating,
            investing_activities: totals.investing,
            financing_activities: totals.financing,
            net_cash_flow: totals.net(),
        }
    }

    /// Generates the per-account ledger details, each row carrying the
    /// nature-signed running balance after the movement.
    #[must_use]
    pub fn account_ledgers(
        &self,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> Vec<AccountLedger> {
        accounts
            .iter()
            .map(|account| {
                let nature = account.account_type.nature();
                let mut running = Decimal::ZERO;
                let rows: Vec<AccountLedgerRow> = entries
                    .iter()
                    .flat_map(|entry| {
                        entry
                            .lines
                            .iter()
                            .filter(|line| line.account_id == account.id)
                            .map(move |line| (entry, line))
                    })
                    .map(|(entry, line)| {
                        running += nature.signed_balance(line.debit, line.credit);
                        AccountLedgerRow {
                            entry_date: entry.entry_date,
                            description: entry.description.clone(),
                            debit: line.debit,
                            credit: line.credit,
                            running_balance: running,
                        }
                    })
                    .collect();

                AccountLedger {
                    account_id: account.id,
                    name: account.name.clone(),
                    final_balance: running,
                    rows,
                }
            })
            .collect()
    }

    /// Derives every statement from one snapshot.
    #[must_use]
    pub fn all_reports(&self, accounts: &[Account], entries: &[JournalEntry]) -> FinancialReports {
        let summaries = aggregate(accounts, entries);

        FinancialReports {
            income_statement: self.income_statement(&summaries),
            balance_sheet: self.balance_sheet(&summaries),
            cash_flow: self.cash_flow(accounts, entries),
            ledgers: self.account_ledgers(accounts, entries),
            trial_balance: self.trial_balance(summaries),
        }
    }

    fn sum_by_type(summaries: &[AccountSummary], account_type: AccountType) -> Decimal {
        summaries
            .iter()
            .filter(|s| s.account_type == account_type)
            .map(|s| s.final_balance)
            .sum()
    }
}
