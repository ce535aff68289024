//! Read-only seam to the external persistence collaborator.
//!
//! The core never queries storage itself; callers hand it accounts and
//! journal entries already scoped to one organization and accounting
//! period. [`JournalSource`] is the trait the persistence crate implements
//! to feed the report orchestration.

use chrono::NaiveDate;
use razonete_shared::config::ReportingConfig;
use razonete_shared::types::{AccountingPeriodId, OrganizationId};
use razonete_shared::AppResult;
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, JournalEntry};
use crate::reports::{FinancialReports, ReportError, ReportService};

/// Inclusive date range limiting a report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Checks that the range is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidDateRange`] when `start > end`.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.start > self.end {
            return Err(ReportError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Read access to the persisted ledger.
///
/// Implementations must return data already filtered to the given
/// organization and accounting period; the core never widens a scope.
pub trait JournalSource: Send + Sync {
    /// Fetches the chart of accounts for a period.
    fn fetch_accounts(
        &self,
        organization_id: OrganizationId,
        period_id: AccountingPeriodId,
    ) -> impl std::future::Future<Output = AppResult<Vec<Account>>> + Send;

    /// Fetches the period's journal entries with their lines attached,
    /// optionally limited to a date range.
    fn fetch_journal_entries(
        &self,
        organization_id: OrganizationId,
        period_id: AccountingPeriodId,
        range: Option<DateRange>,
    ) -> impl std::future::Future<Output = AppResult<Vec<JournalEntry>>> + Send;
}

/// Fetches a period's ledger and derives every financial statement.
///
/// # Errors
///
/// Returns [`ReportError`] when the range is inverted, the scope has no
/// accounts, or the source fails.
#[tracing::instrument(skip(source, config), fields(%organization_id, %period_id))]
pub async fn generate_financial_reports<S: JournalSource>(
    source: &S,
    config: &ReportingConfig,
    organization_id: OrganizationId,
    period_id: AccountingPeriodId,
    range: Option<DateRange>,
) -> Result<FinancialReports, ReportError> {
    if let Some(range) = &range {
        range.validate()?;
    }

    let accounts = source.fetch_accounts(organization_id, period_id).await?;
    if accounts.is_empty() {
        return Err(ReportError::NoAccounts);
    }
    let entries = source
        .fetch_journal_entries(organization_id, period_id, range)
        .await?;

    tracing::debug!(
        accounts = accounts.len(),
        entries = entries.len(),
        "deriving financial statements"
    );

    let service = ReportService::new(config.currency.clone());
    Ok(service.all_reports(&accounts, &entries))
}
