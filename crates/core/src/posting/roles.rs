//! Account roles and the role-to-account mapping.
//!
//! The engine never looks accounts up by display name. Every account it
//! needs to touch is identified by a role, and the caller maps roles to
//! concrete accounts from its chart before posting.

use std::collections::HashMap;

use razonete_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use super::error::PostingError;

/// Functional role an account plays in transaction decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// Gross sales revenue.
    Revenue,
    /// ICMS payable on sales.
    IcmsPayable,
    /// IPI payable on sales.
    IpiPayable,
    /// ICMS-ST payable on sales under tax substitution.
    IcmsStPayable,
    /// PIS payable on sales.
    PisPayable,
    /// COFINS payable on sales.
    CofinsPayable,
    /// PIS charged against the period's result.
    PisExpense,
    /// COFINS charged against the period's result.
    CofinsExpense,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Finished goods inventory, relieved on sale.
    FinishedGoodsInventory,
    /// Inventory received on purchase.
    PurchaseInventory,
    /// ICMS recoverable on purchases.
    IcmsRecoverable,
    /// PIS recoverable on purchases.
    PisRecoverable,
    /// COFINS recoverable on purchases.
    CofinsRecoverable,
}

/// Maps account roles to concrete accounts in the caller's chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleMap {
    accounts: HashMap<AccountRole, AccountId>,
}

impl RoleMap {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an account to a role, replacing any previous assignment.
    pub fn assign(&mut self, role: AccountRole, account_id: AccountId) -> &mut Self {
        self.accounts.insert(role, account_id);
        self
    }

    /// Returns the account mapped to a role, if any.
    #[must_use]
    pub fn get(&self, role: AccountRole) -> Option<AccountId> {
        self.accounts.get(&role).copied()
    }

    /// Checks that every listed role is mapped.
    ///
    /// # Errors
    ///
    /// Returns [`PostingError::UnresolvedAccounts`] listing **all** missing
    /// roles, not just the first one found.
    pub fn require(&self, roles: &[AccountRole]) -> Result<(), PostingError> {
        let missing: Vec<AccountRole> = roles
            .iter()
            .copied()
            .filter(|role| !self.accounts.contains_key(role))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PostingError::UnresolvedAccounts(missing))
        }
    }

    /// Returns the account for a role that [`Self::require`] already
    /// verified.
    ///
    /// # Errors
    ///
    /// Returns [`PostingError::UnresolvedAccounts`] if the role is unmapped.
    pub(super) fn resolved(&self, role: AccountRole) -> Result<AccountId, PostingError> {
        self.get(role)
            .ok_or_else(|| PostingError::UnresolvedAccounts(vec![role]))
    }
}
