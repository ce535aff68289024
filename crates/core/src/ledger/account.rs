//! Account domain types and balance-nature rules.

use razonete_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account.
    Asset,
    /// Liability account.
    Liability,
    /// Equity account.
    Equity,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
}

impl AccountType {
    /// Returns the account's balance nature.
    #[must_use]
    pub const fn nature(self) -> AccountNature {
        match self {
            Self::Asset | Self::Expense => AccountNature::DebitNormal,
            Self::Liability | Self::Equity | Self::Revenue => AccountNature::CreditNormal,
        }
    }
}

/// Whether an account's normal balance increases with debits or credits.
///
/// - Asset/Expense: balance = debits - credits (debit-normal)
/// - Liability/Equity/Revenue: balance = credits - debits (credit-normal)
///
/// This sign convention is the core accounting invariant and must never
/// be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountNature {
    /// Debit-normal accounts (Asset, Expense).
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    CreditNormal,
}

impl AccountNature {
    /// Computes the signed final balance from debit and credit totals.
    #[must_use]
    pub fn signed_balance(self, total_debits: Decimal, total_credits: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => total_debits - total_credits,
            Self::CreditNormal => total_credits - total_debits,
        }
    }
}

/// A chart-of-accounts entry, as seen by the engine.
///
/// The account tree itself is maintained externally; the engine only reads
/// accounts as flat records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Human-readable name (also used for cash-flow classification).
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Optional parent in the account tree.
    pub parent_id: Option<AccountId>,
}

impl Account {
    /// Creates a flat account record.
    #[must_use]
    pub fn new(id: AccountId, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id,
            name: name.into(),
            account_type,
            parent_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_nature_by_type() {
        assert_eq!(AccountType::Asset.nature(), AccountNature::DebitNormal);
        assert_eq!(AccountType::Expense.nature(), AccountNature::DebitNormal);
        assert_eq!(AccountType::Liability.nature(), AccountNature::CreditNormal);
        assert_eq!(AccountType::Equity.nature(), AccountNature::CreditNormal);
        assert_eq!(AccountType::Revenue.nature(), AccountNature::CreditNormal);
    }

    #[test]
    fn test_debit_normal_signed_balance() {
        let nature = AccountNature::DebitNormal;
        assert_eq!(nature.signed_balance(dec!(100), dec!(30)), dec!(70));
        assert_eq!(nature.signed_balance(dec!(0), dec!(50)), dec!(-50));
    }

    #[test]
    fn test_credit_normal_signed_balance() {
        let nature = AccountNature::CreditNormal;
        assert_eq!(nature.signed_balance(dec!(30), dec!(100)), dec!(70));
        assert_eq!(nature.signed_balance(dec!(50), dec!(0)), dec!(-50));
    }
}
