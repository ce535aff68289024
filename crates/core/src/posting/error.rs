//! Posting engine errors.

use rust_decimal::Decimal;
use thiserror::Error;

use super::roles::AccountRole;
use crate::tax::TaxError;

/// Errors from transaction decomposition.
#[derive(Debug, Error)]
pub enum PostingError {
    /// One or more account roles have no account mapped. All missing
    /// roles are reported at once so the chart of accounts can be fixed
    /// in a single pass.
    #[error("no account mapped for roles: {0:?}")]
    UnresolvedAccounts(Vec<AccountRole>),

    /// Tax calculation rejected the input.
    #[error(transparent)]
    Tax(#[from] TaxError),

    /// Recoverable taxes on a purchase exceed the invoice total, which
    /// would drive the inventory debit negative.
    #[error("recoverable taxes {recoverable} exceed purchase total {net}")]
    RecoverableExceedsNet {
        /// Sum of recoverable tax amounts.
        recoverable: Decimal,
        /// Net purchase total.
        net: Decimal,
    },

    /// A sale's explicit net override disagrees with the computed
    /// invoice net, which would unbalance the generated line set.
    #[error("net override {supplied} disagrees with computed invoice net {expected}")]
    NetOverrideMismatch {
        /// The caller-supplied net total.
        supplied: Decimal,
        /// The net implied by gross and the on-top taxes.
        expected: Decimal,
    },

    /// A manual line had positive amounts on both sides.
    #[error("a line must be either a debit or a credit, not both")]
    DebitAndCreditBothSet,

    /// A manual line had no positive amount on either side.
    #[error("a line must carry a positive debit or credit amount")]
    MissingAmount,
}

impl PostingError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedAccounts(_) => "UNRESOLVED_ACCOUNTS",
            Self::Tax(e) => e.error_code(),
            Self::RecoverableExceedsNet { .. } => "RECOVERABLE_EXCEEDS_NET",
            Self::NetOverrideMismatch { .. } => "NET_OVERRIDE_MISMATCH",
            Self::DebitAndCreditBothSet => "DEBIT_AND_CREDIT_BOTH_SET",
            Self::MissingAmount => "MISSING_AMOUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PostingError::UnresolvedAccounts(vec![AccountRole::Revenue]);
        assert_eq!(err.error_code(), "UNRESOLVED_ACCOUNTS");

        let err = PostingError::RecoverableExceedsNet {
            recoverable: dec!(600),
            net: dec!(500),
        };
        assert_eq!(err.error_code(), "RECOVERABLE_EXCEEDS_NET");
    }

    #[test]
    fn test_tax_error_code_passthrough() {
        let err = PostingError::from(TaxError::NegativeAmount(dec!(-1)));
        assert_eq!(err.error_code(), "NEGATIVE_AMOUNT");
    }
}
