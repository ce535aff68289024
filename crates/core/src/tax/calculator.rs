//! Tax amount calculation for commercial transactions.
//!
//! Rate convention: all rates are **percentages in `[0, 100]`**. Each tax
//! amount is `gross * rate / 100`, rounded to 2 decimal places with banker's
//! rounding (round half to even) to minimize cumulative errors.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// Kind of commercial operation being posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Sale of goods or services.
    Sale,
    /// Purchase of goods or services.
    Purchase,
    /// Manual journal entry; the explicit fallback for anything else.
    #[serde(other)]
    Manual,
}

/// Tax rates applicable to a transaction, as percentages in `[0, 100]`.
///
/// A zero rate means the tax does not apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRates {
    /// ICMS rate.
    #[serde(default)]
    pub icms: Decimal,
    /// IPI rate.
    #[serde(default)]
    pub ipi: Decimal,
    /// PIS rate.
    #[serde(default)]
    pub pis: Decimal,
    /// COFINS rate.
    #[serde(default)]
    pub cofins: Decimal,
    /// MVA markup rate used for ICMS-ST; zero disables substitution.
    #[serde(default)]
    pub mva: Decimal,
}

impl TaxRates {
    /// Validates that every rate lies in `[0, 100]`.
    fn validate(&self) -> Result<(), TaxError> {
        for (tax, rate) in [
            ("ICMS", self.icms),
            ("IPI", self.ipi),
            ("PIS", self.pis),
            ("COFINS", self.cofins),
            ("MVA", self.mva),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(TaxError::RateOutOfRange { tax, rate });
            }
        }
        Ok(())
    }
}

/// Calculated tax amounts and the resulting net invoice total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Ordinary ICMS amount.
    pub icms: Decimal,
    /// IPI amount.
    pub ipi: Decimal,
    /// PIS amount.
    pub pis: Decimal,
    /// COFINS amount.
    pub cofins: Decimal,
    /// ICMS-ST (substitution) amount; zero when no MVA rate was supplied.
    pub icms_st: Decimal,
    /// Net invoice total after the operation-kind rules below.
    pub final_total_net: Decimal,
}

/// Rounds a monetary amount to 2 decimal places using banker's rounding.
fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Percentage of a base amount, rounded.
fn pct(base: Decimal, rate: Decimal) -> Decimal {
    round_amount(base * rate / Decimal::ONE_HUNDRED)
}

/// Calculates the tax amounts for a transaction.
///
/// ICMS-ST is computed only when an MVA markup rate is supplied:
/// the gross is marked up by the MVA to estimate the downstream resale
/// value, the ICMS rate is applied to that marked-up base, and the
/// ordinary ICMS already computed is subtracted so it is not counted
/// twice:
///
/// ```text
/// icms_st = gross * (1 + mva/100) * icms/100 - icms_amount
/// ```
///
/// `final_total_net` rules:
/// - an explicit `total_net_override` is respected verbatim (purchase
///   invoices carry the legally printed net value);
/// - sale: `gross + ipi + icms_st` - IPI and ICMS-ST are billed on top of
///   the invoice, while ICMS/PIS/COFINS are embedded in gross and deducted
///   from revenue downstream;
/// - purchase and manual: `gross` - the invoice total already carries the
///   embedded taxes.
///
/// # Errors
///
/// Returns `TaxError` if `total_gross` or the override is negative, or any
/// rate falls outside `[0, 100]`.
pub fn calculate_taxes(
    total_gross: Decimal,
    rates: &TaxRates,
    kind: OperationKind,
    total_net_override: Option<Decimal>,
) -> Result<TaxBreakdown, TaxError> {
    if total_gross < Decimal::ZERO {
        return Err(TaxError::NegativeAmount(total_gross));
    }
    if let Some(net) = total_net_override {
        if net < Decimal::ZERO {
            return Err(TaxError::NegativeAmount(net));
        }
    }
    rates.validate()?;

    let icms = pct(total_gross, rates.icms);
    let ipi = pct(total_gross, rates.ipi);
    let pis = pct(total_gross, rates.pis);
    let cofins = pct(total_gross, rates.cofins);

    let icms_st = if rates.mva > Decimal::ZERO {
        let marked_up_base =
            total_gross * (Decimal::ONE + rates.mva / Decimal::ONE_HUNDRED);
        // Subtract the ordinary ICMS so the substitute pays only the
        // margin's share. Clamped: a rounding artifact must not go negative.
        (pct(marked_up_base, rates.icms) - icms).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let final_total_net = match total_net_override {
        Some(net) => net,
        None => match kind {
            OperationKind::Sale => total_gross + ipi + icms_st,
            OperationKind::Purchase | OperationKind::Manual => total_gross,
        },
    };

    Ok(TaxBreakdown {
        icms,
        ipi,
        pis,
        cofins,
        icms_st,
        final_total_net,
    })
}
