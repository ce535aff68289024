//! Transaction tax calculation.
//!
//! This module computes the individual tax amounts levied on a commercial
//! transaction (ICMS, IPI, PIS, COFINS, and ICMS-ST substitution) and the
//! resulting net invoice total. All functions are pure; rates come from the
//! caller, never from storage.

pub mod calculator;
pub mod error;

pub use calculator::{calculate_taxes, OperationKind, TaxBreakdown, TaxRates};
pub use error::TaxError;
