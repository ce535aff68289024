//! Core business logic for Razonete.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `tax` - Transaction tax calculation (ICMS, IPI, PIS, COFINS, ICMS-ST)
//! - `posting` - Tax-aware entry line generation for commercial transactions
//! - `ledger` - Double-entry balance validation and per-account aggregation
//! - `reports` - Financial statements (trial balance, income statement, balance sheet, cash flow)
//! - `storage` - Read-only seam to the external persistence collaborator

pub mod ledger;
pub mod posting;
pub mod reports;
pub mod storage;
pub mod tax;
