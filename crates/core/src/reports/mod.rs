//! Financial statement generation.
//!
//! This module provides pure business logic for deriving statements from
//! accounts and journal entries:
//! - Trial Balance
//! - Income Statement (DRE)
//! - Balance Sheet
//! - Cash Flow Summary (DFC)
//! - Account Ledgers

mod cash_flow;
pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
