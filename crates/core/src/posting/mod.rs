//! Transaction posting.
//!
//! Decomposes commercial transactions into balanced journal entry lines:
//! - Account roles and the role-to-account mapping
//! - The posting engine (sale, purchase, and manual decompositions)
//! - Brazilian transaction taxes are calculated by [`crate::tax`]

pub mod engine;
pub mod error;
pub mod roles;

#[cfg(test)]
mod engine_props;

pub use engine::{PostingEngine, ProductMovement, TransactionInput};
pub use error::PostingError;
pub use roles::{AccountRole, RoleMap};
