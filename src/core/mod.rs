//! Core GST types, GSTIN validation, and tax computation.
//!
//! This module provides the invoice model, the intrastate/interstate
//! tax split, and the structured record handed to downstream consumers.

mod builder;
mod error;
mod gstin;
mod record;
pub mod states;
mod tax;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use gstin::*;
pub use record::*;
pub use states::is_union_territory;
pub use tax::round_money;
pub use types::*;
pub use validation::*;
