//! # gstbook
//!
//! GST invoice utilities for India's Goods and Services Tax regime:
//! GSTIN format validation, per-invoice CGST/SGST/UTGST/IGST breakup,
//! and GSTR return CSV reports.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Tax is computed exactly and rounded once, to two places, at presentation.
//!
//! ## Quick Start
//!
//! ```rust
//! use gstbook::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("27AAPFU0939F1ZV", "27AAQCS1234F1Z1", "27", "27")
//!     .number("INV001")
//!     .date("2024-04-01")
//!     .add_item(InvoiceItemBuilder::new("Widget", 2, dec!(100)).hsn("1234").build())
//!     .build()
//!     .unwrap();
//!
//! let tax = invoice.tax_breakup();
//! assert_eq!(tax.cgst, dec!(18));
//! assert_eq!(tax.sgst, dec!(18));
//! assert_eq!(tax.igst, dec!(0));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | GSTIN validation, invoice model, tax breakup, records |
//! | `returns` (default) | GSTR-1 / GSTR-2B / GSTR-3B / GSTR-9 CSV reports |
//! | `json` | JSON encoding of invoice records |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "returns")]
pub mod returns;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
