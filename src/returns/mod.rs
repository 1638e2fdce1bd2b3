//! GST return CSV reports.
//!
//! Renders a slice of invoices into the four return layouts:
//!
//! | Return | Rows | Columns |
//! |--------|------|---------|
//! | GSTR-1 (outward supplies) | one per invoice | InvoiceNumber … IGST |
//! | GSTR-2B (input tax credit) | one per invoice | SupplierGSTIN … IGST |
//! | GSTR-3B (summary) | one aggregate row | TaxableValue, CGST, SGST, IGST |
//! | GSTR-9 (annual summary) | one aggregate row | same as GSTR-3B |
//!
//! Amounts are fixed-point with exactly two fraction digits. Aggregates are
//! summed unrounded and rounded once. Generation only reads the invoices, so
//! independent reports over the same slice may run concurrently.
//!
//! # Example
//!
//! ```
//! use gstbook::core::*;
//! use gstbook::returns::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = Invoice::new("27AAPFU0939F1ZV", "29AAQCS1234F1Z1", "27", "29");
//! invoice.add_item(InvoiceItem::new("Gadget", "5678", 1, dec!(200), dec!(18)));
//!
//! let csv = gstr3b_csv(&[invoice]).unwrap();
//! assert_eq!(csv, "TaxableValue,CGST,SGST,IGST\r\n200.00,0.00,0.00,36.00\r\n");
//! ```

mod config;
mod csv_export;
mod summary;

pub use config::{LineTerminator, ReportConfig, ReportConfigBuilder};
pub use summary::ReturnSummary;

use serde::{Deserialize, Serialize};

use crate::core::{GstError, Invoice};

/// GSTR-1 column order.
pub const GSTR1_HEADER: [&str; 9] = [
    "InvoiceNumber",
    "InvoiceDate",
    "BuyerGSTIN",
    "PlaceOfSupply",
    "InvoiceValue",
    "TaxableValue",
    "CGST",
    "SGST",
    "IGST",
];

/// GSTR-2B column order.
pub const GSTR2B_HEADER: [&str; 8] = [
    "SupplierGSTIN",
    "InvoiceNumber",
    "InvoiceDate",
    "InvoiceValue",
    "TaxableValue",
    "CGST",
    "SGST",
    "IGST",
];

/// GSTR-3B and GSTR-9 column order.
pub const SUMMARY_HEADER: [&str; 4] = ["TaxableValue", "CGST", "SGST", "IGST"];

/// The supported return layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnKind {
    /// Outward supplies, one row per invoice.
    Gstr1,
    /// Input tax credit, one row per invoice.
    Gstr2b,
    /// Periodic summary, one aggregate row.
    Gstr3b,
    /// Annual summary. Currently identical to [`ReturnKind::Gstr3b`].
    Gstr9,
}

impl ReturnKind {
    /// All return kinds, in filing order.
    pub const ALL: [ReturnKind; 4] = [Self::Gstr1, Self::Gstr2b, Self::Gstr3b, Self::Gstr9];

    /// Official form name.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gstr1 => "GSTR-1",
            Self::Gstr2b => "GSTR-2B",
            Self::Gstr3b => "GSTR-3B",
            Self::Gstr9 => "GSTR-9",
        }
    }

    /// Parse from the official form name.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GSTR-1" => Some(Self::Gstr1),
            "GSTR-2B" => Some(Self::Gstr2b),
            "GSTR-3B" => Some(Self::Gstr3b),
            "GSTR-9" => Some(Self::Gstr9),
            _ => None,
        }
    }

    /// Header row for this layout.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::Gstr1 => &GSTR1_HEADER,
            Self::Gstr2b => &GSTR2B_HEADER,
            Self::Gstr3b | Self::Gstr9 => &SUMMARY_HEADER,
        }
    }

    /// Whether the layout emits one aggregate row rather than one row per invoice.
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Gstr3b | Self::Gstr9)
    }

    /// Render `invoices` in this layout.
    pub fn generate(&self, invoices: &[Invoice], config: &ReportConfig) -> Result<String, GstError> {
        let rows: Vec<Vec<String>> = match self {
            Self::Gstr1 => invoices.iter().map(csv_export::gstr1_row).collect(),
            Self::Gstr2b => invoices.iter().map(csv_export::gstr2b_row).collect(),
            Self::Gstr3b | Self::Gstr9 => vec![ReturnSummary::from_invoices(invoices).to_row()],
        };

        let out = csv_export::write_csv(self.header(), &rows, config)?;
        tracing::debug!(
            report = self.code(),
            invoices = invoices.len(),
            rows = rows.len(),
            bytes = out.len(),
            "generated return"
        );
        Ok(out)
    }
}

impl std::fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// GSTR-1 outward supplies CSV with the default configuration.
pub fn gstr1_csv(invoices: &[Invoice]) -> Result<String, GstError> {
    gstr1_csv_with(invoices, &ReportConfig::default())
}

/// GSTR-1 outward supplies CSV.
pub fn gstr1_csv_with(invoices: &[Invoice], config: &ReportConfig) -> Result<String, GstError> {
    ReturnKind::Gstr1.generate(invoices, config)
}

/// GSTR-2B input tax credit CSV with the default configuration.
pub fn gstr2b_csv(invoices: &[Invoice]) -> Result<String, GstError> {
    gstr2b_csv_with(invoices, &ReportConfig::default())
}

/// GSTR-2B input tax credit CSV.
pub fn gstr2b_csv_with(invoices: &[Invoice], config: &ReportConfig) -> Result<String, GstError> {
    ReturnKind::Gstr2b.generate(invoices, config)
}

/// GSTR-3B summary CSV with the default configuration.
pub fn gstr3b_csv(invoices: &[Invoice]) -> Result<String, GstError> {
    gstr3b_csv_with(invoices, &ReportConfig::default())
}

/// GSTR-3B summary CSV.
pub fn gstr3b_csv_with(invoices: &[Invoice], config: &ReportConfig) -> Result<String, GstError> {
    ReturnKind::Gstr3b.generate(invoices, config)
}

/// GSTR-9 annual summary CSV with the default configuration.
pub fn gstr9_csv(invoices: &[Invoice]) -> Result<String, GstError> {
    gstr9_csv_with(invoices, &ReportConfig::default())
}

/// GSTR-9 annual summary CSV.
///
/// Same totals as GSTR-3B; there is no separate annual computation yet.
pub fn gstr9_csv_with(invoices: &[Invoice], config: &ReportConfig) -> Result<String, GstError> {
    ReturnKind::Gstr9.generate(invoices, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for kind in ReturnKind::ALL {
            assert_eq!(ReturnKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ReturnKind::from_code("GSTR-4"), None);
    }

    #[test]
    fn aggregate_kinds() {
        assert!(!ReturnKind::Gstr1.is_aggregate());
        assert!(!ReturnKind::Gstr2b.is_aggregate());
        assert!(ReturnKind::Gstr3b.is_aggregate());
        assert!(ReturnKind::Gstr9.is_aggregate());
    }

    #[test]
    fn annual_header_matches_summary() {
        assert_eq!(ReturnKind::Gstr9.header(), ReturnKind::Gstr3b.header());
    }
}
