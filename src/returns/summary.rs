//! Aggregate totals for GSTR-3B / GSTR-9.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::csv_export::amount;
use crate::core::Invoice;

/// Unrounded totals across a set of invoices.
///
/// UTGST is not a summary column and is left out of the sums. Sums saturate
/// at the `Decimal` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnSummary {
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl ReturnSummary {
    /// Sum pre-tax totals and CGST/SGST/IGST over `invoices`.
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        invoices.iter().fold(Self::default(), |mut acc, inv| {
            let tax = inv.tax_breakup();
            acc.taxable_value = acc.taxable_value.saturating_add(inv.total_before_tax());
            acc.cgst = acc.cgst.saturating_add(tax.cgst);
            acc.sgst = acc.sgst.saturating_add(tax.sgst);
            acc.igst = acc.igst.saturating_add(tax.igst);
            acc
        })
    }

    /// Formatted row in summary column order, each value rounded once.
    pub(crate) fn to_row(self) -> Vec<String> {
        vec![
            amount(self.taxable_value),
            amount(self.cgst),
            amount(self.sgst),
            amount(self.igst),
        ]
    }
}
