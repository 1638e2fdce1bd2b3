//! Row formatting and CSV encoding for returns.
//!
//! Fields are quoted only when they contain the delimiter, a quote or a line
//! break, so plain values round-trip through any CSV reader.

use rust_decimal::Decimal;

use super::config::ReportConfig;
use crate::core::{GstError, Invoice, round_money};

/// Encode a header and rows into a CSV string.
pub(crate) fn write_csv(
    header: &[&str],
    rows: &[Vec<String>],
    config: &ReportConfig,
) -> Result<String, GstError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .terminator(config.terminator.into())
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(header).map_err(report_error)?;
    for row in rows {
        writer.write_record(row).map_err(report_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GstError::Report(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| GstError::Report(e.to_string()))
}

fn report_error(e: csv::Error) -> GstError {
    GstError::Report(e.to_string())
}

/// Fixed-point amount with exactly two fraction digits.
pub(crate) fn amount(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// InvoiceNumber, InvoiceDate, BuyerGSTIN, PlaceOfSupply, InvoiceValue,
/// TaxableValue, CGST, SGST, IGST
pub(crate) fn gstr1_row(inv: &Invoice) -> Vec<String> {
    let tax = inv.tax_breakup();
    let taxable = inv.total_before_tax();
    vec![
        inv.number().to_string(),
        inv.date().to_string(),
        inv.buyer_gstin().to_string(),
        inv.supply_state().to_string(),
        amount(taxable.saturating_add(tax.total())),
        amount(taxable),
        amount(tax.cgst),
        amount(tax.sgst),
        amount(tax.igst),
    ]
}

/// SupplierGSTIN, InvoiceNumber, InvoiceDate, InvoiceValue, TaxableValue,
/// CGST, SGST, IGST
pub(crate) fn gstr2b_row(inv: &Invoice) -> Vec<String> {
    let tax = inv.tax_breakup();
    let taxable = inv.total_before_tax();
    vec![
        inv.seller_gstin().to_string(),
        inv.number().to_string(),
        inv.date().to_string(),
        amount(taxable.saturating_add(tax.total())),
        amount(taxable),
        amount(tax.cgst),
        amount(tax.sgst),
        amount(tax.igst),
    ]
}
