//! Boundary validation for invoices.
//!
//! The tax engine accepts any input. These checks are for callers that want
//! to reject malformed invoices before computing or filing them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::gstin::check_gstin;
use super::states::{is_state_code_shape, same_state};
use super::types::Invoice;

/// Validate an invoice, returning all violations (empty if valid).
///
/// | Rule | Check |
/// |------|-------|
/// | GST-01 | Seller GSTIN format |
/// | GST-02 | Buyer GSTIN format |
/// | GST-03 | Seller state code is 1-2 digits |
/// | GST-04 | Place of supply is 1-2 digits |
/// | GST-05 | Seller GSTIN prefix matches seller state |
/// | GST-06 | Quantity not negative |
/// | GST-07 | Price not negative |
/// | GST-08 | Tax rate within 0-100% |
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let seller_gstin = match check_gstin(invoice.seller_gstin()) {
        Ok(gstin) => Some(gstin),
        Err(e) => {
            errors.push(ValidationError::with_rule("seller_gstin", e.reason, "GST-01"));
            None
        }
    };

    if let Err(e) = check_gstin(invoice.buyer_gstin()) {
        errors.push(ValidationError::with_rule("buyer_gstin", e.reason, "GST-02"));
    }

    let seller_state_ok = is_state_code_shape(invoice.seller_state());
    if !seller_state_ok {
        errors.push(ValidationError::with_rule(
            "seller_state",
            format!("'{}' is not a 1-2 digit state code", invoice.seller_state()),
            "GST-03",
        ));
    }

    if !is_state_code_shape(invoice.supply_state()) {
        errors.push(ValidationError::with_rule(
            "supply_state",
            format!("'{}' is not a 1-2 digit state code", invoice.supply_state()),
            "GST-04",
        ));
    }

    if let Some(gstin) = seller_gstin {
        if seller_state_ok && !same_state(gstin.state_code(), invoice.seller_state()) {
            errors.push(ValidationError::with_rule(
                "seller_state",
                format!(
                    "seller GSTIN is registered in state {} but seller state is {}",
                    gstin.state_code(),
                    invoice.seller_state()
                ),
                "GST-05",
            ));
        }
    }

    for (i, item) in invoice.items().iter().enumerate() {
        if item.quantity() < 0 {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.quantity"),
                format!("quantity {} must not be negative", item.quantity()),
                "GST-06",
            ));
        }
        if item.price() < Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.price"),
                format!("price {} must not be negative", item.price()),
                "GST-07",
            ));
        }
        if item.tax_rate() < Decimal::ZERO || item.tax_rate() > dec!(100) {
            errors.push(ValidationError::with_rule(
                format!("items.{i}.tax_rate"),
                format!("tax rate {}% must be between 0 and 100", item.tax_rate()),
                "GST-08",
            ));
        }
    }

    errors
}
