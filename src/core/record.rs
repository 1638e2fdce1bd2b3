//! Structured, presentation-rounded view of an invoice.
//!
//! This is the shape handed to downstream consumers (JSON, APIs). Every
//! amount is rounded to 2 places; key names are stable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax::round_money;
use super::types::{Invoice, InvoiceItem};

/// Presentation record for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub seller_gstin: String,
    pub buyer_gstin: String,
    /// Sum of line subtotals, rounded.
    pub total_before_tax: Decimal,
    pub taxes: TaxRecord,
    /// Pre-tax total plus all taxes, rounded once from unrounded parts.
    pub total: Decimal,
    pub items: Vec<ItemRecord>,
}

/// Rounded tax components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecord {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub utgst: Decimal,
    pub igst: Decimal,
}

/// One line of an [`InvoiceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub description: String,
    pub hsn: String,
    pub quantity: i64,
    pub price: Decimal,
    pub tax_rate: Decimal,
    /// `quantity × price`, rounded.
    pub subtotal: Decimal,
}

impl From<&InvoiceItem> for ItemRecord {
    fn from(item: &InvoiceItem) -> Self {
        Self {
            description: item.description().to_string(),
            hsn: item.hsn().to_string(),
            quantity: item.quantity(),
            price: item.price(),
            tax_rate: item.tax_rate(),
            subtotal: round_money(item.subtotal()),
        }
    }
}

impl Invoice {
    /// Build the structured record for this invoice.
    pub fn to_record(&self) -> InvoiceRecord {
        let before_tax = self.total_before_tax();
        let tax = self.tax_breakup();
        InvoiceRecord {
            seller_gstin: self.seller_gstin().to_string(),
            buyer_gstin: self.buyer_gstin().to_string(),
            total_before_tax: round_money(before_tax),
            taxes: TaxRecord {
                cgst: round_money(tax.cgst),
                sgst: round_money(tax.sgst),
                utgst: round_money(tax.utgst),
                igst: round_money(tax.igst),
            },
            total: round_money(before_tax.saturating_add(tax.total())),
            items: self.items().iter().map(ItemRecord::from).collect(),
        }
    }
}

#[cfg(feature = "json")]
impl InvoiceRecord {
    /// Encode as pretty-printed JSON. Amounts are emitted as strings.
    pub fn to_json(&self) -> Result<String, super::GstError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| super::GstError::Serialization(e.to_string()))
    }
}
