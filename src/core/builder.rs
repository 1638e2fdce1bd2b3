use rust_decimal::Decimal;

use super::error::GstError;
use super::types::*;
use super::validation;

/// Builder for constructing validated invoices.
///
/// ```
/// use gstbook::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("27AAPFU0939F1ZV", "29AAQCS1234F1Z1", "27", "29")
///     .number("INV002")
///     .date("2024-04-02")
///     .add_item(InvoiceItemBuilder::new("Gadget", 1, dec!(200))
///         .hsn("5678")
///         .tax_rate(dec!(18))
///         .build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.supply_type(), SupplyType::Interstate);
/// ```
pub struct InvoiceBuilder {
    seller_gstin: String,
    buyer_gstin: String,
    seller_state: String,
    supply_state: String,
    number: String,
    date: String,
    items: Vec<InvoiceItem>,
}

impl InvoiceBuilder {
    pub fn new(
        seller_gstin: impl Into<String>,
        buyer_gstin: impl Into<String>,
        seller_state: impl Into<String>,
        supply_state: impl Into<String>,
    ) -> Self {
        Self {
            seller_gstin: seller_gstin.into(),
            buyer_gstin: buyer_gstin.into(),
            seller_state: seller_state.into(),
            supply_state: supply_state.into(),
            number: String::new(),
            date: String::new(),
            items: Vec::new(),
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    /// Build the invoice and run [`validate_invoice`](super::validate_invoice).
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, GstError> {
        let invoice = self.build_unchecked();

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::debug!(
                invoice = invoice.number(),
                errors = errors.len(),
                "invoice failed validation"
            );
            return Err(GstError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation — useful for importing external data.
    pub fn build_unchecked(self) -> Invoice {
        let mut invoice = Invoice::new(
            self.seller_gstin,
            self.buyer_gstin,
            self.seller_state,
            self.supply_state,
        );
        invoice.set_reference(self.number, self.date);
        for item in self.items {
            invoice.add_item(item);
        }
        invoice
    }
}

/// Builder for InvoiceItem.
pub struct InvoiceItemBuilder {
    description: String,
    hsn: String,
    quantity: i64,
    price: Decimal,
    tax_rate: Decimal,
}

impl InvoiceItemBuilder {
    /// New line with an empty HSN code and the 18% standard rate.
    pub fn new(description: impl Into<String>, quantity: i64, price: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn: String::new(),
            quantity,
            price,
            tax_rate: Decimal::new(18, 0),
        }
    }

    pub fn hsn(mut self, hsn: impl Into<String>) -> Self {
        self.hsn = hsn.into();
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn build(self) -> InvoiceItem {
        InvoiceItem::new(
            self.description,
            self.hsn,
            self.quantity,
            self.price,
            self.tax_rate,
        )
    }
}
