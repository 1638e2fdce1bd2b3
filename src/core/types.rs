use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single invoice line.
///
/// Fields are fixed at construction; derived values such as
/// [`subtotal`](Self::subtotal) are recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    description: String,
    hsn: String,
    quantity: i64,
    price: Decimal,
    tax_rate: Decimal,
}

impl InvoiceItem {
    /// Create a line item. `tax_rate` is a percentage (18 means 18%).
    ///
    /// No range checks are made here; see [`validate_invoice`](super::validate_invoice).
    pub fn new(
        description: impl Into<String>,
        hsn: impl Into<String>,
        quantity: i64,
        price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn: hsn.into(),
            quantity,
            price,
            tax_rate,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// HSN/SAC classification code, carried verbatim.
    pub fn hsn(&self) -> &str {
        &self.hsn
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price before tax.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Tax rate percentage.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// `quantity × price`, unrounded. Saturates at the `Decimal` range.
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }
}

/// Tax amounts for one invoice (or a sum of invoices), unrounded.
///
/// Sums saturate at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakup {
    /// Central GST — first half of an intrastate rate.
    pub cgst: Decimal,
    /// State GST — second half of an intrastate rate outside union territories.
    pub sgst: Decimal,
    /// Integrated GST — the full rate on interstate supplies.
    pub igst: Decimal,
    /// Union Territory GST — second half of an intrastate rate in a union territory.
    pub utgst: Decimal,
}

impl TaxBreakup {
    /// Sum of all four components.
    pub fn total(&self) -> Decimal {
        self.cgst
            .saturating_add(self.sgst)
            .saturating_add(self.igst)
            .saturating_add(self.utgst)
    }
}

impl Add for TaxBreakup {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for TaxBreakup {
    fn add_assign(&mut self, rhs: Self) {
        self.cgst = self.cgst.saturating_add(rhs.cgst);
        self.sgst = self.sgst.saturating_add(rhs.sgst);
        self.igst = self.igst.saturating_add(rhs.igst);
        self.utgst = self.utgst.saturating_add(rhs.utgst);
    }
}

impl Sum for TaxBreakup {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Whether a supply stays within one state or crosses state lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyType {
    /// Seller state equals place of supply: CGST + SGST/UTGST.
    Intrastate,
    /// Seller state differs from place of supply: IGST.
    Interstate,
}

/// A GST invoice.
///
/// Items are appended with [`add_item`](Self::add_item); all totals are
/// recomputed from the items on each query. Callers sharing an invoice across
/// threads must finish appending before any reader starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    seller_gstin: String,
    buyer_gstin: String,
    seller_state: String,
    supply_state: String,
    number: String,
    date: String,
    items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Create an empty invoice. State codes are used verbatim (e.g. "27").
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

    pub(crate) fn set_reference(&mut self, number: String, date: String) {
        self.number = number;
        self.date = date;
    }

    /// Append a line item.
    pub fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
    }

    pub fn seller_gstin(&self) -> &str {
        &self.seller_gstin
    }

    pub fn buyer_gstin(&self) -> &str {
        &self.buyer_gstin
    }

    /// Seller's state code.
    pub fn seller_state(&self) -> &str {
        &self.seller_state
    }

    /// Place-of-supply state code.
    pub fn supply_state(&self) -> &str {
        &self.supply_state
    }

    /// Invoice number, empty if not set.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Invoice date as given, empty if not set.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }
}
