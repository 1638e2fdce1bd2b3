//! Intrastate/interstate tax split.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::states::is_union_territory;
use super::types::{Invoice, SupplyType, TaxBreakup};

/// Round a monetary amount to 2 decimal places, half away from zero.
///
/// The result always carries a scale of exactly 2, so `18` becomes `18.00`.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

impl Invoice {
    /// Intrastate when the seller state equals the place of supply.
    ///
    /// Codes are compared exactly as stored; "7" and "07" are different states here.
    pub fn supply_type(&self) -> SupplyType {
        if self.seller_state() == self.supply_state() {
            SupplyType::Intrastate
        } else {
            SupplyType::Interstate
        }
    }

    /// Sum of every item's subtotal, unrounded.
    pub fn total_before_tax(&self) -> Decimal {
        self.items()
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.subtotal()))
    }

    /// Compute the GST breakup for this invoice.
    ///
    /// Intrastate: half the rate to CGST, half to SGST (or UTGST when the
    /// place of supply is a union territory). Interstate: the full rate to IGST.
    /// Total over any input, including empty, zero-rated or negative items;
    /// amounts beyond the `Decimal` range saturate.
    pub fn tax_breakup(&self) -> TaxBreakup {
        let supply_type = self.supply_type();
        let union_territory = is_union_territory(self.supply_state());

        let mut breakup = TaxBreakup::default();
        for item in self.items() {
            let taxable = item.subtotal();
            match supply_type {
                SupplyType::Intrastate => {
                    let half_rate = item.tax_rate() / dec!(2) / dec!(100);
                    let half = taxable.saturating_mul(half_rate);
                    breakup.cgst = breakup.cgst.saturating_add(half);
                    if union_territory {
                        breakup.utgst = breakup.utgst.saturating_add(half);
                    } else {
                        breakup.sgst = breakup.sgst.saturating_add(half);
                    }
                }
                SupplyType::Interstate => {
                    let tax = taxable.saturating_mul(item.tax_rate() / dec!(100));
                    breakup.igst = breakup.igst.saturating_add(tax);
                }
            }
        }

        tracing::trace!(
            invoice = self.number(),
            ?supply_type,
            items = self.items().len(),
            total_tax = %breakup.total(),
            "computed tax breakup"
        );
        breakup
    }

    /// Pre-tax total plus every tax component, unrounded.
    pub fn invoice_value(&self) -> Decimal {
        self.total_before_tax()
            .saturating_add(self.tax_breakup().total())
    }
}
