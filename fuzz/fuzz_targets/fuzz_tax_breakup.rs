#![no_main]

use gstbook::{Invoice, InvoiceItem};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

type RawDecimal = (u32, u32, u32, bool, u32);

fn decimal((lo, mid, hi, negative, scale): RawDecimal) -> Decimal {
    Decimal::from_parts(lo, mid, hi, negative, scale % 29)
}

fuzz_target!(|input: (String, String, Vec<(i64, RawDecimal, RawDecimal)>)| {
    let (seller_state, supply_state, lines) = input;
    let mut invoice = Invoice::new("", "", seller_state, supply_state);
    for (quantity, price, rate) in lines.into_iter().take(256) {
        invoice.add_item(InvoiceItem::new("", "", quantity, decimal(price), decimal(rate)));
    }
    // Full Decimal range: neither the engine, the record nor the reports may panic.
    let tax = invoice.tax_breakup();
    let _ = tax.total();
    let _ = invoice.invoice_value();
    let record = invoice.to_record();
    assert_eq!(record.items.len(), invoice.items().len());
    let _ = gstbook::validate_invoice(&invoice);
    let invoices = [invoice];
    for kind in gstbook::returns::ReturnKind::ALL {
        let _ = kind.generate(&invoices, &Default::default());
    }
});
