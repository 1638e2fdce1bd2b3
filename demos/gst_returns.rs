use gstbook::core::*;
use gstbook::returns::*;
use rust_decimal_macros::dec;

fn main() {
    // Intrastate sale within Maharashtra: CGST + SGST
    let local = InvoiceBuilder::new("27AAPFU0939F1ZV", "27AAQCS1234F1Z1", "27", "27")
        .number("INV001")
        .date("2024-04-01")
        .add_item(
            InvoiceItemBuilder::new("Widget", 2, dec!(100))
                .hsn("1234")
                .tax_rate(dec!(18))
                .build(),
        )
        .build()
        .expect("invoice should be valid");

    // Interstate sale to Karnataka: IGST
    let outstation = InvoiceBuilder::new("27AAPFU0939F1ZV", "29AAQCS1234F1Z1", "27", "29")
        .number("INV002")
        .date("2024-04-02")
        .add_item(
            InvoiceItemBuilder::new("Gadget", 1, dec!(200))
                .hsn("5678")
                .tax_rate(dec!(18))
                .build(),
        )
        .build()
        .expect("invoice should be valid");

    let invoices = [local, outstation];

    for inv in &invoices {
        let tax = inv.tax_breakup();
        println!(
            "{} ({:?}): taxable {}  CGST {}  SGST {}  UTGST {}  IGST {}",
            inv.number(),
            inv.supply_type(),
            round_money(inv.total_before_tax()),
            round_money(tax.cgst),
            round_money(tax.sgst),
            round_money(tax.utgst),
            round_money(tax.igst),
        );
    }

    let config = ReportConfigBuilder::new()
        .terminator(LineTerminator::Lf)
        .build();
    for kind in ReturnKind::ALL {
        println!("--- {kind} ---");
        match kind.generate(&invoices, &config) {
            Ok(csv) => print!("{csv}"),
            Err(e) => eprintln!("{kind} failed: {e}"),
        }
    }
}
