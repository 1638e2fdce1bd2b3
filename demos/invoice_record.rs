use gstbook::core::*;
use rust_decimal_macros::dec;

fn main() {
    for candidate in ["27AAPFU0939F1ZV", "27aapfu0939f1zv", "INVALID123"] {
        match check_gstin(candidate) {
            Ok(gstin) => println!("{gstin}: valid, state {}, PAN {}", gstin.state_code(), gstin.pan()),
            Err(e) => println!("{e}"),
        }
    }

    // Andaman & Nicobar is a union territory: CGST + UTGST
    let mut invoice = Invoice::new("35AAPFU0939F1ZV", "35AAQCS1234F1Z1", "35", "35");
    invoice.add_item(InvoiceItem::new("Fishing net", "5608", 3, dec!(1250.50), dec!(12)));
    invoice.add_item(InvoiceItem::new("Rope", "5607", 10, dec!(85.75), dec!(12)));

    let errors = validate_invoice(&invoice);
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        return;
    }

    match invoice.to_record().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{e}"),
    }
}
