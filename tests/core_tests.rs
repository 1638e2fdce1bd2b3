#![cfg(feature = "core")]

use gstbook::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn intrastate_invoice() -> Invoice {
    InvoiceBuilder::new("27AAPFU0939F1ZV", "27AAQCS1234F1Z1", "27", "27")
        .number("INV001")
        .date("2024-04-01")
        .add_item(
            InvoiceItemBuilder::new("Widget", 2, dec!(100.0))
                .hsn("1234")
                .tax_rate(dec!(18.0))
                .build(),
        )
        .build()
        .unwrap()
}

fn interstate_invoice() -> Invoice {
    InvoiceBuilder::new("27AAPFU0939F1ZV", "29AAQCS1234F1Z1", "27", "29")
        .number("INV002")
        .date("2024-04-02")
        .add_item(
            InvoiceItemBuilder::new("Widget", 1, dec!(100.0))
                .hsn("1234")
                .tax_rate(dec!(18.0))
                .build(),
        )
        .build()
        .unwrap()
}

// --- GSTIN ---

#[test]
fn gstin_examples() {
    assert!(validate_gstin("27AAPFU0939F1ZV"));
    assert!(!validate_gstin("INVALID123"));
}

#[test]
fn gstin_every_position_checked() {
    let valid = "27AAPFU0939F1ZV";
    // A replacement at each position that breaks that position's class.
    let breakers = ['A', 'A', '1', '1', '1', '1', '1', 'A', 'A', 'A', 'A', '1', '0', 'Y', 'a'];
    for (pos, bad) in breakers.iter().enumerate() {
        let mut chars: Vec<char> = valid.chars().collect();
        chars[pos] = *bad;
        let candidate: String = chars.into_iter().collect();
        assert!(
            !validate_gstin(&candidate),
            "{candidate} should be rejected (position {pos})"
        );
    }
}

#[test]
fn gstin_serde_rejects_bad_format() {
    let ok: Gstin = serde_json::from_str("\"27AAPFU0939F1ZV\"").unwrap();
    assert_eq!(ok.state_code(), "27");
    assert!(serde_json::from_str::<Gstin>("\"27AAPFU0939F1Z\"").is_err());
}

// --- Tax breakup ---

#[test]
fn intrastate_breakup() {
    let tax = intrastate_invoice().tax_breakup();
    assert_eq!(tax.cgst, dec!(18.0));
    assert_eq!(tax.sgst, dec!(18.0));
    assert_eq!(tax.igst, dec!(0));
    assert_eq!(tax.utgst, dec!(0));
    assert_eq!(tax.total(), dec!(36));
}

#[test]
fn interstate_breakup() {
    let tax = interstate_invoice().tax_breakup();
    assert_eq!(tax.cgst, dec!(0));
    assert_eq!(tax.sgst, dec!(0));
    assert_eq!(tax.utgst, dec!(0));
    assert_eq!(tax.igst, dec!(18.0));
}

#[test]
fn every_union_territory_uses_utgst() {
    for code in states::UNION_TERRITORY_CODES {
        let mut inv = Invoice::new("x", "y", *code, *code);
        inv.add_item(InvoiceItem::new("Widget", "1234", 1, dec!(100), dec!(18)));
        let tax = inv.tax_breakup();
        assert_eq!(tax.cgst, dec!(9), "state {code}");
        assert_eq!(tax.utgst, dec!(9), "state {code}");
        assert_eq!(tax.sgst, dec!(0), "state {code}");
    }
}

#[test]
fn tax_breakup_is_repeatable() {
    let inv = intrastate_invoice();
    assert_eq!(inv.tax_breakup(), inv.tax_breakup());
    assert_eq!(inv.total_before_tax(), inv.total_before_tax());
}

#[test]
fn appending_recomputes() {
    let mut inv = intrastate_invoice();
    let before = inv.tax_breakup();
    inv.add_item(InvoiceItem::new("Gadget", "5678", 1, dec!(50), dec!(12)));
    let after = inv.tax_breakup();
    assert_eq!(after.cgst - before.cgst, dec!(3));
    assert_eq!(inv.total_before_tax(), dec!(250));
}

#[test]
fn breakups_add_elementwise() {
    let a = intrastate_invoice().tax_breakup();
    let b = interstate_invoice().tax_breakup();
    let sum: TaxBreakup = [a, b].into_iter().sum();
    assert_eq!(sum, a + b);
    assert_eq!(sum.cgst, dec!(18));
    assert_eq!(sum.igst, dec!(18));
    assert_eq!(sum.total(), dec!(54));
}

// --- Record ---

#[test]
fn record_shape() {
    let rec = intrastate_invoice().to_record();
    assert_eq!(rec.seller_gstin, "27AAPFU0939F1ZV");
    assert_eq!(rec.buyer_gstin, "27AAQCS1234F1Z1");
    assert_eq!(rec.total_before_tax, dec!(200));
    assert_eq!(rec.taxes.cgst, dec!(18));
    assert_eq!(rec.taxes.sgst, dec!(18));
    assert_eq!(rec.total, dec!(236));
    assert_eq!(rec.items[0].description, "Widget");
    assert_eq!(rec.items[0].quantity, 2);
}

#[test]
fn record_json_keys() {
    let rec = intrastate_invoice().to_record();
    let value = serde_json::to_value(&rec).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for key in ["seller_gstin", "buyer_gstin", "total_before_tax", "taxes", "total", "items"] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    let taxes = value["taxes"].as_object().unwrap();
    for key in ["cgst", "sgst", "utgst", "igst"] {
        assert!(taxes.contains_key(key), "missing tax key {key}");
    }
    assert_eq!(value["items"][0]["subtotal"], "200.00");
    assert_eq!(value["taxes"]["cgst"], "18.00");
}

#[cfg(feature = "json")]
#[test]
fn record_to_json_emits_string_amounts() {
    let json = intrastate_invoice().to_record().to_json().unwrap();
    assert!(json.contains('\n'), "expected pretty-printed output");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["seller_gstin"], "27AAPFU0939F1ZV");
    assert_eq!(value["total_before_tax"], "200.00");
    assert_eq!(value["taxes"]["cgst"], "18.00");
    assert_eq!(value["taxes"]["utgst"], "0.00");
    assert_eq!(value["total"], "236.00");
    assert_eq!(value["items"][0]["hsn"], "1234");
    let parsed: InvoiceRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, intrastate_invoice().to_record());
}

#[test]
fn record_deserializes_back() {
    let rec = interstate_invoice().to_record();
    let json = serde_json::to_string(&rec).unwrap();
    let parsed: InvoiceRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, rec);
}

// --- Validation ---

#[test]
fn builder_rejects_invalid_buyer() {
    let err = InvoiceBuilder::new("27AAPFU0939F1ZV", "INVALID123", "27", "27")
        .build()
        .unwrap_err();
    assert!(matches!(err, GstError::Validation(_)));
    assert!(err.to_string().contains("[GST-02] buyer_gstin"));
}

#[test]
fn oversized_amounts_saturate_instead_of_panicking() {
    let mut inv = Invoice::new("27AAPFU0939F1ZV", "29AAQCS1234F1Z1", "27", "29");
    inv.add_item(InvoiceItem::new("Ship", "8901", i64::MAX, Decimal::MAX, dec!(18)));
    inv.add_item(InvoiceItem::new("Ship", "8901", 1, Decimal::MAX, dec!(18)));
    assert_eq!(inv.total_before_tax(), Decimal::MAX);
    assert!(inv.tax_breakup().igst > dec!(0));
    let rec = inv.to_record();
    assert_eq!(rec.items.len(), 2);
    assert_eq!(rec.total, round_money(Decimal::MAX));
}

#[test]
fn trusting_path_accepts_anything() {
    let mut inv = Invoice::new("", "", "", "");
    inv.add_item(InvoiceItem::new("", "", -3, dec!(-1.5), dec!(-18)));
    // "" == "" so intrastate; never panics
    let tax = inv.tax_breakup();
    assert_eq!(inv.total_before_tax(), dec!(4.5));
    assert_eq!(tax.cgst, dec!(-0.405));
    assert_eq!(tax.sgst, dec!(-0.405));
    assert!(!validate_invoice(&inv).is_empty());
}
