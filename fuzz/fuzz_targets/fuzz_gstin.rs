#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the bool and detailed checks must agree.
        let valid = gstbook::validate_gstin(s);
        let checked = gstbook::check_gstin(s);
        assert_eq!(valid, checked.is_ok());
        if let Ok(gstin) = checked {
            let _ = (gstin.state_code(), gstin.pan(), gstin.entity_code());
        }
    }
});
