//! GST state and union-territory code classification.

/// Place-of-supply codes whose intrastate second half is levied as UTGST
/// instead of SGST.
///
/// Closed set; codes are compared verbatim, so "04" is not a member while "4" is.
pub const UNION_TERRITORY_CODES: &[&str] = &["35", "31", "34", "3", "4", "7"];

/// Check whether `code` is one of the union-territory codes.
pub fn is_union_territory(code: &str) -> bool {
    UNION_TERRITORY_CODES.contains(&code)
}

/// Check whether `code` has the shape of a state code: one or two ASCII digits.
pub fn is_state_code_shape(code: &str) -> bool {
    (1..=2).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two state codes numerically, so "7" matches "07".
///
/// Returns `false` if either side is not a well-formed state code.
pub fn same_state(a: &str, b: &str) -> bool {
    match (parse_code(a), parse_code(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn parse_code(code: &str) -> Option<u8> {
    if is_state_code_shape(code) {
        code.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_territories() {
        for code in ["35", "31", "34", "3", "4", "7"] {
            assert!(is_union_territory(code), "{code} should be a union territory");
        }
    }

    #[test]
    fn states_are_not_union_territories() {
        assert!(!is_union_territory("27"));
        assert!(!is_union_territory("29"));
        assert!(!is_union_territory(""));
        // verbatim comparison, no zero padding
        assert!(!is_union_territory("04"));
        assert!(!is_union_territory("07"));
    }

    #[test]
    fn state_code_shape() {
        assert!(is_state_code_shape("27"));
        assert!(is_state_code_shape("7"));
        assert!(!is_state_code_shape(""));
        assert!(!is_state_code_shape("270"));
        assert!(!is_state_code_shape("MH"));
    }

    #[test]
    fn numeric_comparison() {
        assert!(same_state("07", "7"));
        assert!(same_state("27", "27"));
        assert!(!same_state("27", "29"));
        assert!(!same_state("27", "MH"));
    }
}
