/// Reads form text as a number the way a browser `Number()` call reads a
/// decimal string.
///
/// Surrounding whitespace is ignored and whitespace-only text is `0`. Rust
/// spellings that browsers reject (`inf`, `NaN`, `infinity`) and anything
/// that is not finite return `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_integers_and_decimals() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("45.30"), Some(45.30));
        assert_eq!(parse_number("-0.5"), Some(-0.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }

    #[test]
    fn trims_whitespace_and_reads_blank_as_zero() {
        assert_eq!(parse_number("  7 "), Some(7.0));
        assert_eq!(parse_number("   "), Some(0.0));
    }

    #[test]
    fn rejects_text_and_non_finite_values() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number("1,5"), None);
    }
}
