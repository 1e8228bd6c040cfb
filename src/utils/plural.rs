//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "error")` -> `"0 errors"`
/// - `plural_count(1, "error")` -> `"1 error"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "field"), "0 fields");
        assert_eq!(plural_count(1, "field"), "1 field");
        assert_eq!(plural_count(3, "field"), "3 fields");
    }
}
