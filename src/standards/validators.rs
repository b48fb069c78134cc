/// Longest attribute value the orchestration API accepts.
pub const MAX_ATTR_LENGTH: usize = 2000;

/// Clamp an attribute value to [`MAX_ATTR_LENGTH`] characters.
///
/// Counted in characters, not bytes, so a multi-byte value is never cut on
/// a UTF-8 boundary. Applied at the single attribute-mutation entry point
/// rather than interposed on every setter.
pub fn truncate_attr(value: &str) -> &str {
    match value.char_indices().nth(MAX_ATTR_LENGTH) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_pass_through() {
        assert_eq!(truncate_attr("Cisco IOS 15.2"), "Cisco IOS 15.2");
        assert_eq!(truncate_attr(""), "");
    }

    #[test]
    fn exact_length_is_untouched() {
        let value = "x".repeat(MAX_ATTR_LENGTH);
        assert_eq!(truncate_attr(&value), value);
    }

    #[test]
    fn long_values_are_clamped() {
        let value = "x".repeat(MAX_ATTR_LENGTH + 10);
        assert_eq!(truncate_attr(&value).len(), MAX_ATTR_LENGTH);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let value = "é".repeat(MAX_ATTR_LENGTH + 1);
        let clamped = truncate_attr(&value);
        assert_eq!(clamped.chars().count(), MAX_ATTR_LENGTH);
        assert!(clamped.is_char_boundary(clamped.len()));
    }
}
