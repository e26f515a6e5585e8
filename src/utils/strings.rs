/// Returns `s` with a trailing exact match of `suffix` removed.
///
/// Unchanged when `suffix` is empty or does not match.
pub fn remove_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return s;
    }
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Returns `s` with a leading exact match of `prefix` removed.
///
/// Unchanged when `prefix` is empty or does not match.
pub fn remove_prefix<'a>(s: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return s;
    }
    s.strip_prefix(prefix).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_suffix() {
        let s = "jason.bourne";
        assert_eq!(remove_suffix(s, ""), s);
        assert_eq!(remove_suffix(s, "foo"), s);
        assert_eq!(remove_suffix(s, ".bourne"), "jason");
    }

    #[test]
    fn test_remove_prefix() {
        let s = "jason.bourne";
        assert_eq!(remove_prefix(s, ""), s);
        assert_eq!(remove_prefix(s, "foo"), s);
        assert_eq!(remove_prefix(s, "jason"), ".bourne");
    }
}
