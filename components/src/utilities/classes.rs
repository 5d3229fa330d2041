// Class Name Merging
// Combines conditional class fragments into one normalized string

/// Merge class fragments into a normalized class string.
/// Fragments are joined in order, internal whitespace is deduplicated and
/// trimmed, and an all-empty input yields no class at all.
pub fn class_string(fragments: &[String]) -> Option<String> {
    let joined = fragments
        .iter()
        .flat_map(|fragment| fragment.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Merge borrowed fragments; conditional fragments may be empty strings
pub fn cn(fragments: &[&str]) -> Option<String> {
    let owned: Vec<String> = fragments.iter().map(|f| f.to_string()).collect();
    class_string(&owned)
}

/// Whether any fragment in the list carries the given token
pub fn has_class(classes: &[String], token: &str) -> bool {
    classes
        .iter()
        .any(|fragment| fragment.split_whitespace().any(|t| t == token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_join_in_order() {
        assert_eq!(
            cn(&["rounded-md border", "bg-card"]),
            Some("rounded-md border bg-card".to_string())
        );
    }

    #[test]
    fn test_whitespace_is_deduplicated() {
        assert_eq!(
            cn(&["  px-3   py-1 ", "", "  font-medium"]),
            Some("px-3 py-1 font-medium".to_string())
        );
    }

    #[test]
    fn test_empty_input_yields_no_class() {
        assert_eq!(cn(&[]), None);
        assert_eq!(cn(&["", "   "]), None);
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let classes = vec!["left-0 border-r".to_string(), "w-80".to_string()];
        assert!(has_class(&classes, "border-r"));
        assert!(has_class(&classes, "w-80"));
        assert!(!has_class(&classes, "border"));
    }
}
