//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join vertex names into an arrow path such as `A -> B -> A`
pub fn arrow_path<S: AsRef<str>>(vertices: &[S]) -> String {
    vertices
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("cycle", 0), "cycles");
        assert_eq!(pluralize("cycle", 1), "cycle");
        assert_eq!(pluralize("cycle", 5), "cycles");
    }

    #[test]
    fn test_arrow_path() {
        assert_eq!(arrow_path(&["A", "B", "C", "A"]), "A -> B -> C -> A");
        assert_eq!(arrow_path::<&str>(&[]), "");
    }
}
