pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Width of the widest name, clamped to `[min, max]`
pub fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    values
        .map(|value| value.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Summer Sale", 20), "Summer Sale");
        assert_eq!(truncate("New Year Promotion", 10), "New Yea...");
        assert_eq!(truncate("Flash", 2), "Fl");
    }

    #[test]
    fn test_column_width_clamps() {
        assert_eq!(column_width(["ab", "abcdef"].into_iter(), 4, 30), 6);
        assert_eq!(column_width(["a"].into_iter(), 4, 30), 4);
        assert_eq!(column_width(std::iter::empty(), 4, 30), 4);
        assert_eq!(column_width(["x".repeat(50).as_str()].into_iter(), 4, 30), 30);
    }
}
