/// Response size for logs with dot thousands separators: 1234567 -> "1.234.567 B"
pub fn format_size(bytes: usize) -> String {
    let digits = bytes.to_string();
    let head = digits.len() % 3;

    let mut groups: Vec<&str> = Vec::new();
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );

    format!("{} B", groups.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(42), "42 B");
        assert_eq!(format_size(999), "999 B");
        assert_eq!(format_size(1000), "1.000 B");
        assert_eq!(format_size(12345), "12.345 B");
        assert_eq!(format_size(1234567), "1.234.567 B");
        assert_eq!(format_size(1234567890), "1.234.567.890 B");
    }
}
