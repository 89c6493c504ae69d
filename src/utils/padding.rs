// ============================================================================
// Padding and Grouping
// Character-level string helpers
// ============================================================================

/// Left-pad `s` with `pad` until it is `length` characters long.
///
/// Strings already at or beyond `length` are returned unchanged.
pub fn pad_left(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * pad.len_utf8());
    out.extend(std::iter::repeat(pad).take(missing));
    out.push_str(s);
    out
}

/// Right-pad `s` with `pad` until it is `length` characters long.
pub fn pad_right(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * pad.len_utf8());
    out.push_str(s);
    out.extend(std::iter::repeat(pad).take(missing));
    out
}

/// Insert `separator` between every `size` characters of `digits`.
///
/// Groups are counted from the right end when `from_right` is set (integer
/// parts), from the left otherwise (fraction parts). A zero `size` disables
/// grouping.
pub fn group_digits(digits: &str, separator: char, size: usize, from_right: bool) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if size == 0 || chars.len() <= size {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + chars.len() / size * separator.len_utf8());
    let offset = if from_right { chars.len() % size } else { 0 };
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (i + size - offset) % size == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("1", 3, '0'), "001");
        assert_eq!(pad_left("1234", 3, '0'), "1234");
        assert_eq!(pad_left("", 2, ' '), "  ");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("5", 3, '0'), "500");
        assert_eq!(pad_right("12", 2, '0'), "12");
    }

    #[test]
    fn test_group_digits_from_right() {
        assert_eq!(group_digits("1234567", ',', 3, true), "1,234,567");
        assert_eq!(group_digits("123456", ',', 3, true), "123,456");
        assert_eq!(group_digits("12345", ' ', 3, true), "12 345");
        assert_eq!(group_digits("123", ',', 3, true), "123");
        assert_eq!(group_digits("1234", ',', 2, true), "12,34");
    }

    #[test]
    fn test_group_digits_from_left() {
        assert_eq!(group_digits("1234567", ',', 3, false), "123,456,7");
        assert_eq!(group_digits("123456", ' ', 3, false), "123 456");
    }

    #[test]
    fn test_group_digits_disabled() {
        assert_eq!(group_digits("123456", ',', 0, true), "123456");
    }
}
