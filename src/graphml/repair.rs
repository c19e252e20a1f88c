//! Numeric character reference repair
//!
//! Some serializers write every non-ASCII character of a name as a numeric
//! character reference (`&#228;`, `&#x1F600;`). Readers of the exported
//! documents expect the names themselves, so references are decoded back to
//! literal characters.

use std::borrow::Cow;

/// Replace numeric character references with the characters they encode.
///
/// Decimal and hexadecimal forms of any length are decoded. A reference is
/// left as written when it does not parse, names a code point that is not a
/// character, names a control character, or names one of the XML markup
/// characters `& < > " '` (decoding those would break the document).
pub fn repair_numeric_references(text: &str) -> Cow<'_, str> {
    if !text.contains("&#") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("&#") {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match decode_reference(candidate) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &candidate[consumed..];
            }
            None => {
                out.push_str("&#");
                rest = &candidate[2..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Decode the reference at the start of `s`, returning the character and
/// the number of bytes the reference spans.
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let body = s.strip_prefix("&#")?;
    let (digits, radix, prefix_len) = match body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        Some(hex) => (hex, 16, 3),
        None => (body, 10, 2),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 || !digits[end..].starts_with(';') {
        return None;
    }
    let number = &digits[..end];

    let ch = u32::from_str_radix(number, radix).ok().and_then(char::from_u32)?;
    if !is_literal_safe(ch) {
        return None;
    }
    Some((ch, prefix_len + end + 1))
}

fn is_literal_safe(ch: char) -> bool {
    !ch.is_control() && !matches!(ch, '&' | '<' | '>' | '"' | '\'' | '\u{FFFE}' | '\u{FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_digit_decimal() {
        assert_eq!(repair_numeric_references("B&#0228;r"), "Bär");
        assert_eq!(repair_numeric_references("&#1046;enya"), "Жenya");
    }

    #[test]
    fn any_digit_count() {
        assert_eq!(repair_numeric_references("B&#228;r"), "Bär");
        assert_eq!(repair_numeric_references("&#128512;"), "😀");
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(repair_numeric_references("&#xE4;&#X1F600;"), "ä😀");
    }

    #[test]
    fn markup_characters_stay_escaped() {
        let text = "Tom &#38; Jerry &#60;3 &#x22;";
        assert_eq!(repair_numeric_references(text), text);
    }

    #[test]
    fn invalid_references_stay_as_written() {
        for text in ["&#;", "&#12", "&#x;", "&#12a;", "&#55296;", "&#99999999999;", "&#9;", "&#"] {
            assert_eq!(repair_numeric_references(text), text, "{}", text);
        }
    }

    #[test]
    fn unterminated_references_scan_in_linear_time() {
        let text = "&#".repeat(100_000);
        let start = std::time::Instant::now();
        assert_eq!(repair_numeric_references(&text), text);
        assert!(start.elapsed() < std::time::Duration::from_secs(2));

        let text = format!("{}{}", "&#12".repeat(100_000), ";");
        assert!(repair_numeric_references(&text).starts_with("&#12&#12"));
    }

    #[test]
    fn named_entities_untouched() {
        let text = "Tom &amp; Jerry &#228;";
        assert_eq!(repair_numeric_references(text), "Tom &amp; Jerry ä");
    }

    #[test]
    fn text_without_references_is_borrowed() {
        assert!(matches!(repair_numeric_references("plain"), Cow::Borrowed(_)));
    }
}
