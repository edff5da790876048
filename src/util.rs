use std::borrow::Cow;

pub(crate) fn normalize_lower(value: &str) -> Cow<'_, str> {
    if value.is_ascii() {
        if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
            Cow::Owned(value.to_ascii_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    } else if value.chars().any(|ch| ch.is_uppercase()) {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

/// First non-empty entry of a comma separated header value, trimmed.
pub(crate) fn first_list_value(value: &str) -> Option<&str> {
    value
        .split(',')
        .map(str::trim)
        .find(|part| !part.is_empty())
}

/// Integer-cast semantics: optional leading whitespace and sign, then as many
/// digits as are present. Anything else reads as zero.
pub(crate) fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, byte| {
            acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Byte offset of the `n`th character, or `None` when `value` is shorter.
pub(crate) fn char_offset(value: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    match value.char_indices().nth(n) {
        Some((idx, _)) => Some(idx),
        None if value.chars().count() == n => Some(value.len()),
        None => None,
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
