use crate::{Error, Result};

/// Decodes a `text/plain` body holding a single signed integer literal.
///
/// The whole body must be the literal; surrounding whitespace, including a
/// trailing newline, is rejected. The base is inferred from the prefix: `0x`
/// hexadecimal, `0o` octal, `0b` binary, a bare leading `0` octal, and
/// decimal otherwise. An optional `+` or `-` sign may precede the prefix.
/// Underscores may separate digits (`1_000`, `0x_ff`).
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if the body is not UTF-8, is empty,
/// contains anything besides the literal, or overflows an `i64`.
///
/// # Example
///
/// ```
/// use snowizard::decode::text;
///
/// assert_eq!(text::decode(b"12345"), Ok(12345));
/// assert_eq!(text::decode(b"0x1f"), Ok(31));
/// assert_eq!(text::decode(b"1_000"), Ok(1000));
/// assert!(text::decode(b"12345\n").is_err());
/// assert!(text::decode(b"not-a-number").is_err());
/// ```
pub fn decode(body: &[u8]) -> Result<i64> {
    let Ok(s) = core::str::from_utf8(body) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = body.len(), "text body is not valid utf-8");
        return Err(Error::MalformedResponse);
    };

    parse_auto_base(s).ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!(body = s, "text body is not an i64 literal");
        Error::MalformedResponse
    })
}

fn parse_auto_base(s: &str) -> Option<i64> {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };

    let (radix, digits) = if let Some(d) = strip_radix_prefix(unsigned, 'x') {
        (16, d)
    } else if let Some(d) = strip_radix_prefix(unsigned, 'o') {
        (8, d)
    } else if let Some(d) = strip_radix_prefix(unsigned, 'b') {
        (2, d)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // Everything but plain decimal starts with a digit or prefix, which is
    // what lets an underscore come first.
    if !underscores_ok(digits, radix != 10) {
        return None;
    }
    let digits = digits.replace('_', "");

    // `from_str_radix` accepts its own sign, which must not appear twice.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    // Re-attaching the sign lets `i64::MIN` parse without overflowing.
    i64::from_str_radix(&format!("{sign}{digits}"), radix).ok()
}

/// Underscores must sit between digits, or right after a base prefix, and
/// may not repeat or trail.
fn underscores_ok(digits: &str, after_prefix: bool) -> bool {
    let mut prev_digit = after_prefix;
    let mut prev_underscore = false;
    for b in digits.bytes() {
        if b == b'_' {
            if !prev_digit {
                return false;
            }
            prev_digit = false;
            prev_underscore = true;
        } else {
            prev_digit = true;
            prev_underscore = false;
        }
    }
    !prev_underscore
}

fn strip_radix_prefix(s: &str, marker: char) -> Option<&str> {
    let rest = s.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
