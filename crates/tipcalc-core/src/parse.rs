//! # Numeric Parsing
//!
//! Lenient, prefix-based number parsing for raw form text.
//!
//! Form fields are coerced the way a browser form coerces them: leading
//! whitespace is skipped, an optional sign is accepted, and the longest
//! numeric prefix wins. Trailing junk is ignored.
//!
//! ```text
//! input        parse_decimal     parse_integer
//! ──────────   ──────────────    ─────────────
//! "12.5"       Some(12.5)        Some(12.0)
//! "  7"        Some(7.0)         Some(7.0)
//! "12abc"      Some(12.0)        Some(12.0)
//! "-5"         Some(-5.0)        Some(-5.0)
//! ".5"         Some(0.5)         None
//! "1e3"        Some(1000.0)      Some(1.0)
//! "."          None              None
//! ""           None              None
//! "Infinity"   Some(inf)         None
//! ```
//!
//! The keystroke filters keep most of these shapes out of a live session,
//! but validation runs on any `FormState`, including hand-built ones.

/// Splits an optional leading sign off `s`, returning (is_negative, rest).
fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

/// Number of leading ASCII digits in `s`.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parses the longest decimal prefix of `s`.
///
/// Returns `None` when no digits are found. The result may be infinite
/// (for "Infinity" or an exponent that overflows); callers that need a
/// finite value must check.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let (negative, body) = split_sign(trimmed);

    if body.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_len = digit_run(body);
    let mut end = int_len;
    let mut frac_len = 0;
    if body[end..].starts_with('.') {
        frac_len = digit_run(&body[end + 1..]);
        end += 1 + frac_len;
    }
    if int_len + frac_len == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    let rest = &body[end..];
    if rest.starts_with(|c: char| c == 'e' || c == 'E') {
        let (_, exp_body) = split_sign(&rest[1..]);
        let exp_digits = digit_run(exp_body);
        if exp_digits > 0 {
            end += rest.len() - exp_body.len() + exp_digits;
        }
    }

    let magnitude: f64 = body[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the longest integer prefix of `s`.
///
/// The result is a whole number carried as `f64`, so a digit run of any
/// length keeps its magnitude (20 nines is `1e20`). A run too long for
/// `f64` comes back infinite.
pub fn parse_integer(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let (negative, body) = split_sign(trimmed);

    let len = digit_run(body);
    if len == 0 {
        return None;
    }

    let magnitude: f64 = body[..len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
