use std::cmp::Ordering;

/// Normalize a price-like token into a canonical integer string.
///
/// Accepts `450000`, `$450,000`, `450k`, `450.5k` and `1.2m`. Shorthand is
/// scaled and rounded half away from zero using exact decimal arithmetic, so
/// `1.2m` is always `1200000`. Anything else yields an empty string, which
/// callers treat as "not a price".
pub fn normalize_price(raw: &str) -> String {
    let cleaned = raw.trim();
    let cleaned = cleaned.strip_prefix('$').unwrap_or(cleaned);
    let cleaned = cleaned.replace(',', "").trim().to_lowercase();

    if is_digits(&cleaned) {
        return cleaned;
    }

    let (number, exponent) = if let Some(n) = cleaned.strip_suffix('k') {
        (n, 3)
    } else if let Some(n) = cleaned.strip_suffix('m') {
        (n, 6)
    } else {
        return String::new();
    };

    scale_decimal(number, exponent)
        .map(|v| v.to_string())
        .unwrap_or_default()
}

/// Multiply a `<digits>[.<digits>]` literal by `10^exponent`, rounding the
/// remaining fraction half away from zero.
fn scale_decimal(number: &str, exponent: u32) -> Option<u128> {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    if !is_digits(int_part) || !(frac_part.is_empty() || is_digits(frac_part)) {
        return None;
    }
    if number.ends_with('.') {
        return None;
    }

    let scale = 10u128.checked_pow(exponent)?;
    let mut value = int_part.parse::<u128>().ok()?.checked_mul(scale)?;

    let frac = frac_part.as_bytes();
    let mut fraction = 0u128;
    for pos in 0..exponent as usize {
        let digit = frac.get(pos).map(|b| u128::from(b - b'0')).unwrap_or(0);
        fraction = fraction * 10 + digit;
    }
    value = value.checked_add(fraction)?;

    if frac.get(exponent as usize).is_some_and(|b| *b >= b'5') {
        value = value.checked_add(1)?;
    }

    Some(value)
}

/// Compare two unsigned integer strings by numeric value without parsing,
/// so arbitrarily long inputs never overflow.
pub fn compare_amounts(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
