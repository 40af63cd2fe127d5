/// Lenient integer parse: surrounding whitespace, an optional sign, then as many
/// leading digits as there are. Trailing garbage is ignored, so `"12abc"` is 12.
/// Returns `None` when there are no digits or the value overflows `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Requested fleet size from a `count` query value. Missing, non-numeric and
/// zero values become `None` (the default); negative values are kept.
pub fn parse_count(raw: Option<&str>) -> Option<i64> {
    raw.and_then(parse_leading_int).filter(|n| *n != 0)
}

/// Vehicle id from a path segment; `None` matches no vehicle.
pub fn parse_vehicle_id(raw: &str) -> Option<u32> {
    parse_leading_int(raw).and_then(|n| u32::try_from(n).ok())
}
