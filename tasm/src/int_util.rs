//! Integer-literal parsing for operand tokens. Base detection follows the
//! usual `0x`-hex / leading-`0`-octal / decimal convention; the strict
//! variants accept decimal only. Overflow and trailing junk yield `None`.

/// Removes the optional trailing `u`/`U` marker from an integer or label
/// token.
pub fn strip_unsigned_suffix(token: &str) -> &str {
    if token.ends_with('u') || token.ends_with('U') {
        &token[..token.len() - 1]
    } else {
        token
    }
}

fn split_sign(token: &str) -> (bool, &str) {
    if token.starts_with('-') {
        (true, &token[1..])
    } else if token.starts_with('+') {
        (false, &token[1..])
    } else {
        (false, token)
    }
}

fn detect_base(body: &str) -> (u32, &str) {
    if body.starts_with("0x") || body.starts_with("0X") {
        (16, &body[2..])
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    }
}

fn to_signed(negative: bool, magnitude: u64) -> Option<i64> {
    if negative {
        if magnitude > 1u64 << 63 {
            None
        } else {
            Some((magnitude as i64).wrapping_neg())
        }
    } else if magnitude <= i64::max_value() as u64 {
        Some(magnitude as i64)
    } else {
        None
    }
}

fn parse_magnitude(digits: &str, base: u32) -> Option<u64> {
    // `from_str_radix` would accept a second sign character here; the
    // caller has already split the sign off, so reject any leftovers.
    if digits.is_empty() || digits.starts_with('+') || digits.starts_with('-') {
        return None;
    }
    u64::from_str_radix(digits, base).ok()
}

/// Signed integer in any base.
pub fn parse_int(token: &str) -> Option<i64> {
    let (negative, body) = split_sign(token);
    let (base, digits) = detect_base(body);
    to_signed(negative, parse_magnitude(digits, base)?)
}

/// Signed integer, decimal only.
pub fn parse_int_decimal(token: &str) -> Option<i64> {
    let (negative, body) = split_sign(token);
    to_signed(negative, parse_magnitude(body, 10)?)
}

/// Unsigned integer in any base; a minus sign is rejected, not wrapped.
pub fn parse_uint(token: &str) -> Option<u64> {
    let (negative, body) = split_sign(token);
    if negative {
        return None;
    }
    let (base, digits) = detect_base(body);
    parse_magnitude(digits, base)
}

/// Unsigned integer, decimal only.
pub fn parse_uint_decimal(token: &str) -> Option<u64> {
    let (negative, body) = split_sign(token);
    if negative {
        return None;
    }
    parse_magnitude(body, 10)
}
