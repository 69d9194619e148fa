/// An integer literal found in a sentence
///
/// Magnitudes are kept exact: literals too large for `u64` are not
/// truncated, and any negative literal compares below every limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    /// A strictly negative integer
    Negative,
    /// A non-negative integer that fits in `u64`
    Value(u64),
    /// A non-negative integer larger than `u64::MAX`
    Overflow,
}

impl Numeral {
    /// Whether this numeral is strictly less than `limit`
    pub fn is_below(self, limit: u64) -> bool {
        match self {
            Numeral::Negative => true,
            Numeral::Value(value) => value < limit,
            Numeral::Overflow => false,
        }
    }
}

/// Parse a whole token as a base-10 integer literal
///
/// The token must be an optional `+` or `-` followed by one or more ASCII
/// digits. Anything else (`12,`, `1.5`, `12th`, `twelve`) is not a numeral.
pub fn parse_numeral(token: &str) -> Option<Numeral> {
    let (negative, digits) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let is_zero = digits.bytes().all(|b| b == b'0');
    if negative && !is_zero {
        return Some(Numeral::Negative);
    }

    // Only overflow can fail here since every byte is a digit
    Some(match digits.parse::<u64>() {
        Ok(value) => Numeral::Value(value),
        Err(_) => Numeral::Overflow,
    })
}

/// Check that no whitespace-delimited token is a numeral below `limit`
///
/// Numbers at or above the limit may be written either way.
pub fn numerals_spelled_out(sentence: &str, limit: u64) -> bool {
    !sentence
        .split_whitespace()
        .filter_map(parse_numeral)
        .any(|numeral| numeral.is_below(limit))
}
