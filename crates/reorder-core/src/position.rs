//! Position Input
//!
//! Requested positions are clamped, never rejected.

/// Clamp a requested 1-based position into `[1, len]`.
/// An empty list still yields 1.
pub fn clamp_position(requested: i64, len: usize) -> usize {
    let upper = len.max(1) as i64;
    requested.clamp(1, upper) as usize
}

/// Parse free-text position input. Anything unparseable becomes 1.
/// Fractions are truncated toward zero.
pub fn parse_position(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position() {
        assert_eq!(clamp_position(0, 5), 1);
        assert_eq!(clamp_position(-3, 5), 1);
        assert_eq!(clamp_position(3, 5), 3);
        assert_eq!(clamp_position(99, 5), 5);
        assert_eq!(clamp_position(4, 0), 1);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("12"), 12);
        assert_eq!(parse_position("  7 "), 7);
        assert_eq!(parse_position("-2"), -2);
        assert_eq!(parse_position("3.9"), 3);
        assert_eq!(parse_position("abc"), 1);
        assert_eq!(parse_position(""), 1);
        assert_eq!(parse_position("NaN"), 1);
    }
}
