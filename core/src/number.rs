use core::num::ParseIntError;

/// Parses an unsigned integer argument. Hexadecimal values carry a `$`,
/// `0x` or `0X` prefix, everything else is decimal.
pub fn parse_int(input: &str) -> Result<usize, ParseIntError> {
    let input = input.trim();
    let hex = input
        .strip_prefix('$')
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix("0X"));
    match hex {
        Some(digits) => usize::from_str_radix(digits, 16),
        None => input.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("16"), Ok(16));
        assert_eq!(parse_int(" 42 "), Ok(42));
    }

    #[test]
    fn test_hex_prefixes() {
        assert_eq!(parse_int("$10"), Ok(16));
        assert_eq!(parse_int("0x1f"), Ok(31));
        assert_eq!(parse_int("0X1F"), Ok(31));
        assert_eq!(parse_int("$ff"), Ok(255));
    }

    #[test]
    fn test_malformed() {
        assert!(parse_int("").is_err());
        assert!(parse_int("$").is_err());
        assert!(parse_int("0x").is_err());
        assert!(parse_int("12a").is_err());
        assert!(parse_int("-1").is_err());
        assert!(parse_int("x10").is_err());
    }
}
