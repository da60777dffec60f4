use std::time::Duration;

/// Parse a duration string with optional time unit suffixes.
/// Supported units: `ms` (milliseconds), `s` (seconds), `m` (minutes), `h`
/// (hours). Bare numbers are treated as seconds and segments may be combined
/// (`"1m30s"`, `"2s500ms"`).
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty duration string".into());
    }

    // Bare number, no unit: seconds.
    if input.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        let n: f64 = input
            .parse()
            .map_err(|_| format!("invalid duration '{}': bad number", input))?;
        return Ok(Duration::from_secs_f64(n));
    }

    let mut total_secs: f64 = 0.0;
    let mut remaining = input;

    while !remaining.is_empty() {
        let num_end = remaining
            .bytes()
            .position(|b| b.is_ascii_alphabetic())
            .ok_or_else(|| format!("invalid duration '{}': trailing number without unit", input))?;
        if num_end == 0 {
            return Err(format!(
                "invalid duration '{}': expected a number before unit",
                input
            ));
        }

        let num_str = &remaining[..num_end];
        let after_num = &remaining[num_end..];

        let (multiplier, consumed) = if after_num.starts_with("ms") {
            (0.001, 2)
        } else if after_num.starts_with('h') {
            (3600.0, 1)
        } else if after_num.starts_with('m') {
            (60.0, 1)
        } else if after_num.starts_with('s') {
            (1.0, 1)
        } else {
            return Err(format!(
                "invalid duration '{}': unknown unit at '{}'",
                input, after_num
            ));
        };

        let n: f64 = num_str
            .parse()
            .map_err(|_| format!("invalid duration '{}': bad number '{}'", input, num_str))?;
        total_secs += n * multiplier;
        remaining = &after_num[consumed..];
    }

    Ok(Duration::from_secs_f64(total_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_bare_number_is_seconds() {
        assert_eq!(parse_duration("120").unwrap(), Duration::from_secs(120));
    }

    #[test]
    fn test_parse_combined() {
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(
            parse_duration("2s500ms").unwrap(),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_duration("1.5m").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("10s5").is_err());
    }
}
