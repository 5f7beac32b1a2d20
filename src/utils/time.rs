use std::time::Duration;

/// `M:SS`, minutes unbounded.
pub fn format_length(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn format_duration(duration: Duration) -> String {
    format_length(duration.as_secs())
}

/// Parses `MINUTE:SECOND` into an offset.
pub fn parse_timestamp(input: &str) -> Option<Duration> {
    let (minutes, seconds) = input.trim().split_once(':')?;
    let minutes: u64 = minutes.trim().parse().ok()?;
    let seconds: u64 = seconds.trim().parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    let total = minutes.checked_mul(60)?.checked_add(seconds)?;
    Some(Duration::from_secs(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0), "0:00");
        assert_eq!(format_length(59), "0:59");
        assert_eq!(format_length(61), "1:01");
        assert_eq!(format_length(3725), "62:05");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("1:30"), Some(Duration::from_secs(90)));
        assert_eq!(parse_timestamp(" 0:05 "), Some(Duration::from_secs(5)));
        assert_eq!(parse_timestamp("12:00"), Some(Duration::from_secs(720)));
    }

    #[test]
    fn test_parse_timestamp_rejects_malformed() {
        assert_eq!(parse_timestamp("90"), None);
        assert_eq!(parse_timestamp("a:10"), None);
        assert_eq!(parse_timestamp("1:"), None);
        assert_eq!(parse_timestamp("1:75"), None);
        assert_eq!(parse_timestamp("-1:10"), None);
        assert_eq!(parse_timestamp("307445734561825861:00"), None);
    }
}
