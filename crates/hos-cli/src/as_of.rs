use chrono::DateTime;

/// Parse `--as-of`: epoch milliseconds or an RFC 3339 timestamp.
pub fn parse_as_of(raw: &str) -> anyhow::Result<i64> {
    let raw = raw.trim();
    if let Ok(ms) = raw.parse::<i64>() {
        return Ok(ms);
    }
    let dt = DateTime::parse_from_rfc3339(raw).map_err(|e| {
        anyhow::anyhow!("invalid --as-of {raw:?}: expected epoch millis or RFC 3339 ({e})")
    })?;
    Ok(dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis() {
        assert_eq!(parse_as_of("1760000040000").unwrap(), 1_760_000_040_000);
    }

    #[test]
    fn rfc3339_with_offset() {
        assert_eq!(parse_as_of("1970-01-01T01:00:00+01:00").unwrap(), 0);
        assert_eq!(parse_as_of("1970-01-01T00:10:00Z").unwrap(), 600_000);
    }

    #[test]
    fn garbage_rejected() {
        let err = parse_as_of("yesterday").unwrap_err();
        assert!(err.to_string().contains("--as-of"));
    }
}
