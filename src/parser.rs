//! Squid `access.log` line parsing.
//!
//! The native log format has ten whitespace-separated fields:
//!
//! ```text
//! timestamp duration client result_code bytes method url user hierarchy_code type
//! 1286536309.586 921 192.168.0.68 TCP_MISS/200 507 POST http://rcv.example/ - DIRECT/10.0.0.1 application/xml
//! ```

use crate::config::ClientFilter;

/// One request of the target client.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: f64,
    pub client: String,
    pub url: String,
}

/// Borrowed view of a well-formed log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fields<'a> {
    pub timestamp: f64,
    pub duration: u64,
    pub client: &'a str,
    pub result_code: &'a str,
    pub bytes: u64,
    pub method: &'a str,
    pub url: &'a str,
    pub user: &'a str,
    pub hierarchy_code: &'a str,
    pub content_type: &'a str,
}

/// Splits a line into its fields, or `None` when the line is not in the expected shape.
pub fn parse_fields(line: &str) -> Option<Fields<'_>> {
    let mut parts = line.split_whitespace();
    let mut next = || parts.next();

    let timestamp = parse_timestamp(next()?)?;
    let duration = parse_digits(next()?)?;
    let client = next()?;
    let result_code = next().filter(|code| is_result_code(code))?;
    let bytes = parse_digits(next()?)?;
    let method = next()?;
    let url = next()?;
    let user = next()?;
    let hierarchy_code = next()?;
    let content_type = next()?;

    Some(Fields {
        timestamp,
        duration,
        client,
        result_code,
        bytes,
        method,
        url,
        user,
        hierarchy_code,
        content_type,
    })
}

/// Extracts a record from `line` if it is well formed and was made by a client `filter` accepts.
pub fn parse_line(line: &str, filter: &ClientFilter) -> Option<LogRecord> {
    let fields = parse_fields(line)?;
    if !filter.matches(fields.client) {
        return None;
    }

    Some(LogRecord {
        timestamp: fields.timestamp,
        client: fields.client.to_string(),
        url: fields.url.to_string(),
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Option<u64> {
    if !is_digits(s) {
        return None;
    }
    s.parse().ok()
}

// Seconds and milliseconds, e.g. `1286536309.586`.
fn parse_timestamp(s: &str) -> Option<f64> {
    let (secs, frac) = s.split_once('.')?;
    if !is_digits(secs) || !is_digits(frac) {
        return None;
    }
    s.parse().ok()
}

fn is_result_code(s: &str) -> bool {
    matches!(s.split_once('/'), Some((status, code)) if !status.is_empty() && !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "1286536309.586 921 192.168.0.68 TCP_MISS/200 507 POST http://rcv.example/ - DIRECT/10.0.0.1 application/xml";

    #[test]
    fn parses_all_fields() {
        let fields = parse_fields(LINE).unwrap();

        assert_eq!(fields.timestamp, 1286536309.586);
        assert_eq!(fields.duration, 921);
        assert_eq!(fields.client, "192.168.0.68");
        assert_eq!(fields.result_code, "TCP_MISS/200");
        assert_eq!(fields.bytes, 507);
        assert_eq!(fields.method, "POST");
        assert_eq!(fields.url, "http://rcv.example/");
        assert_eq!(fields.user, "-");
        assert_eq!(fields.hierarchy_code, "DIRECT/10.0.0.1");
        assert_eq!(fields.content_type, "application/xml");
    }

    #[test]
    fn tolerates_runs_of_whitespace() {
        let line = "1286536309.586    921 192.168.0.68\tTCP_MISS/200 507 GET /a - NONE/- text/html";
        let fields = parse_fields(line).unwrap();
        assert_eq!(fields.client, "192.168.0.68");
        assert_eq!(fields.url, "/a");
    }

    #[test]
    fn ignores_trailing_fields() {
        let line = format!("{} extra tokens", LINE);
        assert!(parse_fields(&line).is_some());
    }

    #[test]
    fn rejects_missing_fields() {
        let line = "1286536309.586 921 192.168.0.68 TCP_MISS/200 507 POST http://rcv.example/ -";
        assert!(parse_fields(line).is_none());
        assert!(parse_fields("").is_none());
    }

    #[test]
    fn rejects_malformed_timestamps() {
        for ts in ["1286536309", "abc.def", ".586", "1286536309.", "-1.5", "1e9.0"] {
            let line = LINE.replacen("1286536309.586", ts, 1);
            assert!(parse_fields(&line).is_none(), "accepted timestamp {}", ts);
        }
    }

    #[test]
    fn rejects_non_numeric_duration_and_bytes() {
        let line = LINE.replacen(" 921 ", " fast ", 1);
        assert!(parse_fields(&line).is_none());

        let line = LINE.replacen(" 507 ", " big ", 1);
        assert!(parse_fields(&line).is_none());
    }

    #[test]
    fn rejects_result_code_without_slash() {
        let line = LINE.replacen("TCP_MISS/200", "TCP_MISS", 1);
        assert!(parse_fields(&line).is_none());
    }

    #[test]
    fn parse_line_filters_by_client() {
        let record = parse_line(LINE, &ClientFilter::literal("192.168.0.68")).unwrap();
        assert_eq!(
            record,
            LogRecord {
                timestamp: 1286536309.586,
                client: "192.168.0.68".to_string(),
                url: "http://rcv.example/".to_string(),
            }
        );

        assert!(parse_line(LINE, &ClientFilter::literal("192.168.0.6")).is_none());
    }

    #[test]
    fn parse_line_with_pattern_filter() {
        let filter = ClientFilter::pattern(r"192\.168\.0\.\d+").unwrap();
        assert!(parse_line(LINE, &filter).is_some());

        let filter = ClientFilter::pattern(r"10\..*").unwrap();
        assert!(parse_line(LINE, &filter).is_none());
    }
}
