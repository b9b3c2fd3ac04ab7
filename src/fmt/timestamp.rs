//! ISO-8601 timestamps shared by every formatter: millisecond precision, UTC, literal `Z`.

use chrono::{DateTime, Utc};

pub const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Millisecond UTC timestamp with a literal `Z`, shared by both formatters.
#[must_use]
pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.format(ISO8601_MILLIS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2023, 2, 17, 23, 16, 41).unwrap()
            + chrono::Duration::milliseconds(220);
        assert_eq!(iso8601(&ts), "2023-02-17T23:16:41.220Z");
    }
}
