use chrono::{DateTime, SecondsFormat, TimeZone};

/// Prefix of the display text returned to the host
pub const DISPLAY_PREFIX: &str = "Current time: ";

/// Format an instant as an RFC 3339 timestamp with second precision
///
/// A zero UTC offset is written as `Z`.
pub fn format_rfc3339<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build the display text for an instant
pub fn display_text<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}", DISPLAY_PREFIX, format_rfc3339(dt))
}
