//! Wall-clock timestamps for persisted records.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time as an ISO-8601 / RFC 3339 string in UTC.
///
/// In the browser this is `Date.prototype.toISOString`, so records match what
/// other scripts on the page would write.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use time::OffsetDateTime;
        use time::format_description::well_known::Rfc3339;

        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(stamp) => stamp,
            Err(e) => {
                log::warn!("failed to format timestamp: {e}");
                String::new()
            }
        }
    }
}
