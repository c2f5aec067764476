use chrono::{Duration, NaiveDate};

/// Format a date the way the psbdmp.ws date endpoint expects it.
///
/// The wire format is exactly `DD.MM.YYYY` with zero-padded day and month,
/// independent of the host locale. This is a compatibility requirement of the
/// remote service, not a display preference.
pub fn wire_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Build the URL-encoded form body for the date-range endpoint.
///
/// Ordering of `from` and `to` is not validated; the remote service decides
/// what a reversed range means.
pub fn date_range_body(from: NaiveDate, to: NaiveDate) -> String {
    format!("from={}&to={}", wire_date(from), wire_date(to))
}

/// Turn a "--since N days" value into a date range ending at `today`.
///
/// The sign of `days` is ignored, so `5` and `-5` produce the same range.
/// Day counts that would step past the calendar's lower bound clamp the
/// start of the range to [`NaiveDate::MIN`] rather than overflowing.
pub fn since_range(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    let days = i64::try_from(days.unsigned_abs()).unwrap_or(i64::MAX);
    let from = Duration::try_days(days)
        .and_then(|delta| today.checked_sub_signed(delta))
        .unwrap_or(NaiveDate::MIN);
    (from, today)
}
