use chrono::{
  DateTime,
  Datelike,
  NaiveDate,
  NaiveDateTime
};

use crate::error::DateParseError;

/// Indexed by days since Sunday.
pub const WEEKDAY_ABBREVIATIONS: [&str;
  7] = [
  "Sun", "Mon", "Tue", "Wed", "Thu",
  "Fri", "Sat"
];

const WEEKDAY_NAMES: [&str; 7] = [
  "sunday",
  "monday",
  "tuesday",
  "wednesday",
  "thursday",
  "friday",
  "saturday"
];

/// Indexed by zero-based month.
pub const MONTH_ABBREVIATIONS: [&str;
  12] = [
  "Jan", "Feb", "Mar", "Apr", "May",
  "Jun", "Jul", "Aug", "Sep", "Oct",
  "Nov", "Dec"
];

const DATETIME_FORMATS: [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M"
];

// `%B` also accepts the three-letter
// abbreviation when parsing.
const DATE_FORMATS: [&str; 6] = [
  "%Y-%m-%d",
  "%Y/%m/%d",
  "%m/%d/%Y",
  "%B %d %Y",
  "%B %d, %Y",
  "%d %B %Y"
];

fn weekday_abbrev(
  date: NaiveDate
) -> &'static str {
  WEEKDAY_ABBREVIATIONS[date
    .weekday()
    .num_days_from_sunday()
    as usize]
}

fn month_abbrev(
  date: NaiveDate
) -> &'static str {
  MONTH_ABBREVIATIONS
    [date.month0() as usize]
}

/// Canonical due-date layout the backend
/// parses: `Fri Jan 5 2024`.
#[must_use]
pub fn format_due_date(
  date: NaiveDate
) -> String {
  format!(
    "{} {} {} {}",
    weekday_abbrev(date),
    month_abbrev(date),
    date.day(),
    date.year()
  )
}

/// Human-readable layout matching
/// `Date.prototype.toDateString()`:
/// `Fri Jan 05 2024`.
#[must_use]
pub fn format_display_date(
  date: NaiveDate
) -> String {
  format!(
    "{} {} {:02} {:04}",
    weekday_abbrev(date),
    month_abbrev(date),
    date.day(),
    date.year()
  )
}

/// Permissive parser for the strings the
/// calendar widget emits and the strings
/// this crate renders.
///
/// A leading weekday name is skipped
/// without checking it against the date.
/// No timezone conversion happens: the
/// calendar date written is the one
/// returned.
#[tracing::instrument(level = "trace")]
pub fn parse_date(
  input: &str
) -> Result<NaiveDate, DateParseError> {
  let token = input.trim();
  if token.is_empty() {
    return Err(DateParseError::new(
      input
    ));
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(token)
  {
    return Ok(dt.date_naive());
  }

  for layout in DATETIME_FORMATS {
    if let Ok(ndt) =
      NaiveDateTime::parse_from_str(
        token, layout
      )
    {
      return Ok(ndt.date());
    }
  }

  let body = strip_weekday(token);
  for layout in DATE_FORMATS {
    if let Ok(date) =
      NaiveDate::parse_from_str(
        body, layout
      )
    {
      return Ok(date);
    }
  }

  tracing::debug!(
    input = %token,
    "no date layout matched"
  );
  Err(DateParseError::new(input))
}

fn strip_weekday(token: &str) -> &str {
  let Some((head, rest)) =
    token.split_once(char::is_whitespace)
  else {
    return token;
  };

  if is_weekday_name(
    head.trim_end_matches([',', '.'])
  ) {
    rest.trim_start()
  } else {
    token
  }
}

fn is_weekday_name(token: &str) -> bool {
  WEEKDAY_ABBREVIATIONS
    .iter()
    .zip(WEEKDAY_NAMES)
    .any(|(abbrev, name)| {
      token.eq_ignore_ascii_case(abbrev)
        || token.eq_ignore_ascii_case(name)
    })
}
