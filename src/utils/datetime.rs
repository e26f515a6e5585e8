use chrono::{NaiveDateTime, Timelike};
use regex::Regex;

use crate::utils::error::Result;

/// Marker appended to a format pattern to make the fractional-second
/// component optional, e.g. `"%Y%m%d%H%M%S[%.f]"`.
const FRACTION_MARKER: &str = "[%.f]";

/// Parses `text` against `base_pattern`, where the pattern may end with the
/// optional-fraction marker `[%.f]`.
///
/// Input without a trailing `.digits` fraction parses as if the marker were
/// absent; input carrying one parses as if the marker were a mandatory `%.f`.
/// Fractional digits shorter than six are the most significant digits of a
/// microsecond value (`.5` is 500000 microseconds).
pub fn strptime_micr(text: &str, base_pattern: &str) -> Result<NaiveDateTime> {
    let fmt = match base_pattern.strip_suffix(FRACTION_MARKER) {
        Some(stripped) => {
            let has_fraction = Regex::new(r"\.\d+$").unwrap();
            if has_fraction.is_match(text) {
                format!("{stripped}%.f")
            } else {
                stripped.to_string()
            }
        }
        None => base_pattern.to_string(),
    };
    Ok(NaiveDateTime::parse_from_str(text, &fmt)?)
}

/// Combines a `%Y%m%d` date token and a `%H%M%S` time token (the latter with
/// an optional 1-6 digit fractional suffix) into one canonical ISO timestamp
/// string.
///
/// With `microseconds` a nonzero fraction is rendered as a fixed six-digit
/// component; without it the fraction is parsed but dropped.
pub fn get_datetime(date: &str, time: &str, microseconds: bool) -> Result<String> {
    let dt = strptime_micr(&format!("{date}{time}"), "%Y%m%d%H%M%S[%.f]")?;
    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    if microseconds {
        let micros = dt.nanosecond() / 1_000;
        if micros > 0 {
            out.push_str(&format!(".{micros:06}"));
        }
    }
    Ok(out)
}
