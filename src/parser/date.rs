use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::text::clean_text;

const PLACEHOLDERS: [&str; 4] = ["-", "n/a", "na", "unknown"];

// Tried in order before falling back to the fuzzy scan
const FORMATS: [&str; 10] = [
    "%Y-%m-%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
];

// chrono accepts short years and lets a space match nothing, so "November 2017"
// would read as November 20, year 17 without this floor.
const MIN_YEAR: i32 = 1000;

static EMBEDDED_ISO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("ISO date pattern is valid")
});

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parses a release date cell, returning `None` for placeholders, blanks and
/// anything that cannot be read as a calendar date.
pub fn parse_date_maybe(text: &str) -> Option<NaiveDate> {
    let text = clean_text(text);
    if text.is_empty() || PLACEHOLDERS.contains(&text.to_lowercase().as_str()) {
        return None;
    }

    let parsed = FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(&text, fmt)
                .ok()
                .filter(|d| d.year() >= MIN_YEAR)
        })
        .or_else(|| fuzzy_date(&text));

    if parsed.is_none() {
        trace!("Unparseable date cell: {:?}", text);
    }
    parsed
}

/// Picks a date out of text carrying annotations, e.g. `"28 November 2017 (NA)"`.
fn fuzzy_date(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = EMBEDDED_ISO.captures(text) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let mut year: Option<i32> = None;
    let mut month: Option<(usize, u32)> = None;
    let mut days: Vec<(usize, u32)> = Vec::new();

    let tokens = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty());

    for (pos, token) in tokens.enumerate() {
        if month.is_none() {
            if let Some(m) = month_number(token) {
                month = Some((pos, m));
                continue;
            }
        }

        let digits = strip_ordinal(token);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            // noise word
            continue;
        }

        match digits.len() {
            4 if year.is_none() => year = digits.parse().ok(),
            1 | 2 => {
                if let Ok(d) = digits.parse::<u32>() {
                    if (1..=31).contains(&d) {
                        days.push((pos, d));
                    }
                }
            }
            _ => {}
        }
    }

    // The day sits next to the month; version numbers and footnotes elsewhere
    // in the cell are also short numbers.
    let (month_pos, month) = month?;
    let day = days
        .iter()
        .min_by_key(|(pos, _)| pos.abs_diff(month_pos))
        .map(|(_, d)| *d)?;

    NaiveDate::from_ymd_opt(year?, month, day)
}

fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    if token.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| {
            *name == token
                || (token.len() == 3 && name.starts_with(token.as_str()))
                || (token == "sept" && *name == "september")
        })
        .map(|idx| idx as u32 + 1)
}

fn strip_ordinal(token: &str) -> &str {
    ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(*suffix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_date_valid_iso() {
        assert_eq!(parse_date_maybe("2019-11-26"), ymd(2019, 11, 26));
    }

    #[test]
    fn test_parse_date_valid_text_format() {
        assert_eq!(parse_date_maybe("Nov 26, 2019"), ymd(2019, 11, 26));
    }

    #[test]
    fn test_parse_date_valid_long_format() {
        assert_eq!(parse_date_maybe("November 26, 2019"), ymd(2019, 11, 26));
    }

    #[test]
    fn test_parse_date_day_first_format() {
        assert_eq!(parse_date_maybe("9 January 2018"), ymd(2018, 1, 9));
    }

    #[test]
    fn test_parse_date_returns_none_for_placeholders() {
        for text in ["-", "n/a", "N/A", "na", "NA", "unknown", "Unknown", ""] {
            assert_eq!(parse_date_maybe(text), None, "{:?}", text);
        }
    }

    #[test]
    fn test_parse_date_handles_whitespace() {
        assert_eq!(parse_date_maybe("  2019-11-26  "), ymd(2019, 11, 26));
        assert_eq!(parse_date_maybe("9\n January  2018"), ymd(2018, 1, 9));
    }

    #[test]
    fn test_parse_date_tolerates_annotations() {
        assert_eq!(parse_date_maybe("28 November 2017 (NA)"), ymd(2017, 11, 28));
        assert_eq!(parse_date_maybe("Released 2019-11-26 [1]"), ymd(2019, 11, 26));
        assert_eq!(parse_date_maybe("March 3rd, 2020 hotfix"), ymd(2020, 3, 3));
        assert_eq!(parse_date_maybe("Sept 5 2016"), ymd(2016, 9, 5));
    }

    #[test]
    fn test_parse_date_numeric_formats() {
        assert_eq!(parse_date_maybe("11/26/2019"), ymd(2019, 11, 26));
        assert_eq!(parse_date_maybe("26.11.2019"), ymd(2019, 11, 26));
        assert_eq!(parse_date_maybe("2019/11/26"), ymd(2019, 11, 26));
    }

    #[test]
    fn test_parse_date_picks_day_next_to_month() {
        assert_eq!(
            parse_date_maybe("Patch 5.0.15 released 30 September 2025"),
            ymd(2025, 9, 30)
        );
        assert_eq!(parse_date_maybe("November 21, 2017 [3]"), ymd(2017, 11, 21));
    }

    #[test]
    fn test_parse_date_unparseable_is_none() {
        assert_eq!(parse_date_maybe("Not a date"), None);
        assert_eq!(parse_date_maybe("November 2017"), None);
        assert_eq!(parse_date_maybe("May 2019"), None);
        assert_eq!(parse_date_maybe("Dec 2015"), None);
        assert_eq!(parse_date_maybe("September 2010"), None);
        assert_eq!(parse_date_maybe("31 February 2019"), None);
    }
}
