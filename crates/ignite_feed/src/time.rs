// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Portuguese (pt-BR) timestamps for `<time>` elements.
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use ignite_feed::PublishedTime;
//!
//! let at = DateTime::parse_from_rfc3339("2022-05-27T16:34:00-03:00").unwrap();
//! let now = DateTime::parse_from_rfc3339("2022-05-27T17:40:00-03:00").unwrap();
//!
//! let time = PublishedTime::new(at, now.with_timezone(&Utc));
//!
//! assert_eq!(time.title, "27 de maio às 16:34h");
//! assert_eq!(time.datetime, "2022-05-27T19:34:00.000Z");
//! assert_eq!(time.relative, "há cerca de 1 hora");
//! ```

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Timelike, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Strings shown by a `<time>` element: the `title` tooltip, the machine
/// readable `datetime` attribute and the `relative` text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedTime {
    pub title: String,
    pub datetime: String,
    pub relative: String,
}

impl PublishedTime {
    pub fn new<Tz: TimeZone>(at: DateTime<Tz>, now: DateTime<Utc>) -> Self {
        PublishedTime {
            title: title(&at),
            datetime: iso(&at),
            relative: relative(&at, &now),
        }
    }
}

/// Full date in the timestamp's own offset, e.g. `"27 de maio às 16:34h"`.
pub fn title<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    let month = MONTHS[at.month0() as usize];

    format!(
        "{:02} de {month} às {:02}:{:02}h",
        at.day(),
        at.hour(),
        at.minute()
    )
}

/// UTC with millisecond precision, e.g. `"2022-05-27T19:34:00.000Z"`.
pub fn iso<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Distance between `at` and `now` in words, e.g. `"há 3 dias"` or `"em 2 minutos"`.
pub fn relative<Tz: TimeZone>(at: &DateTime<Tz>, now: &DateTime<Utc>) -> String {
    let at = at.with_timezone(&Utc);

    if at > *now {
        format!("em {}", distance(now, &at))
    } else {
        format!("há {}", distance(&at, now))
    }
}

/// Distance in words between two ordered instants, `earlier <= later`.
fn distance(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> String {
    let seconds = (*later - *earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    match minutes {
        0 => "menos de um minuto".into(),
        1 => "1 minuto".into(),
        m if m < 45 => format!("{m} minutos"),
        m if m < 90 => "cerca de 1 hora".into(),
        m if m < MINUTES_IN_DAY => plural(round_div(m, 60), "cerca de 1 hora", "cerca de", "horas"),
        m if m < MINUTES_IN_ALMOST_TWO_DAYS => "1 dia".into(),
        m if m < MINUTES_IN_MONTH => plural(round_div(m, MINUTES_IN_DAY), "1 dia", "", "dias"),
        m if m < MINUTES_IN_TWO_MONTHS => plural(
            round_div(m, MINUTES_IN_MONTH),
            "cerca de 1 mês",
            "cerca de",
            "meses",
        ),
        m => {
            let months = calendar_months(earlier, later);

            if months < 12 {
                return plural(round_div(m, MINUTES_IN_MONTH), "1 mês", "", "meses");
            }

            let years = months / 12;

            match months % 12 {
                r if r < 3 => plural(years, "cerca de 1 ano", "cerca de", "anos"),
                r if r < 9 => plural(years, "mais de 1 ano", "mais de", "anos"),
                _ => plural(years + 1, "quase 1 ano", "quase", "anos"),
            }
        }
    }
}

fn plural(count: i64, one: &str, prefix: &str, unit: &str) -> String {
    match (count, prefix) {
        (1, _) => one.into(),
        (n, "") => format!("{n} {unit}"),
        (n, prefix) => format!("{prefix} {n} {unit}"),
    }
}

/// Division of a non-negative number rounding halves up.
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let span = |at: &DateTime<Utc>| at.year() as i64 * 12 + at.month0() as i64;
    let months = span(later) - span(earlier);

    // A month only counts once the day and time of `earlier` are reached again
    let within_month = |at: &DateTime<Utc>| (at.day(), at.num_seconds_from_midnight());

    if months > 0 && within_month(later) < within_month(earlier) {
        months - 1
    } else {
        months
    }
}
