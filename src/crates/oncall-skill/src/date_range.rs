//! Date slot resolution.
//!
//! The platform sends dates as partial ISO-8601 strings whose shape encodes
//! how specific the caller was: `2017-05-10` (a day), `2017-W19` (a week),
//! `2017-W19-WE` (a weekend), `2017-05` (a month). Anything broader, like a
//! year, decade or season, cannot be answered meaningfully and is rejected.

use crate::error::{Result, SkillError};
use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use tracing::{error, warn};

/// How specific a date slot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGrain {
    Day(NaiveDate),
    /// ISO week, identified by its Monday.
    Week(NaiveDate),
    /// Weekend of an ISO week, identified by the week's Monday.
    Weekend(NaiveDate),
    /// Month, identified by its first day.
    Month(NaiveDate),
}

/// Absolute window handed to the on-call lookup. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl DateRange {
    /// Resolve an optional date slot in the caller's time zone.
    ///
    /// `None` means "right now" and yields no range.
    pub fn resolve(value: Option<&str>, tz: Tz) -> Result<Option<DateRange>> {
        match value {
            None => Ok(None),
            Some(value) => {
                let grain = DateGrain::parse(value)?;
                Ok(Some(grain.range(tz)))
            }
        }
    }
}

impl DateGrain {
    pub fn parse(value: &str) -> Result<DateGrain> {
        let value = value.trim();
        let parts: Vec<&str> = value.split('-').collect();

        let unresolvable = || {
            error!(value = %value, "Unexpected date format received from platform");
            SkillError::UnresolvableDate {
                value: value.to_string(),
            }
        };

        match parts.as_slice() {
            [year, month, day] if digits(year, 4) && digits(month, 2) && digits(day, 2) => {
                NaiveDate::from_ymd_opt(number(year), number(month), number(day))
                    .map(DateGrain::Day)
                    .ok_or_else(unresolvable)
            }
            [year, week] if digits(year, 4) && iso_week(week).is_some() => {
                monday_of(year, week).map(DateGrain::Week).ok_or_else(unresolvable)
            }
            [year, week, "WE"] if digits(year, 4) && iso_week(week).is_some() => {
                monday_of(year, week).map(DateGrain::Weekend).ok_or_else(unresolvable)
            }
            [year, month] if digits(year, 4) && digits(month, 2) => {
                NaiveDate::from_ymd_opt(number(year), number(month), 1)
                    .map(DateGrain::Month)
                    .ok_or_else(unresolvable)
            }
            // ISO week-date, ordinal date, compact date: valid ISO, but not a
            // grain the platform should ever produce.
            [year, week, weekday] if digits(year, 4) && iso_week(week).is_some() && digits(weekday, 1) => {
                Err(unresolvable())
            }
            [year, ordinal] if digits(year, 4) && digits(ordinal, 3) => Err(unresolvable()),
            [compact] if digits(compact, 8) => Err(unresolvable()),
            _ => {
                warn!(value = %value, "Overly-general date asked for");
                Err(SkillError::AmbiguousDate {
                    value: value.to_string(),
                })
            }
        }
    }

    /// Concrete window for this grain, with day boundaries taken in `tz`.
    pub fn range(&self, tz: Tz) -> DateRange {
        let (first, last) = match *self {
            DateGrain::Day(day) => (day, day),
            DateGrain::Week(monday) => (monday, add_days(monday, 6)),
            // Saturday through the following Monday.
            DateGrain::Weekend(monday) => (add_days(monday, 5), add_days(monday, 7)),
            DateGrain::Month(first) => {
                let next = first
                    .checked_add_months(chrono::Months::new(1))
                    .unwrap_or(NaiveDate::MAX);
                (first, next.pred_opt().unwrap_or(next))
            }
        };

        DateRange {
            since: start_of_day(first, tz),
            until: start_of_day(add_days(last, 1), tz) - Duration::milliseconds(1),
        }
    }
}

fn digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn number<T: std::str::FromStr + Default>(s: &str) -> T {
    s.parse().unwrap_or_default()
}

/// `W19` → 19
fn iso_week(s: &str) -> Option<u32> {
    s.strip_prefix('W')
        .filter(|w| digits(w, 2))
        .map(|w| number(w))
}

fn monday_of(year: &str, week: &str) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(number(year), iso_week(week)?, Weekday::Mon)
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// First instant of `date` in `tz`.
///
/// Zones that skip midnight on a DST change start the day at the first
/// existing instant instead.
fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=2)
        .find_map(|hour| {
            tz.from_local_datetime(&(midnight + Duration::hours(hour)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
