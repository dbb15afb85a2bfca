//! Turning on-call entries into a spoken answer.
//!
//! Entries are split into indefinite coverage (no end, or an end more than
//! three months out) and coverage that ends soon enough to be worth saying
//! when. Each group is spoken as its own list:
//!
//! ```text
//! You are on call for Ops, and Infra indefinitely, as well as Web until Friday at 6:00 PM.
//! ```

pub mod calendar;
pub mod phrases;

pub use calendar::calendar_phrase;
pub use phrases::{celebration, FixedPhrase, PhraseSource, RandomPhrases, SeededPhrases, CELEBRATIONS};

use crate::speech::{BreakStrength, Speech};
use chrono::{DateTime, Duration, Months, TimeZone, Utc};
use chrono_tz::Tz;
use pagerduty::OnCall;

/// Coverage ending further out than this is reported as indefinite.
const INDEFINITE_AFTER_MONTHS: u32 = 3;

/// Coverage with or without a speakable end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified<'a> {
    pub indefinite: Vec<&'a OnCall>,
    pub until: Vec<(&'a OnCall, DateTime<Utc>)>,
}

/// Split `oncalls` by whether their end is worth mentioning. Order within each
/// group follows the input.
///
/// The horizon is three calendar months from `now` on the wall clock in `tz`.
pub fn classify(oncalls: &[OnCall], tz: Tz, now: DateTime<Utc>) -> Classified<'_> {
    let horizon = horizon(now, tz);
    let mut classified = Classified::default();

    for oncall in oncalls {
        match (oncall.end, horizon) {
            (Some(end), Some(horizon)) if end <= horizon => classified.until.push((oncall, end)),
            _ => classified.indefinite.push(oncall),
        }
    }

    classified
}

/// `now` plus [`INDEFINITE_AFTER_MONTHS`] in `tz`. A local time that falls in
/// a DST gap moves forward to the first instant that exists.
fn horizon(now: DateTime<Utc>, tz: Tz) -> Option<DateTime<Utc>> {
    let local = now
        .with_timezone(&tz)
        .naive_local()
        .checked_add_months(Months::new(INDEFINITE_AFTER_MONTHS))?;

    (0..=2)
        .find_map(|hour| tz.from_local_datetime(&(local + Duration::hours(hour))).earliest())
        .map(|instant| instant.with_timezone(&Utc))
}

/// The full answer to "is `subject` on call?".
///
/// `subject` is `None` when the caller asked about themself; the answer is
/// then addressed as "you". `tz` is the listener's zone for end times.
pub fn compose_oncalls(
    oncalls: &[OnCall],
    tz: Tz,
    subject: Option<&str>,
    now: DateTime<Utc>,
    phrases: &dyn PhraseSource,
) -> Speech {
    if oncalls.is_empty() {
        return match subject {
            Some(name) => Speech::new().noun(name).text(" is not on call."),
            None => Speech::from_text(celebration(phrases)).text(" You are not on call."),
        };
    }

    let mut speech = match subject {
        Some(name) => Speech::new().noun(name).text(" is on call for "),
        None => Speech::from_text("You are on call for "),
    };

    let classified = classify(oncalls, tz, now);

    if !classified.indefinite.is_empty() {
        let items = classified
            .indefinite
            .iter()
            .map(|oncall| Speech::new().noun(oncall.policy_name()))
            .collect();
        speech.push_list(items, "and");
        speech.push_text(" indefinitely");
    }

    if !classified.indefinite.is_empty() && !classified.until.is_empty() {
        speech.push_pause(BreakStrength::Strong);
        speech.push_text(", as well as ");
    }

    if !classified.until.is_empty() {
        let items = classified
            .until
            .iter()
            .map(|(oncall, end)| {
                Speech::new()
                    .noun(oncall.policy_name())
                    .text(format!(" until {}", calendar_phrase(*end, now, tz)))
            })
            .collect();
        speech.push_list(items, "and");
    }

    speech.text(".")
}
