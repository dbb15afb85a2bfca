//! Time-relative phrasing of an instant, as spoken to a listener in a given
//! time zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// `Today at 2:30 PM`, `Tomorrow at 9:00 AM`, `Friday at 6:00 PM`,
/// `Yesterday at 8:00 AM`, `Last Monday at 5:15 PM`, or `05/30/2017`.
///
/// Day distance is counted in calendar days in `tz`, not in 24 hour spans.
pub fn calendar_phrase(when: DateTime<Utc>, now: DateTime<Utc>, tz: Tz) -> String {
    let when = when.with_timezone(&tz);
    let today = now.with_timezone(&tz).date_naive();
    let days = (when.date_naive() - today).num_days();
    let time = when.format("%-I:%M %p");

    match days {
        0 => format!("Today at {}", time),
        1 => format!("Tomorrow at {}", time),
        2..=6 => format!("{} at {}", when.format("%A"), time),
        -1 => format!("Yesterday at {}", time),
        -6..=-2 => format!("Last {} at {}", when.format("%A"), time),
        _ => when.format("%m/%d/%Y").to_string(),
    }
}
