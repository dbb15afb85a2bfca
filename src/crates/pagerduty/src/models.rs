//! Wire types for the subset of the API the skill uses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A PagerDuty user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// IANA time zone name, e.g. `America/Los_Angeles`.
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// `{ "user": { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

/// One page of a user search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    /// More results exist beyond this page.
    #[serde(default)]
    pub more: bool,
}

/// Reference to another object (escalation policy, schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Reference {
    /// Display name, falling back to the id.
    pub fn name(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.id)
    }
}

/// An on-call entry: a user covering an escalation policy at some level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCall {
    pub escalation_policy: Reference,
    pub escalation_level: u32,
    /// Present when the coverage comes from a schedule rather than a direct
    /// policy assignment.
    #[serde(default)]
    pub schedule: Option<Reference>,
    /// `null` means the entry started before any requested window.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// `null` means the coverage is permanent.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl OnCall {
    /// Name of the escalation policy this entry covers.
    pub fn policy_name(&self) -> &str {
        self.escalation_policy.name()
    }

    pub fn is_schedule_backed(&self) -> bool {
        self.schedule.is_some()
    }
}

/// `{ "oncalls": [ ... ] }`
#[derive(Debug, Deserialize)]
pub(crate) struct OnCallList {
    #[serde(default)]
    pub oncalls: Vec<OnCall>,
}

/// Parameters for `GET /oncalls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnCallQuery {
    pub user_id: String,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl OnCallQuery {
    /// Entries for one user, right now.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            since: None,
            until: None,
        }
    }

    /// Restrict to a time window.
    pub fn between(mut self, since: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self.until = Some(until);
        self
    }

    /// Query-string pairs, timestamps as UTC RFC 3339 with milliseconds.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("user_ids[]", self.user_id.clone())];
        if let Some(since) = self.since {
            params.push(("since", since.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }
        if let Some(until) = self.until {
            params.push(("until", until.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_oncalls_payload() {
        let payload = r#"{
            "oncalls": [
                {
                    "user": {"id": "PXPGF42", "type": "user_reference", "summary": "Earline Greenholt"},
                    "schedule": {"id": "PI7DH85", "type": "schedule_reference", "summary": "Daily Engineering Rotation"},
                    "escalation_policy": {"id": "PT20YPA", "type": "escalation_policy_reference", "summary": "Engineering Escalation Policy"},
                    "escalation_level": 2,
                    "start": "2015-03-06T15:28:51-05:00",
                    "end": "2015-03-07T15:28:51-05:00"
                },
                {
                    "escalation_policy": {"id": "PT20YPB"},
                    "escalation_level": 1,
                    "schedule": null,
                    "start": null,
                    "end": null
                }
            ],
            "limit": 25,
            "offset": 0,
            "more": false
        }"#;

        let list: OnCallList = serde_json::from_str(payload).unwrap();
        assert_eq!(list.oncalls.len(), 2);

        let first = &list.oncalls[0];
        assert_eq!(first.policy_name(), "Engineering Escalation Policy");
        assert_eq!(first.escalation_level, 2);
        assert!(first.is_schedule_backed());
        assert_eq!(
            first.end,
            Some(Utc.with_ymd_and_hms(2015, 3, 7, 20, 28, 51).unwrap())
        );

        let second = &list.oncalls[1];
        assert_eq!(second.policy_name(), "PT20YPB");
        assert!(!second.is_schedule_backed());
        assert!(second.end.is_none());
    }

    #[test]
    fn test_deserialize_user_search() {
        let payload = r#"{
            "users": [
                {"id": "PXPGF42", "name": "Earline Greenholt", "email": "125.greenholt.earline@graham.name", "time_zone": "America/Lima"}
            ],
            "limit": 5,
            "more": true
        }"#;

        let page: UserPage = serde_json::from_str(payload).unwrap();
        assert!(page.more);
        assert_eq!(page.users[0].time_zone.as_deref(), Some("America/Lima"));
    }

    #[test]
    fn test_query_params_include_window() {
        let since = Utc.with_ymd_and_hms(2017, 5, 10, 0, 0, 0).unwrap();
        let until = since + chrono::Duration::days(1) - chrono::Duration::milliseconds(1);

        let params = OnCallQuery::for_user("PXPGF42").between(since, until).to_params();

        assert_eq!(
            params,
            vec![
                ("user_ids[]", "PXPGF42".to_string()),
                ("since", "2017-05-10T00:00:00.000Z".to_string()),
                ("until", "2017-05-10T23:59:59.999Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_without_window() {
        assert_eq!(OnCallQuery::for_user("P1").to_params().len(), 1);
    }
}
