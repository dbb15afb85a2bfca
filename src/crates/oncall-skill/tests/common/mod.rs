//! Common test utilities and setup

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oncall_skill::compose::FixedPhrase;
use oncall_skill::platform::RequestEnvelope;
use oncall_skill::{Skill, SkillConfig};
use pagerduty::{
    Credentials, OnCall, OnCallApi, OnCallQuery, PagerDutyError, Reference, Result, User, UserPage,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

pub const TOKEN: &str = "test-access-token";
pub const APPLICATION_ID: &str = "amzn1.ask.skill.oncall-test";

/// Wednesday, noon UTC.
pub fn now() -> DateTime<Utc> {
    "2017-05-10T12:00:00Z".parse().unwrap()
}

/// One outbound call, as seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    SearchUsers { query: String, limit: u32 },
    ListOnCalls(OnCallQuery),
}

/// Scripted in-memory PagerDuty that records every call in order.
pub struct FakeApi {
    me: User,
    search: UserPage,
    oncalls: Vec<OnCall>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<Call>>,
    seen_credentials: Mutex<Vec<Credentials>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            me: user("PME", "Pat Caller", Some("UTC")),
            search: UserPage {
                users: Vec::new(),
                more: false,
            },
            oncalls: Vec::new(),
            fail_status: None,
            calls: Mutex::new(Vec::new()),
            seen_credentials: Mutex::new(Vec::new()),
        }
    }

    pub fn with_me(mut self, me: User) -> Self {
        self.me = me;
        self
    }

    pub fn with_search(mut self, users: Vec<User>, more: bool) -> Self {
        self.search = UserPage { users, more };
        self
    }

    pub fn with_oncalls(mut self, oncalls: Vec<OnCall>) -> Self {
        self.oncalls = oncalls;
        self
    }

    /// Every call answers with this HTTP status.
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn seen_credentials(&self) -> Vec<Credentials> {
        self.seen_credentials.lock().clone()
    }

    fn record(&self, credentials: &Credentials, call: Call) -> Result<()> {
        self.calls.lock().push(call);
        self.seen_credentials.lock().push(credentials.clone());
        match self.fail_status {
            Some(401) => Err(PagerDutyError::Unauthorized("token revoked".to_string())),
            Some(status) => Err(PagerDutyError::Api {
                status,
                body: r#"{"error":{"message":"upstream unavailable"}}"#.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OnCallApi for FakeApi {
    async fn current_user(&self, credentials: &Credentials) -> Result<User> {
        self.record(credentials, Call::CurrentUser)?;
        Ok(self.me.clone())
    }

    async fn search_users(&self, credentials: &Credentials, query: &str, limit: u32) -> Result<UserPage> {
        self.record(
            credentials,
            Call::SearchUsers {
                query: query.to_string(),
                limit,
            },
        )?;
        Ok(self.search.clone())
    }

    async fn list_oncalls(&self, credentials: &Credentials, query: &OnCallQuery) -> Result<Vec<OnCall>> {
        self.record(credentials, Call::ListOnCalls(query.clone()))?;
        Ok(self.oncalls.clone())
    }
}

pub fn user(id: &str, name: &str, time_zone: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        time_zone: time_zone.map(str::to_string),
    }
}

/// First-level, schedule-backed entry for `policy`.
pub fn oncall(policy: &str, end: Option<&str>) -> OnCall {
    OnCall {
        escalation_policy: Reference {
            id: format!("EP-{}", policy.len()),
            summary: Some(policy.to_string()),
        },
        escalation_level: 1,
        schedule: Some(Reference {
            id: "SCHED".to_string(),
            summary: Some("Primary".to_string()),
        }),
        start: None,
        end: end.map(|s| s.parse().unwrap()),
    }
}

/// Skill over `api` that always picks the first celebration.
pub fn skill(api: Arc<FakeApi>) -> Skill {
    skill_with_config(api, SkillConfig::default())
}

pub fn skill_with_config(api: Arc<FakeApi>, config: SkillConfig) -> Skill {
    Skill::new(api, config)
        .expect("valid config")
        .with_phrases(Arc::new(FixedPhrase(0)))
}

fn envelope(request: Value, token: Option<&str>) -> RequestEnvelope {
    let mut user = json!({"userId": "amzn1.ask.account.TEST"});
    if let Some(token) = token {
        user["accessToken"] = json!(token);
    }

    serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.TEST",
            "application": {"applicationId": APPLICATION_ID},
            "user": user
        },
        "request": request
    }))
    .expect("valid envelope")
}

pub fn launch_request() -> RequestEnvelope {
    envelope(
        json!({"type": "LaunchRequest", "requestId": "req-launch", "locale": "en-US"}),
        Some(TOKEN),
    )
}

/// `OnCallIntent` with the given slot values.
pub fn oncall_request(user: Option<&str>, date: Option<&str>) -> RequestEnvelope {
    oncall_request_with_token(user, date, Some(TOKEN))
}

pub fn oncall_request_with_token(user: Option<&str>, date: Option<&str>, token: Option<&str>) -> RequestEnvelope {
    let mut user_slot = json!({"name": "User"});
    if let Some(value) = user {
        user_slot["value"] = json!(value);
    }
    let mut date_slot = json!({"name": "Date"});
    if let Some(value) = date {
        date_slot["value"] = json!(value);
    }

    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-oncall",
            "locale": "en-US",
            "intent": {
                "name": "OnCallIntent",
                "slots": {"User": user_slot, "Date": date_slot}
            }
        }),
        token,
    )
}

pub fn intent_request(name: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-builtin",
            "intent": {"name": name, "slots": {}}
        }),
        Some(TOKEN),
    )
}

pub fn session_ended_request(reason: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "SessionEndedRequest",
            "requestId": "req-ended",
            "reason": reason,
            "error": {"type": "INVALID_RESPONSE", "message": "An exception occurred"}
        }),
        Some(TOKEN),
    )
}

/// Plain text of the spoken output, with the `<speak>` wrapper and markup
/// stripped.
pub fn spoken(response: &oncall_skill::platform::ResponseEnvelope) -> String {
    let ssml = response.ssml().unwrap_or_default();
    let mut out = String::new();
    let mut in_tag = false;
    for c in ssml.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
