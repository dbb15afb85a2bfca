//! Closed set of things a caller can ask for.

use crate::platform::{Request, REQUEST_INTENT, REQUEST_LAUNCH, REQUEST_SESSION_ENDED};

pub const ONCALL_INTENT: &str = "OnCallIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

pub const USER_SLOT: &str = "User";
pub const DATE_SLOT: &str = "Date";

/// Slot values for an on-call question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnCallSlots {
    /// Spoken user reference, `"I"` for the caller.
    pub user: Option<String>,
    /// Platform date value such as `2017-05-10` or `2017-W19-WE`.
    pub date: Option<String>,
}

impl OnCallSlots {
    /// The caller, right now. What opening the skill means.
    pub fn myself_now() -> Self {
        Self {
            user: Some("I".to_string()),
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Skill opened without a question.
    Launch,
    OnCall(OnCallSlots),
    Help,
    Cancel,
    Stop,
    SessionEnded {
        reason: Option<String>,
        error: Option<String>,
    },
    /// Anything this skill does not model; answered with help.
    Unrecognized(String),
}

impl Intent {
    pub fn from_request(request: &Request) -> Self {
        match request.kind.as_str() {
            REQUEST_LAUNCH => Intent::Launch,
            REQUEST_SESSION_ENDED => Intent::SessionEnded {
                reason: request.reason.clone(),
                error: request.error.as_ref().and_then(|e| e.message.clone()),
            },
            REQUEST_INTENT => match &request.intent {
                Some(intent) => match intent.name.as_str() {
                    ONCALL_INTENT => Intent::OnCall(OnCallSlots {
                        user: intent.slot_value(USER_SLOT).map(str::to_string),
                        date: intent.slot_value(DATE_SLOT).map(str::to_string),
                    }),
                    HELP_INTENT => Intent::Help,
                    CANCEL_INTENT => Intent::Cancel,
                    STOP_INTENT => Intent::Stop,
                    other => Intent::Unrecognized(other.to_string()),
                },
                None => Intent::Unrecognized(REQUEST_INTENT.to_string()),
            },
            other => Intent::Unrecognized(other.to_string()),
        }
    }

    /// Launch and the explicit question take the same path.
    pub fn oncall_slots(&self) -> Option<OnCallSlots> {
        match self {
            Intent::Launch => Some(OnCallSlots::myself_now()),
            Intent::OnCall(slots) => Some(slots.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{IntentPayload, PlatformError, Slot};
    use std::collections::HashMap;

    fn request(kind: &str) -> Request {
        Request {
            kind: kind.to_string(),
            request_id: None,
            timestamp: None,
            locale: Some("en-US".to_string()),
            intent: None,
            reason: None,
            error: None,
        }
    }

    fn intent_request(name: &str, slots: &[(&str, Option<&str>)]) -> Request {
        let mut req = request(REQUEST_INTENT);
        req.intent = Some(IntentPayload {
            name: name.to_string(),
            slots: slots
                .iter()
                .map(|(slot, value)| {
                    (
                        slot.to_string(),
                        Slot {
                            name: slot.to_string(),
                            value: value.map(str::to_string),
                        },
                    )
                })
                .collect::<HashMap<_, _>>(),
        });
        req
    }

    #[test]
    fn test_launch_equals_oncall_for_myself() {
        let launch = Intent::from_request(&request(REQUEST_LAUNCH));
        let asked = Intent::from_request(&intent_request(ONCALL_INTENT, &[(USER_SLOT, Some("I"))]));

        assert_eq!(launch, Intent::Launch);
        assert_eq!(launch.oncall_slots(), asked.oncall_slots());
    }

    #[test]
    fn test_oncall_slots_extracted() {
        let intent = Intent::from_request(&intent_request(
            ONCALL_INTENT,
            &[(USER_SLOT, Some("Jane")), (DATE_SLOT, Some("2017-W19"))],
        ));

        assert_eq!(
            intent,
            Intent::OnCall(OnCallSlots {
                user: Some("Jane".to_string()),
                date: Some("2017-W19".to_string()),
            })
        );
    }

    #[test]
    fn test_builtin_intents() {
        assert_eq!(Intent::from_request(&intent_request(HELP_INTENT, &[])), Intent::Help);
        assert_eq!(Intent::from_request(&intent_request(CANCEL_INTENT, &[])), Intent::Cancel);
        assert_eq!(Intent::from_request(&intent_request(STOP_INTENT, &[])), Intent::Stop);
        assert_eq!(Intent::Help.oncall_slots(), None);
    }

    #[test]
    fn test_session_ended_carries_reason() {
        let mut req = request(REQUEST_SESSION_ENDED);
        req.reason = Some("ERROR".to_string());
        req.error = Some(PlatformError {
            kind: Some("INVALID_RESPONSE".to_string()),
            message: Some("bad ssml".to_string()),
        });

        assert_eq!(
            Intent::from_request(&req),
            Intent::SessionEnded {
                reason: Some("ERROR".to_string()),
                error: Some("bad ssml".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_names_are_unrecognized() {
        assert_eq!(
            Intent::from_request(&intent_request("AMAZON.FallbackIntent", &[])),
            Intent::Unrecognized("AMAZON.FallbackIntent".to_string())
        );
        assert_eq!(
            Intent::from_request(&request("CanFulfillIntentRequest")),
            Intent::Unrecognized("CanFulfillIntentRequest".to_string())
        );
    }
}
