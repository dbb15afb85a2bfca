//! Alexa Skills Kit request and response envelopes.
//!
//! Only the fields the skill reads or writes are modelled; everything else in
//! the platform JSON is ignored on the way in.

use crate::speech::Speech;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const REQUEST_LAUNCH: &str = "LaunchRequest";
pub const REQUEST_INTENT: &str = "IntentRequest";
pub const REQUEST_SESSION_ENDED: &str = "SessionEndedRequest";

/// Inbound request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

impl RequestEnvelope {
    /// Skill id the request is addressed to.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .or_else(|| self.system().and_then(|s| s.application.as_ref()))
            .map(|app| app.application_id.as_str())
    }

    /// Account-linking access token, from the session or the system context.
    pub fn access_token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .and_then(|u| u.access_token.as_deref())
            .or_else(|| {
                self.system()
                    .and_then(|s| s.user.as_ref())
                    .and_then(|u| u.access_token.as_deref())
            })
            .filter(|token| !token.is_empty())
    }

    fn system(&self) -> Option<&SystemContext> {
        self.context.as_ref().and_then(|c| c.system.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<PlatformUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<PlatformUser>,
}

/// The `request` object. `kind` selects which other fields are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentPayload>,
    /// `SessionEndedRequest` only.
    #[serde(default)]
    pub reason: Option<String>,
    /// `SessionEndedRequest` only.
    #[serde(default)]
    pub error: Option<PlatformError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl IntentPayload {
    /// Non-empty value of a slot.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformError {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outbound response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    pub fn ssml(speech: &Speech) -> Self {
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", speech.to_ssml()),
        }
    }

    /// The SSML document.
    pub fn as_ssml(&self) -> &str {
        match self {
            OutputSpeech::Ssml { ssml } => ssml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
    LinkAccount,
}

impl ResponseEnvelope {
    fn with_body(response: ResponseBody) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: HashMap::new(),
            response,
        }
    }

    /// Speak and end the session.
    pub fn tell(speech: &Speech) -> Self {
        Self::with_body(ResponseBody {
            output_speech: Some(OutputSpeech::ssml(speech)),
            card: None,
            reprompt: None,
            should_end_session: true,
        })
    }

    /// Speak and keep listening, repeating `reprompt` if the caller is silent.
    pub fn ask(speech: &Speech, reprompt: &Speech) -> Self {
        Self::with_body(ResponseBody {
            output_speech: Some(OutputSpeech::ssml(speech)),
            card: None,
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::ssml(reprompt),
            }),
            should_end_session: false,
        })
    }

    /// End the session silently.
    pub fn end() -> Self {
        Self::with_body(ResponseBody {
            output_speech: None,
            card: None,
            reprompt: None,
            should_end_session: true,
        })
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.response.card = Some(card);
        self
    }

    /// SSML of the main output, if any.
    pub fn ssml(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(OutputSpeech::as_ssml)
    }
}
