//! Request dispatch.

use crate::compose::{compose_oncalls, PhraseSource, RandomPhrases};
use crate::config::SkillConfig;
use crate::context::RequestContext;
use crate::date_range::DateRange;
use crate::error::{Result, SkillError};
use crate::intent::{Intent, OnCallSlots};
use crate::oncall::fetch_oncalls;
use crate::platform::{Card, RequestEnvelope, ResponseEnvelope};
use crate::speech::Speech;
use crate::user::{resolve_user, UserReference};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use pagerduty::{Credentials, OnCallApi};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const HELP_TEXT: &str = "You can ask me if you or another user is currently on call.";
pub const HELP_REPROMPT: &str = "What can I help you with?";
pub const CARD_TITLE: &str = "PagerDuty On-Call";

/// Platform reason for a session that ended because of a failure.
const SESSION_ENDED_ERROR: &str = "ERROR";

/// The skill: one shared instance serves every request.
pub struct Skill {
    api: Arc<dyn OnCallApi>,
    config: SkillConfig,
    time_zone: Tz,
    /// Account-wide key for requests without a linked token.
    api_key: Option<Credentials>,
    phrases: Arc<dyn PhraseSource>,
}

impl Skill {
    pub fn new(api: Arc<dyn OnCallApi>, config: SkillConfig) -> utils::Result<Self> {
        let time_zone = config.time_zone()?;
        let api_key = config.api_key.as_deref().map(Credentials::api_key);
        Ok(Self {
            api,
            config,
            time_zone,
            api_key,
            phrases: Arc::new(RandomPhrases),
        })
    }

    /// Replace the source of celebratory phrases.
    pub fn with_phrases(mut self, phrases: Arc<dyn PhraseSource>) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Handle one platform request.
    ///
    /// Only a request addressed to another skill is an error; every other
    /// failure becomes spoken output.
    pub async fn handle(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope> {
        self.handle_at(envelope, Utc::now()).await
    }

    /// [`Skill::handle`] with an explicit clock.
    pub async fn handle_at(
        &self,
        envelope: &RequestEnvelope,
        now: DateTime<Utc>,
    ) -> Result<ResponseEnvelope> {
        self.verify_application(envelope)?;

        let ctx = RequestContext::from_envelope(envelope, self.time_zone)
            .or_credentials(self.api_key.as_ref());
        let intent = Intent::from_request(&envelope.request);
        info!(
            request_id = %ctx.request_id,
            locale = %ctx.locale,
            intent = ?intent,
            "Dispatching request"
        );

        Ok(self.dispatch(&ctx, intent, now).await)
    }

    fn verify_application(&self, envelope: &RequestEnvelope) -> Result<()> {
        let Some(expected) = &self.config.application_id else {
            return Ok(());
        };

        let actual = envelope.application_id();
        if actual == Some(expected.as_str()) {
            Ok(())
        } else {
            warn!(expected = %expected, actual = ?actual, "Rejecting request for another application");
            Err(SkillError::InvalidApplication {
                expected: expected.clone(),
                actual: actual.map(str::to_string),
            })
        }
    }

    async fn dispatch(&self, ctx: &RequestContext, intent: Intent, now: DateTime<Utc>) -> ResponseEnvelope {
        match intent {
            Intent::Launch | Intent::OnCall(_) => {
                let slots = intent.oncall_slots().unwrap_or_default();
                match self.answer_oncall(ctx, &slots, now).await {
                    Ok(speech) => {
                        let content = speech.to_plain_text();
                        ResponseEnvelope::tell(&speech).with_card(Card::Simple {
                            title: CARD_TITLE.to_string(),
                            content,
                        })
                    }
                    Err(err) => self.error_response(ctx, err),
                }
            }
            Intent::Help | Intent::Unrecognized(_) => help(),
            Intent::Cancel | Intent::Stop => ResponseEnvelope::end(),
            Intent::SessionEnded { reason, error } => match reason.as_deref() {
                Some(SESSION_ENDED_ERROR) => self.error_response(
                    ctx,
                    SkillError::Session {
                        reason: error.unwrap_or_else(|| SESSION_ENDED_ERROR.to_string()),
                    },
                ),
                _ => {
                    debug!(request_id = %ctx.request_id, reason = ?reason, "Session ended");
                    ResponseEnvelope::end()
                }
            },
        }
    }

    /// Resolve the date, then the user, then fetch. The date comes first so a
    /// vague date never costs an API call.
    async fn answer_oncall(
        &self,
        ctx: &RequestContext,
        slots: &OnCallSlots,
        now: DateTime<Utc>,
    ) -> Result<Speech> {
        ctx.credentials()?;

        let range = DateRange::resolve(slots.date.as_deref(), ctx.time_zone)?;
        let reference = UserReference::parse(slots.user.as_deref())?;

        let subject = resolve_user(self.api.as_ref(), ctx, &reference, self.config.user_search_limit).await?;
        let oncalls = fetch_oncalls(self.api.as_ref(), ctx, &subject.user.id, range.as_ref()).await?;

        let viewer_zone = subject
            .user
            .time_zone
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
            .unwrap_or(ctx.time_zone);

        Ok(compose_oncalls(
            &oncalls,
            viewer_zone,
            subject.spoken_name(),
            now,
            self.phrases.as_ref(),
        ))
    }

    fn error_response(&self, ctx: &RequestContext, err: SkillError) -> ResponseEnvelope {
        if err.is_user_facing() {
            info!(request_id = %ctx.request_id, error = %err, "Answering with apology");
        } else if err.is_rejected_credentials() {
            warn!(request_id = %ctx.request_id, error = %err, "PagerDuty rejected the credentials");
        } else {
            error!(
                request_id = %ctx.request_id,
                status = ?err.upstream_status(),
                error = %err,
                "Request failed"
            );
        }

        let response = ResponseEnvelope::tell(&err.speech());
        match err {
            SkillError::AccountNotLinked => response.with_card(Card::LinkAccount),
            _ => response,
        }
    }
}

fn help() -> ResponseEnvelope {
    ResponseEnvelope::ask(&Speech::from_text(HELP_TEXT), &Speech::from_text(HELP_REPROMPT))
}
