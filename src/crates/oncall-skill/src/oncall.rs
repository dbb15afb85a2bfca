//! Fetching a user's on-call entries.

use crate::context::RequestContext;
use crate::date_range::DateRange;
use crate::error::Result;
use pagerduty::{OnCall, OnCallApi, OnCallQuery};
use tracing::debug;

/// Only first responders are reported.
pub const FIRST_LEVEL: u32 = 1;

/// Keep entries that come from a schedule and sit at the first escalation
/// level. Upstream order is preserved.
pub fn first_level_scheduled(oncalls: Vec<OnCall>) -> Vec<OnCall> {
    oncalls
        .into_iter()
        .filter(OnCall::is_schedule_backed)
        .filter(|oncall| oncall.escalation_level == FIRST_LEVEL)
        .collect()
}

/// On-call entries for `user_id`, either now or within `range`.
pub async fn fetch_oncalls(
    api: &dyn OnCallApi,
    ctx: &RequestContext,
    user_id: &str,
    range: Option<&DateRange>,
) -> Result<Vec<OnCall>> {
    let mut query = OnCallQuery::for_user(user_id);
    if let Some(range) = range {
        query = query.between(range.since, range.until);
    }

    let oncalls = api.list_oncalls(ctx.credentials()?, &query).await?;
    let total = oncalls.len();
    let kept = first_level_scheduled(oncalls);

    debug!(
        request_id = %ctx.request_id,
        user_id = %user_id,
        total,
        kept = kept.len(),
        "Fetched on-call entries"
    );

    Ok(kept)
}
