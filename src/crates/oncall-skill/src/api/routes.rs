//! API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::skill::Skill;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
}

/// Build the complete API router
pub fn create_router(skill: Arc<Skill>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/alexa", post(handlers::handle_skill_request))
        .with_state(AppState { skill })
}
