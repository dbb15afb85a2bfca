//! HTTP surface for the skill.
//!
//! - `POST /alexa` takes a platform request envelope and returns the response
//!   envelope
//! - `GET /health` for load balancers

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use routes::{create_router, AppState};
