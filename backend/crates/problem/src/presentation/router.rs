//! Problem Router

use crate::application::config::ProblemConfig;
use crate::domain::repository::ProblemRepository;
use crate::presentation::handlers::{self, ProblemAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the problem router for any repository implementation
///
/// Routes:
/// - `GET    /problems`
/// - `POST   /problems`
/// - `GET    /problems/{id}`
/// - `PUT    /problems/{id}`
/// - `DELETE /problems/{id}`
pub fn problem_router<R>(repo: R, config: ProblemConfig) -> Router
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let state = ProblemAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/problems",
            get(handlers::list_problems::<R>).post(handlers::create_problem::<R>),
        )
        .route(
            "/problems/{id}",
            get(handlers::get_problem::<R>)
                .put(handlers::update_problem::<R>)
                .delete(handlers::delete_problem::<R>),
        )
        .with_state(state)
}
