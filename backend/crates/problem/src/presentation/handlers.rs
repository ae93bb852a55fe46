//! HTTP Handlers
//!
//! Pure plumbing: extract, validate, call the service, wrap the result.
//! Failures go out through `ProblemError`'s `IntoResponse`.
//!
//! Write bodies are read as raw bytes: a blank body, or one not sent as JSON,
//! is treated as no payload and rejected as empty by validation.

use crate::application::config::ProblemConfig;
use crate::application::service::ProblemService;
use crate::application::validation::{validate_create, validate_update};
use crate::domain::repository::ProblemRepository;
use crate::error::ProblemResult;
use crate::presentation::dto::{ApiResponse, ProblemResponse};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;

/// Shared state for problem handlers
pub struct ProblemAppState<R>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ProblemConfig>,
}

// Manual impl: the repository itself need not be Clone.
impl<R> Clone for ProblemAppState<R>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> ProblemAppState<R>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    fn service(&self) -> ProblemService<R> {
        ProblemService::new(self.repo.clone(), self.config.clone())
    }
}

type ProblemJson = Json<ApiResponse<ProblemResponse>>;

/// GET /problems
pub async fn list_problems<R>(
    State(state): State<ProblemAppState<R>>,
) -> ProblemResult<Json<ApiResponse<Vec<ProblemResponse>>>>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let problems = state.service().list_all().await?;
    let data = problems.into_iter().map(ProblemResponse::from).collect();

    Ok(Json(ApiResponse::new(data, "findAll")))
}

/// GET /problems/{id}
pub async fn get_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
) -> ProblemResult<ProblemJson>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let problem = state.service().get_by_id(&id).await?;

    Ok(Json(ApiResponse::new(problem.into(), "findOne")))
}

/// POST /problems
pub async fn create_problem<R>(
    State(state): State<ProblemAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> ProblemResult<(StatusCode, ProblemJson)>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let payload = read_payload(&headers, &body)?;
    let new = validate_create(&payload)?;

    let problem = state.service().create(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(problem.into(), "created")),
    ))
}

/// PUT /problems/{id}
pub async fn update_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ProblemResult<ProblemJson>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let payload = read_payload(&headers, &body)?;
    let patch = validate_update(&payload)?;

    let problem = state.service().update(&id, patch).await?;

    Ok(Json(ApiResponse::new(problem.into(), "updated")))
}

/// DELETE /problems/{id}
pub async fn delete_problem<R>(
    State(state): State<ProblemAppState<R>>,
    Path(id): Path<String>,
) -> ProblemResult<ProblemJson>
where
    R: ProblemRepository + Send + Sync + 'static,
{
    let problem = state.service().delete(&id).await?;

    Ok(Json(ApiResponse::new(problem.into(), "deleted")))
}

fn read_payload(headers: &HeaderMap, body: &Bytes) -> ProblemResult<Value> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let Json(payload) = Json::<Value>::from_bytes(body)?;
    Ok(payload)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}
