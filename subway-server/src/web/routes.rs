//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Age, StationId};
use crate::fare::discounted_fare;
use crate::path::PathError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/lines", get(list_lines))
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every known station, in file order.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    Json(
        state
            .network
            .stations()
            .iter()
            .map(StationResponse::from_station)
            .collect(),
    )
}

/// Every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    Json(
        state
            .network
            .lines()
            .iter()
            .map(LineResponse::from_line)
            .collect(),
    )
}

/// Shortest path and fare between two stations.
async fn find_path(
    State(state): State<AppState>,
    query: Result<Query<PathRequest>, QueryRejection>,
) -> Result<Json<PathResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let source = station(&state, req.source)?;
    let target = station(&state, req.target)?;

    let age = req
        .age
        .map(Age::new)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let path = state
        .finder
        .find_shortest_path(state.network.lines(), source, target)?;

    let fare = match age {
        Some(age) => discounted_fare(path.fare(), age),
        None => path.fare(),
    };

    Ok(Json(PathResponse::from_path(&path, fare)))
}

fn station(state: &AppState, id: u64) -> Result<&crate::domain::Station, AppError> {
    state
        .network
        .station(StationId::new(id))
        .ok_or_else(|| AppError::NotFound {
            message: format!("station {id} does not exist"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PathError::SameStation(_) | PathError::Disconnected { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
