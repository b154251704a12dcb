//! Generic create/list handlers, instantiated once per resource.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use api_types::envelope::{Listing, Success};
use engine::{EngineError, Resource};

use crate::{ApiError, server::ServerState};

/// POST handler: validate, persist, return 201 with the stored record.
pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Success<R::Record>>), ApiError> {
    match state.engine.create::<R>(&payload).await {
        Ok(record) => Ok((
            StatusCode::CREATED,
            Json(Success::new(
                record,
                format!("{} added successfully", R::DISPLAY),
            )),
        )),
        Err(EngineError::Validation(details)) => Err(ApiError::Validation(details)),
        Err(EngineError::Database(err)) => Err(ApiError::Create {
            resource: R::SINGULAR,
            err,
        }),
    }
}

/// GET handler: every record, most recent first, with an exact count.
pub async fn list<R: Resource>(
    State(state): State<ServerState>,
) -> Result<Json<Listing<R::Record>>, ApiError> {
    match state.engine.list::<R>().await {
        Ok(records) => Ok(Json(Listing::new(records))),
        Err(EngineError::Validation(details)) => Err(ApiError::Validation(details)),
        Err(EngineError::Database(err)) => Err(ApiError::List {
            resource: R::PLURAL,
            err,
        }),
    }
}
