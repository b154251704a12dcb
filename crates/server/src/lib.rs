use axum::{Json, http::StatusCode, response::IntoResponse};
use sea_orm::DbErr;

use api_types::envelope::Failure;

pub use server::{app, run_with_listener, spawn_with_listener};

mod health;
mod notifications;
mod resources;
mod server;

/// Everything a handler can fail with, mapped to the client-facing
/// envelope in one place.
pub enum ApiError {
    /// Input violated one or more rules; carries the full list.
    Validation(Vec<String>),
    /// Storage fault during a create. `resource` is the lowercase noun
    /// used in the client message ("sale", "inventory item", ...).
    Create { resource: &'static str, err: DbErr },
    /// Storage fault during a list. `resource` is the lowercase plural.
    List { resource: &'static str, err: DbErr },
    /// Last-resort catch-all. Never leaks any detail to the client.
    Unexpected,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, failure) = match self {
            ApiError::Validation(details) => {
                (StatusCode::BAD_REQUEST, Failure::validation(details))
            }
            ApiError::Create { resource, err } => {
                tracing::error!("database error adding {resource}: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Failure::server(format!("Failed to add {resource}")),
                )
            }
            ApiError::List { resource, err } => {
                tracing::error!("database error fetching {resource}: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Failure::server(format!("Failed to fetch {resource}")),
                )
            }
            ApiError::Unexpected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Failure::server("Unexpected server error"),
            ),
        };

        (status, Json(failure)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_err() -> DbErr {
        DbErr::Custom("connection refused".to_string())
    }

    #[test]
    fn validation_maps_to_400() {
        let res = ApiError::Validation(vec!["bad".to_string()]).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn create_fault_maps_to_500() {
        let res = ApiError::Create {
            resource: "sale",
            err: db_err(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn list_fault_maps_to_500() {
        let res = ApiError::List {
            resource: "sales",
            err: db_err(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unexpected_maps_to_500() {
        let res = ApiError::Unexpected.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
