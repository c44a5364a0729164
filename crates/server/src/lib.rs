use api_types::MonthQuery;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, run_with_listener};

mod expenses;
mod server;
mod spending_limits;
mod summary;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidPeriod(_)
        | EngineError::InvalidDate(_)
        | EngineError::InvalidName(_)
        | EngineError::Overflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Generic(value.body_text())
    }
}

/// Month and year of a list query: both or neither.
fn optional_month(query: &MonthQuery) -> Result<Option<(u32, i32)>, ServerError> {
    match (query.month, query.year) {
        (Some(month), Some(year)) => Ok(Some((month, year))),
        (None, None) => Ok(None),
        _ => Err(ServerError::Generic(
            "month and year must be given together".to_string(),
        )),
    }
}

fn required_month(query: &MonthQuery) -> Result<(u32, i32), ServerError> {
    optional_month(query)?
        .ok_or_else(|| ServerError::Generic("month and year are required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: Option<u32>, year: Option<i32>) -> MonthQuery {
        MonthQuery {
            user_id: "user-123".to_string(),
            month,
            year,
        }
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        for err in [
            EngineError::InvalidAmount("x".to_string()),
            EngineError::InvalidPeriod("x".to_string()),
            EngineError::InvalidDate("x".to_string()),
            EngineError::InvalidName("x".to_string()),
            EngineError::Overflow("x".to_string()),
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn month_and_year_go_together() {
        assert_eq!(optional_month(&query(Some(1), Some(2025))).unwrap(), Some((1, 2025)));
        assert_eq!(optional_month(&query(None, None)).unwrap(), None);
        assert!(optional_month(&query(Some(1), None)).is_err());
        assert!(optional_month(&query(None, Some(2025))).is_err());
        assert!(required_month(&query(None, None)).is_err());
    }
}
