//! Spending limits API endpoints

use api_types::{
    MonthQuery,
    spending_limit::{SpendingLimit, SpendingLimitNew},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{ServerError, optional_month, server::ServerState};

fn map_limit(limit: engine::SpendingLimit) -> SpendingLimit {
    SpendingLimit {
        id: limit.id,
        user_id: limit.user_id,
        monthly_limit: limit.monthly_limit.amount(),
        month: limit.period.month(),
        year: limit.period.year(),
    }
}

/// Handle requests for setting a monthly limit.
///
/// Answers `201 Created` for a new limit and `200 OK` when the limit of that
/// month already existed and its amount was replaced.
pub async fn set(
    State(state): State<ServerState>,
    payload: Result<Json<SpendingLimitNew>, JsonRejection>,
) -> Result<(StatusCode, Json<SpendingLimit>), ServerError> {
    let Json(payload) = payload?;

    let write = state
        .engine
        .set_spending_limit(engine::SpendingLimitCmd {
            user_id: payload.user_id,
            monthly_limit: payload.monthly_limit,
            month: payload.month,
            year: payload.year,
        })
        .await?;

    let status = if write.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let limit = write.into_limit();
    tracing::debug!(
        id = %limit.id,
        user_id = %limit.user_id,
        created = status == StatusCode::CREATED,
        "spending limit set"
    );

    Ok((status, Json(map_limit(limit))))
}

/// Handle requests for a user's limits.
///
/// With `month` and `year` the single limit of that month is returned (404
/// when none is set); without them, every limit of the user.
pub async fn get(
    State(state): State<ServerState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
    let Query(query) = query?;

    let response = match optional_month(&query)? {
        Some((month, year)) => {
            let limit = state
                .engine
                .spending_limit(&query.user_id, month, year)
                .await?;
            Json(map_limit(limit)).into_response()
        }
        None => {
            let limits = state.engine.spending_limits(&query.user_id).await?;
            Json(limits.into_iter().map(map_limit).collect::<Vec<_>>()).into_response()
        }
    };

    Ok(response)
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_spending_limit(id).await?;
    tracing::debug!(%id, "spending limit deleted");
    Ok(StatusCode::NO_CONTENT)
}
