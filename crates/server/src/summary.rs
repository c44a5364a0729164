//! Spending summary API endpoint

use api_types::{MonthQuery, summary::SpendingSummary};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, required_month, server::ServerState};

/// Handle requests for a user's monthly spending summary
pub async fn get_summary(
    State(state): State<ServerState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<SpendingSummary>, ServerError> {
    let Query(query) = query?;
    let (month, year) = required_month(&query)?;

    let summary = state
        .engine
        .monthly_summary(&query.user_id, month, year)
        .await?;

    Ok(Json(SpendingSummary {
        total_spent: summary.total_spent,
        spending_limit: summary.spending_limit,
        remaining_budget: summary.remaining_budget,
        percentage_used: summary.percentage_used,
    }))
}
