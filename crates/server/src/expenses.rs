//! Expenses API endpoints

use api_types::{
    MonthQuery,
    expense::{Expense, ExpenseNew, ExpenseUpdate},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, optional_month, server::ServerState};

fn map_expense(expense: engine::Expense) -> Expense {
    Expense {
        id: expense.id,
        amount: expense.amount.amount(),
        description: expense.description,
        category: expense.category,
        date: expense.date,
        user_id: expense.user_id,
    }
}

/// Handle requests for recording a new expense
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ServerError> {
    let Json(payload) = payload?;
    let date = engine::parse_calendar_date(&payload.date)?;

    let expense = state
        .engine
        .create_expense(engine::ExpenseCmd {
            amount: payload.amount,
            description: payload.description,
            category: payload.category,
            date,
            user_id: payload.user_id,
        })
        .await?;
    tracing::debug!(id = %expense.id, user_id = %expense.user_id, "expense created");

    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

/// Handle requests for listing a user's expenses, optionally for one month
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<Expense>>, ServerError> {
    let Query(query) = query?;

    let expenses = match optional_month(&query)? {
        Some((month, year)) => {
            state
                .engine
                .expenses_for_month(&query.user_id, month, year)
                .await?
        }
        None => state.engine.expenses(&query.user_id).await?,
    };

    Ok(Json(expenses.into_iter().map(map_expense).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let expense = state.engine.expense(id).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ExpenseUpdate>, JsonRejection>,
) -> Result<Json<Expense>, ServerError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let date = payload
        .date
        .as_deref()
        .map(engine::parse_calendar_date)
        .transpose()?;

    let expense = state
        .engine
        .update_expense(
            id,
            engine::UpdateExpenseCmd {
                amount: payload.amount,
                description: payload.description,
                category: payload.category,
                date,
                user_id: payload.user_id,
            },
        )
        .await?;
    tracing::debug!(id = %expense.id, "expense updated");

    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_expense(id).await?;
    tracing::debug!(%id, "expense deleted");
    Ok(StatusCode::NO_CONTENT)
}
