use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};

use std::{sync::Arc, time::Instant};

use crate::{expenses, spending_limits, summary};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Log method, path, status and latency of every request.
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request served"
    );
    response
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/expenses", post(expenses::create).get(expenses::list))
        .route("/expenses/summary", get(summary::get_summary))
        .route(
            "/expenses/{id}",
            get(expenses::get)
                .put(expenses::update)
                .delete(expenses::delete),
        )
        .route(
            "/spending-limits",
            post(spending_limits::set).get(spending_limits::get),
        )
        .route("/spending-limits/{id}", delete(spending_limits::delete))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router(ServerState {
            engine: Arc::new(Engine::in_memory()),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_expense(app: &Router, amount: f64, date: &str) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/expenses",
            Some(json!({
                "amount": amount,
                "description": "Groceries",
                "category": "Food",
                "date": date,
                "userId": "user-123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn create_expense_returns_created_with_id() {
        let app = app();

        let body = create_expense(&app, 50.0, "2025-01-15").await;

        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(body["amount"].as_f64(), Some(50.0));
        assert_eq!(body["description"], "Groceries");
        assert_eq!(body["category"], "Food");
        assert_eq!(body["date"], "2025-01-15");
        assert_eq!(body["userId"], "user-123");
    }

    #[tokio::test]
    async fn list_expenses_for_month() {
        let app = app();
        create_expense(&app, 100.0, "2025-01-15").await;
        create_expense(&app, 200.0, "2025-01-20").await;
        create_expense(&app, 300.0, "2025-02-01").await;

        let (status, body) = send(
            &app,
            "GET",
            "/expenses?userId=user-123&month=1&year=2025",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let expenses = body.as_array().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0]["amount"].as_f64(), Some(100.0));
        assert_eq!(expenses[1]["amount"].as_f64(), Some(200.0));

        let (status, body) = send(&app, "GET", "/expenses?userId=user-123", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn summary_against_limit() {
        let app = app();
        let (status, limit) = send(
            &app,
            "POST",
            "/spending-limits",
            Some(json!({
                "userId": "user-123",
                "monthlyLimit": 1000,
                "month": 1,
                "year": 2025,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(limit["monthlyLimit"].as_f64(), Some(1000.0));
        create_expense(&app, 100.0, "2025-01-05").await;
        create_expense(&app, 200.0, "2025-01-10").await;
        create_expense(&app, 300.0, "2025-01-31").await;

        let (status, body) = send(
            &app,
            "GET",
            "/expenses/summary?userId=user-123&month=1&year=2025",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSpent"].as_f64(), Some(600.0));
        assert_eq!(body["spendingLimit"].as_f64(), Some(1000.0));
        assert_eq!(body["remainingBudget"].as_f64(), Some(400.0));
        assert_eq!(body["percentageUsed"].as_f64(), Some(60.0));
    }

    #[tokio::test]
    async fn summary_without_limit_has_nulls() {
        let app = app();
        create_expense(&app, 12.5, "2025-01-05").await;

        let (status, body) = send(
            &app,
            "GET",
            "/expenses/summary?userId=user-123&month=1&year=2025",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSpent"].as_f64(), Some(12.5));
        assert!(body["spendingLimit"].is_null());
        assert!(body["remainingBudget"].is_null());
        assert!(body["percentageUsed"].is_null());
    }

    #[tokio::test]
    async fn summary_requires_month_and_year() {
        let (status, body) = send(&app(), "GET", "/expenses/summary?userId=user-123", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "month and year are required");
    }

    #[tokio::test]
    async fn update_get_and_delete_expense() {
        let app = app();
        let created = create_expense(&app, 50.0, "2025-01-15").await;
        let uri = format!("/expenses/{}", created["id"].as_str().unwrap());

        let (status, updated) = send(&app, "PUT", &uri, Some(json!({ "amount": 75 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["amount"].as_f64(), Some(75.0));
        assert_eq!(updated["description"], created["description"]);
        assert_eq!(updated["date"], created["date"]);

        let (status, fetched) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, updated);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn update_unknown_expense_is_not_found() {
        let uri = format!("/expenses/{}", uuid::Uuid::new_v4());
        let (status, _) = send(&app(), "PUT", &uri, Some(json!({ "amount": 1 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let (status, body) = send(&app(), "GET", "/expenses/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn non_numeric_month_is_bad_request() {
        let (status, body) = send(
            &app(),
            "GET",
            "/expenses?userId=user-123&month=jan&year=2025",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn out_of_range_month_is_unprocessable() {
        let (status, _) = send(
            &app(),
            "GET",
            "/expenses?userId=user-123&month=13&year=2025",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn invalid_expense_input_is_rejected() {
        let app = app();
        let (status, _) = send(
            &app,
            "POST",
            "/expenses",
            Some(json!({
                "amount": -5,
                "description": "Refund?",
                "category": "Food",
                "date": "2025-01-15",
                "userId": "user-123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            "POST",
            "/expenses",
            Some(json!({
                "amount": 5,
                "description": "Groceries",
                "category": "Food",
                "date": "15/01/2025",
                "userId": "user-123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(&app, "POST", "/expenses", Some(json!({ "amount": 5 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(
            &app,
            "POST",
            "/expenses",
            Some(json!({
                "amount": 5,
                "date": "2025-01-15",
                "userId": "user-123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("description")));
    }

    #[tokio::test]
    async fn summary_overflow_is_unprocessable() {
        let app = app();
        create_expense(&app, 5e28, "2025-01-05").await;
        create_expense(&app, 5e28, "2025-01-06").await;

        let (status, body) = send(
            &app,
            "GET",
            "/expenses/summary?userId=user-123&month=1&year=2025",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().is_some_and(|e| e.starts_with("Overflow")));
    }

    #[tokio::test]
    async fn setting_limit_twice_replaces_it() {
        let app = app();
        let limit = |amount: u32| {
            Some(json!({
                "userId": "user-123",
                "monthlyLimit": amount,
                "month": 1,
                "year": 2025,
            }))
        };

        let (status, first) = send(&app, "POST", "/spending-limits", limit(1000)).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, second) = send(&app, "POST", "/spending-limits", limit(1500)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["id"], second["id"]);

        let (status, body) = send(
            &app,
            "GET",
            "/spending-limits?userId=user-123&month=1&year=2025",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthlyLimit"].as_f64(), Some(1500.0));

        let (status, body) = send(&app, "GET", "/spending-limits?userId=user-123", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_limit_then_lookup_is_not_found() {
        let app = app();
        let (_, limit) = send(
            &app,
            "POST",
            "/spending-limits",
            Some(json!({
                "userId": "user-123",
                "monthlyLimit": 250.75,
                "month": 3,
                "year": 2025,
            })),
        )
        .await;
        let uri = format!("/spending-limits/{}", limit["id"].as_str().unwrap());

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            &app,
            "GET",
            "/spending-limits?userId=user-123&month=3&year=2025",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
