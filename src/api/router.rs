use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::teams;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Team records
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/{team_id}",
            get(teams::get_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::team::{InMemoryTeamRepository, TeamService};

    async fn app(seed: bool) -> Router {
        let service = TeamService::new(Arc::new(InMemoryTeamRepository::new()));

        if seed {
            service.seed_defaults().await.unwrap();
        }

        create_router(AppState::new(Arc::new(service)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_list_seeded_teams() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::GET, "/teams", None).await;

        assert_eq!(status, StatusCode::OK);
        let teams = body.as_array().unwrap();
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0]["name"], "San Jose Swifts");
        assert_eq!(teams[1]["division"], "central");
        assert_eq!(teams[2]["id"], 3);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let app = app(false).await;

        let (status, body) = send(&app, Method::GET, "/teams", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_get_seeded_team() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::GET, "/teams/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "San Jose Swifts",
                "wins": 10,
                "losses": 2,
                "division": "pacific"
            })
        );
    }

    #[tokio::test]
    async fn test_get_missing_team() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::GET, "/teams/99", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");
    }

    #[tokio::test]
    async fn test_get_non_numeric_id() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::GET, "/teams/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "malformed_request_error");
    }

    #[tokio::test]
    async fn test_create_team() {
        let app = app(true).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "Denver Dippers", "wins": 4, "losses": 6, "division": "central"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["name"], "Denver Dippers");

        let (status, body) = send(&app, Method::GET, "/teams/4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["division"], "central");
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = app(false).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"id": 500, "name": "X", "wins": 0, "losses": 0, "division": "atlantic"})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
    }

    #[tokio::test]
    async fn test_create_invalid_input() {
        let app = app(true).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "X", "wins": -1, "losses": 0, "division": "pacific"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_input_error");

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "X", "wins": 0, "losses": 0, "division": "unknown"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_input_error");

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_malformed_body() {
        let app = app(false).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "X", "wins": "lots", "losses": 0, "division": "pacific"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "malformed_request_error");

        let (status, _) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "X", "wins": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_patch_team() {
        let app = app(true).await;

        let (status, body) =
            send(&app, Method::PATCH, "/teams/3", Some(json!({"wins": 5}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 3,
                "name": "Boston Buffleheads",
                "wins": 5,
                "losses": 3,
                "division": "atlantic"
            })
        );
    }

    #[tokio::test]
    async fn test_patch_missing_and_invalid() {
        let app = app(true).await;

        let (status, _) = send(&app, Method::PATCH, "/teams/42", Some(json!({"wins": 5}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) =
            send(&app, Method::PATCH, "/teams/1", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_input_error");

        let (status, body) =
            send(&app, Method::PATCH, "/teams/1", Some(json!({"losses": "two"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "malformed_request_error");
    }

    #[tokio::test]
    async fn test_delete_team() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::DELETE, "/teams/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, Method::GET, "/teams/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/teams/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "Late Entry", "wins": 0, "losses": 0, "division": "central"})),
        )
        .await;
        assert_eq!(body["id"], 4);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = app(true).await;

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"][0]["name"], "team_store");

        let (status, _) = send(&app, Method::GET, "/live", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_and_request_id() {
        let app = app(false).await;

        let request = Request::builder()
            .uri("/")
            .header("x-request-id", "req-1")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-request-id"], "req-1");
    }
}
