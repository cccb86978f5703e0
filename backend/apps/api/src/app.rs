//! Router composition

use auth::{
    AuthConfig, AuthMiddlewareState, SqliteAuthRepository, auth_router, require_bearer_token,
};
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::get,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracker::{SqliteTrackerRepository, TrackerConfig, tracker_router};

/// Create both tables. `users` goes first for the foreign key.
pub async fn ensure_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    SqliteAuthRepository::new(pool.clone())
        .ensure_schema()
        .await?;
    SqliteTrackerRepository::new(pool.clone())
        .ensure_schema()
        .await?;
    Ok(())
}

/// Full HTTP surface: public auth routes, bearer-protected tracker routes,
/// and the liveness probe
pub fn build_router(pool: SqlitePool, frontend_origins: &[String]) -> Router {
    let auth_repo = SqliteAuthRepository::new(pool.clone());
    let tracker_repo = SqliteTrackerRepository::new(pool);

    let protected = tracker_router(tracker_repo, TrackerConfig::default()).route_layer(
        from_fn_with_state(
            AuthMiddlewareState::new(auth_repo.clone()),
            require_bearer_token::<SqliteAuthRepository>,
        ),
    );

    Router::new()
        .route("/health", get(health))
        .merge(auth_router(auth_repo, AuthConfig::default()))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_origins))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(frontend_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5173";

    async fn app() -> Router {
        let pool = platform::database::connect_in_memory().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        build_router(pool, &[ORIGIN.to_string()])
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn signup(app: &Router, username: &str) -> Value {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/signup",
                None,
                Some(json!({"username": username, "password": "1234"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = app()
            .await
            .oneshot(request("GET", "/health", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer() {
        let app = app().await;

        for (method, uri) in [
            ("GET", "/applications"),
            ("POST", "/applications"),
            ("PATCH", "/applications/1"),
            ("DELETE", "/applications/1"),
            ("GET", "/analytics/summary"),
        ] {
            let response = app
                .clone()
                .oneshot(request(method, uri, None, None))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNAUTHORIZED,
                "{method} {uri} should require auth"
            );
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "Bearer"
            );
        }

        let unknown = app
            .oneshot(request("GET", "/applications", Some("nope"), None))
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_full_flow() {
        let app = app().await;

        let bill = signup(&app, "bill").await;
        let bill_token = bill["token"].as_str().unwrap().to_string();
        let ada = signup(&app, "ada").await;
        let ada_token = ada["token"].as_str().unwrap().to_string();

        // Login echoes the same token
        let login = app
            .clone()
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(json!({"username": "bill", "password": "1234"})),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(login).await["token"], bill["token"]);

        // Owner comes from the token, not the body
        let created = app
            .clone()
            .oneshot(request(
                "POST",
                "/applications",
                Some(&bill_token),
                Some(json!({
                    "company": "Acme",
                    "role": "Engineer",
                    "date_applied": "2024-01-01",
                    "user_id": ada["id"]
                })),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert_eq!(created["user_id"], bill["id"]);
        assert_eq!(created["status"], "Applied");

        let summary = app
            .clone()
            .oneshot(request("GET", "/analytics/summary", Some(&bill_token), None))
            .await
            .unwrap();
        assert_eq!(
            body_json(summary).await,
            json!({
                "total": 1,
                "applied": 1,
                "interview": 0,
                "offer": 0,
                "rejected": 0,
                "no response": 0
            })
        );

        let uri = format!("/applications/{}", created["id"]);

        let foreign_patch = app
            .clone()
            .oneshot(request(
                "PATCH",
                &uri,
                Some(&ada_token),
                Some(json!({"status": "Offer"})),
            ))
            .await
            .unwrap();
        assert_eq!(foreign_patch.status(), StatusCode::FORBIDDEN);

        let ada_list = app
            .clone()
            .oneshot(request("GET", "/applications", Some(&ada_token), None))
            .await
            .unwrap();
        assert_eq!(body_json(ada_list).await, json!([]));

        let deleted = app
            .clone()
            .oneshot(request("DELETE", &uri, Some(&bill_token), None))
            .await
            .unwrap();
        assert_eq!(
            body_json(deleted).await,
            json!({"ok": true, "id": created["id"]})
        );

        let missing_patch = app
            .oneshot(request(
                "PATCH",
                &uri,
                Some(&bill_token),
                Some(json!({"status": "Offer"})),
            ))
            .await
            .unwrap();
        assert_eq!(missing_patch.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/applications")
                    .header(header::ORIGIN, ORIGIN)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            ORIGIN
        );
    }
}
