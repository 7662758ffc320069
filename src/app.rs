use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{auth, notes, state::AppState, store::Db};

pub fn create_app(db: Db) -> Router {
    let state = AppState { db: db.clone() };

    Router::new()
        .route("/api/health", get(health))
        .merge(auth::router(state.clone()))
        .merge(notes::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(Extension(db)),
        )
}

async fn health(Extension(db): Extension<Db>) -> impl IntoResponse {
    let (users, notes) = db.counts();

    Json(json!({
        "status": "OK",
        "message": "Notes API is running",
        "timestamp": chrono::Utc::now(),
        "users": users,
        "notes": notes,
    }))
}

#[cfg(test)]
mod tests {
    use crate::{store::Db, Result};

    #[tokio::test]
    async fn health_reports_live_counts() -> Result<()> {
        crate::tests::init_config();
        let db = Db::default();
        db.register("alice", "alice@x.com", "secret1")?;
        db.create_note(1, "first", "1")?;
        db.create_note(1, "second", "2")?;
        let server = crate::tests::test_server(db);

        let response = server.get("/api/health").await;

        assert_eq!(response.status_code(), 200);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["users"], 1);
        assert_eq!(body["notes"], 2);
        Ok(())
    }
}
