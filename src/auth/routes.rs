use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use crate::{state::AppState, Result};

use super::{handlers, LoginUser, RegisterUser};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .with_state(state)
}

async fn register(
    State(AppState { db }): State<AppState>,
    Json(args): Json<RegisterUser>,
) -> Result<impl IntoResponse> {
    handlers::register(args, db)
        .await
        .map(|r| (StatusCode::CREATED, Json(r)))
}

async fn login(
    State(AppState { db }): State<AppState>,
    Json(args): Json<LoginUser>,
) -> Result<impl IntoResponse> {
    handlers::login(args, db).await.map(Json)
}
