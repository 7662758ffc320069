use axum::extract::FromRef;

use crate::store::Db;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub db: Db,
}
