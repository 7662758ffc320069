use axum::{
    extract::{Extension, FromRequestParts},
    http::{header, request::Parts},
};
use serde::Serialize;

use crate::{store::Db, token, Error};

#[derive(Clone, Debug, FromRequestParts)]
pub struct BaseParams {
    pub ctx: Ctx,
    #[from_request(via(Extension))]
    pub db: Db,
}

/// The identity resolved from a verified bearer token. This is the only
/// source of "current user" for handlers; identities in a request body or
/// path are never trusted.
#[derive(Debug, Serialize, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub user: CurrentUser,
}

impl Ctx {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| Error::Unauthorized("Access token required".into()))?;

        let claims = token::verify(token)?;

        Ok(Self {
            user: CurrentUser {
                id: claims.id,
                username: claims.username,
                email: claims.email,
            },
        })
    }
}
