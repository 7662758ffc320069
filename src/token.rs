//! Session token issue/verify.
//!
//! Tokens are self-contained HS256 JWTs carrying the user's identity and an
//! expiry 24 hours out (configurable). There is no server-side session table:
//! a token cannot be revoked before its expiry, logout is purely the client
//! discarding its copy.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::config, store::User, Error, Result};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

pub fn issue(user: &User) -> Result<String> {
    let now = chrono::Utc::now();
    let claims = Claims {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::seconds(config().token_ttl_secs)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config().jwt_secret.as_bytes()),
    )
    .map_err(|e| Error::Unexpected(format!("token signing failed: {e}")))
}

pub fn verify(token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config().jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            Error::Unauthorized("Token expired".into())
        }
        _ => Error::Forbidden("Invalid token".into()),
    })
}
