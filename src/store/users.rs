use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{password, Error, Result};

use super::Db;

/// A registered user. The password hash never leaves this module except
/// through [`Db::find_by_email`], which stays crate-private to the login path.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl Db {
    /// Registers a new user and returns its public projection.
    ///
    /// Ids are 1-based and monotonic; since users are never deleted,
    /// `users.len() + 1` is always fresh. Emails must be unique
    /// (case-sensitive exact match).
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<UserPublic> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(Error::Validation("All fields are required".into()));
        }

        // Hash outside the lock; bcrypt is deliberately slow. A duplicate
        // registration wastes one hash, the uniqueness check below still
        // runs under the lock.
        let password_hash = password::hash(password)?;

        let mut store = self.lock();
        if store.users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateEmail);
        }

        let user = User {
            id: store.users.len() as i64 + 1,
            username: username.into(),
            email: email.into(),
            password_hash,
            created_at: Utc::now(),
        };
        let public = UserPublic::from(&user);
        store.users.push(user);

        Ok(public)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.iter().find(|u| u.email == email).cloned()
    }
}
