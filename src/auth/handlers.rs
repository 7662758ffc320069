use crate::{password, store::Db, store::UserPublic, token, Error, Result};

use super::{LoginResponse, LoginUser, RegisterResponse, RegisterUser};

/// bcrypt is deliberately slow, so both handlers push the hash work onto the
/// blocking pool instead of stalling the runtime.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Unexpected(format!("blocking task failed: {e}")))?
}

pub async fn register(args: RegisterUser, db: Db) -> Result<RegisterResponse> {
    let user = run_blocking(move || db.register(&args.username, &args.email, &args.password)).await?;

    Ok(RegisterResponse {
        message: "User registered successfully".into(),
        user,
    })
}

pub async fn login(args: LoginUser, db: Db) -> Result<LoginResponse> {
    if args.email.is_empty() || args.password.is_empty() {
        return Err(Error::Validation("Email and password are required".into()));
    }

    // Unknown email and wrong password answer identically, so the endpoint
    // cannot be used to probe which emails are registered.
    let user = run_blocking(move || {
        let user = db
            .find_by_email(&args.email)
            .ok_or(Error::InvalidCredentials)?;
        if !password::verify(&args.password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }
        Ok(user)
    })
    .await?;

    let token = token::issue(&user)?;

    Ok(LoginResponse {
        message: "Login successful".into(),
        token,
        user: UserPublic::from(&user),
    })
}
