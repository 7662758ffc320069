//! Password hashing and verification (bcrypt).
//!
//! The salt is generated per call and embedded in the digest, so hashing the
//! same plaintext twice yields different digests. The work factor comes from
//! [`Config::bcrypt_cost`](crate::config::Config).

use crate::{config::config, Error, Result};

pub fn hash(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, config().bcrypt_cost)
        .map_err(|e| Error::Unexpected(format!("password hashing failed: {e}")))
}

pub fn verify(plaintext: &str, digest: &str) -> Result<bool> {
    bcrypt::verify(plaintext, digest)
        .map_err(|e| Error::Unexpected(format!("password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_the_original_password() -> Result<()> {
        crate::tests::init_config();

        let digest = hash("secret1")?;
        assert!(verify("secret1", &digest)?);
        assert!(!verify("secret2", &digest)?);
        Ok(())
    }

    #[test]
    fn same_password_hashes_to_different_digests() -> Result<()> {
        crate::tests::init_config();

        let a = hash("secret1")?;
        let b = hash("secret1")?;
        assert_ne!(a, b);
        assert!(verify("secret1", &a)?);
        assert!(verify("secret1", &b)?);
        Ok(())
    }
}
