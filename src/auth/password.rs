use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password with bcrypt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret").unwrap();
        assert_ne!(hash, "s3cret");
        assert!(verify_password("s3cret", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
