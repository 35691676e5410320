/**
 * Password Hashing and Verification
 *
 * One-way hashing of plaintext passwords with bcrypt. Each hash embeds a
 * per-call random salt and the work factor, so verification needs nothing
 * beyond the stored hash itself.
 *
 * # Outcomes
 *
 * Verification distinguishes a simply-wrong password (`Mismatch`) from a
 * stored hash that cannot be processed (`Hash`). Callers map `Mismatch` to
 * "invalid credentials" and anything else to an internal failure; the client
 * never learns which case occurred.
 */

use thiserror::Error;

/// bcrypt truncates input beyond this many bytes; longer passwords are
/// rejected up front instead of being silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The password is empty or longer than [`MAX_PASSWORD_BYTES`].
    ///
    /// Maps to a request-level 400, not a server failure.
    #[error("password must be between 1 and {MAX_PASSWORD_BYTES} bytes")]
    InvalidLength,

    /// The password does not match the stored hash.
    #[error("password mismatch")]
    Mismatch,

    /// bcrypt failed to process the input or the stored hash is malformed.
    #[error("hashing failed")]
    Hash(#[source] bcrypt::BcryptError),
}

/// Hash a plaintext password with the given bcrypt cost
///
/// # Errors
///
/// * [`PasswordError::InvalidLength`] - empty or over-long input
/// * [`PasswordError::Hash`] - bcrypt transform failure
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, PasswordError> {
    if plaintext.is_empty() || plaintext.len() > MAX_PASSWORD_BYTES {
        return Err(PasswordError::InvalidLength);
    }

    bcrypt::hash(plaintext, cost).map_err(PasswordError::Hash)
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// The comparison is constant time relative to the stored salt and work
/// factor (bcrypt recomputes the full transform either way).
///
/// # Errors
///
/// * [`PasswordError::Mismatch`] - the password is wrong
/// * [`PasswordError::Hash`] - the stored hash is malformed
pub fn verify_password(stored_hash: &str, plaintext: &str) -> Result<(), PasswordError> {
    match bcrypt::verify(plaintext, stored_hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(PasswordError::Mismatch),
        Err(err) => Err(PasswordError::Hash(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("s3cret", TEST_COST).unwrap();
        assert!(verify_password(&hash, "s3cret").is_ok());
    }

    #[test]
    fn test_wrong_password_is_mismatch() {
        let hash = hash_password("s3cret", TEST_COST).unwrap();
        assert_matches!(
            verify_password(&hash, "not-the-password"),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_embeds_random_salt() {
        let first = hash_password("s3cret", TEST_COST).unwrap();
        let second = hash_password("s3cret", TEST_COST).unwrap();
        assert_ne!(first, second);
        assert!(verify_password(&second, "s3cret").is_ok());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_matches!(
            hash_password("", TEST_COST),
            Err(PasswordError::InvalidLength)
        );
    }

    #[test]
    fn test_oversized_password_rejected() {
        let long = "x".repeat(MAX_PASSWORD_BYTES + 1);
        assert_matches!(
            hash_password(&long, TEST_COST),
            Err(PasswordError::InvalidLength)
        );
    }

    #[test]
    fn test_malformed_stored_hash_is_not_mismatch() {
        assert_matches!(
            verify_password("not-a-bcrypt-hash", "s3cret"),
            Err(PasswordError::Hash(_))
        );
    }
}
