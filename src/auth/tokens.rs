/**
 * Token Issuance and Validation
 *
 * Self-contained HS256-signed JWTs carrying the authenticated identity and
 * an absolute expiry instant. Tokens are statelessly verifiable: nothing is
 * persisted and nothing can be revoked early; a token dies by elapsed time
 * alone.
 *
 * # Keys
 *
 * [`TokenKeys`] is built once at startup from the configured secret and
 * passed by reference to the issuing handler and the middleware gate. There
 * is no ambient/global secret lookup.
 *
 * # Expiry
 *
 * Expiry is checked manually with strict `now < exp` and zero leeway, so a
 * token issued with `ttl = 0` is already expired at issuance. The library's
 * own exp validation is disabled because its comparison is inclusive.
 *
 * # Algorithm Confinement
 *
 * Validation is pinned to HS256. Unsigned (`alg=none`) or differently-signed
 * tokens fail signature validation rather than being accepted.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims embedded in every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id (account UUID) as a string
    pub sub: String,
    /// Login name of the identity
    pub username: String,
    /// Issued-at time (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Token parse/issue failures
///
/// All parse variants surface to clients uniformly as 401; they stay
/// distinct here so the gate can log which case occurred.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature does not verify against the server secret, or the
    /// token claims a different signing algorithm.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token is well-formed and correctly signed but past its expiry.
    #[error("token is expired")]
    Expired,

    /// The token structure cannot be decoded at all.
    #[error("token is malformed")]
    Malformed,

    /// Signing a new token failed (never caused by client input).
    #[error("token signing failed")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Process-wide token signing/verification material
///
/// Immutable after construction. Holds the derived encoding/decoding keys,
/// the pinned validation rules and the configured token lifetime.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenKeys {
    /// Derive keys from the server secret with the given token lifetime
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is compared manually with strict `now < exp`
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Configured token lifetime in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a signed token for an identity
    ///
    /// The expiry is `issued_at + ttl`; nothing is persisted.
    ///
    /// # Errors
    ///
    /// [`TokenError::Signing`] if the JWT library fails to sign, which does
    /// not depend on client input and maps to a 500.
    pub fn issue(&self, identity_id: Uuid, username: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token's signature and expiry, returning its claims
    ///
    /// # Errors
    ///
    /// * [`TokenError::InvalidSignature`] - wrong secret or wrong algorithm
    /// * [`TokenError::Expired`] - `now >= exp`
    /// * [`TokenError::Malformed`] - undecodable structure
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            use jsonwebtoken::errors::ErrorKind;
            match err.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        // strict comparison: a token is valid only while now < exp
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const TTL: i64 = 3600;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret", TTL)
    }

    #[test]
    fn test_issue_then_parse_round_trip() {
        let keys = keys();
        let id = Uuid::new_v4();

        let token = keys.issue(id, "ann").unwrap();
        let claims = keys.parse(&token).unwrap();

        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.username, "ann");
        assert_eq!(claims.exp, claims.iat + TTL);
    }

    #[test]
    fn test_zero_ttl_token_is_expired_immediately() {
        let keys = TokenKeys::new("test-secret", 0);
        let token = keys.issue(Uuid::new_v4(), "ann").unwrap();

        assert_matches!(keys.parse(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrongly_signed_token_rejected() {
        let token = TokenKeys::new("other-secret", TTL)
            .issue(Uuid::new_v4(), "ann")
            .unwrap();

        assert_matches!(keys().parse(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        assert_matches!(keys().parse("not.a.token"), Err(TokenError::Malformed));
        assert_matches!(keys().parse(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4(), "ann").unwrap();

        // swap the payload segment for one signed under a different secret
        let other = TokenKeys::new("other-secret", TTL)
            .issue(Uuid::new_v4(), "mallory")
            .unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let tampered = parts.join(".");

        assert!(keys.parse(&tampered).is_err());
    }
}
