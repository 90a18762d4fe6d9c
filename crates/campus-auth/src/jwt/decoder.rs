//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use campus_core::config::auth::AuthConfig;
use campus_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;
        validation.set_required_spec_claims(&["exp", "sub", "iat"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use campus_core::error::ErrorKind;
    use campus_core::types::id::UserId;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_access_ttl_minutes: 30,
        }
    }

    #[test]
    fn test_round_trip_preserves_subject() {
        let cfg = config("a-long-enough-test-secret");
        let token = JwtEncoder::new(&cfg)
            .generate_access_token(UserId::new(7))
            .unwrap();
        let claims = JwtDecoder::new(&cfg)
            .decode_access_token(&token.token)
            .unwrap();
        assert_eq!(claims.user_id().unwrap(), UserId::new(7));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token = JwtEncoder::new(&config("signing-secret-one-xxxx"))
            .generate_access_token(UserId::new(1))
            .unwrap();
        let err = JwtDecoder::new(&config("signing-secret-two-xxxx"))
            .decode_access_token(&token.token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_is_unauthorized() {
        let err = JwtDecoder::new(&config("whatever-secret-value"))
            .decode_access_token("not.a.jwt")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = AuthConfig {
            jwt_secret: "expiry-test-secret-value".to_string(),
            jwt_access_ttl_minutes: 0,
        };
        let claims = Claims {
            sub: "3".to_string(),
            iat: 1_000,
            exp: 2_000,
            jti: uuid::Uuid::new_v4(),
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap();
        let err = JwtDecoder::new(&cfg).decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }
}
