//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and verifying signed session tokens.
///
/// The service is stateless: a token is self-contained and carries the
/// user id and email as claims. There is no revocation store.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed session token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's normalized email address
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(DomainError)` - Token generation failed
    pub fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims =
            Claims::new_session_token(user_id, email.to_string(), self.config.expiry_days);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is invalid, expired, or malformed
    pub fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    _ => DomainError::Token(TokenError::InvalidToken),
                }
            })?;

        Ok(token_data.claims)
    }
}
