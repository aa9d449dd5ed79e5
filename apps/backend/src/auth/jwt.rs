use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Mint a signed access token for the given identity.
///
/// Embeds `{sub, email, role}` plus issued-at and expiry instants; the
/// lifetime comes from `security.token_ttl_secs`. Nothing else goes into
/// the payload, in particular no credential hash.
pub fn mint_access_token(
    sub: i64,
    email: &str,
    role: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl_secs;

    let claims = Claims {
        sub,
        email: email.to_string(),
        role: role.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token and return its claims.
///
/// Stateless apart from the clock and the static secret; never touches
/// storage. Failure kinds stay distinct for diagnostics even though every
/// one of them surfaces as HTTP 401:
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Bad signature → `AppError::UnauthorizedInvalidJwt`
/// - Undecodable token → `AppError::UnauthorizedMalformedJwt`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::unauthorized_invalid_jwt(),
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::unauthorized_malformed_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}
