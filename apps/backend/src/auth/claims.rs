//! Identity claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Role granted to every freshly registered account.
pub const ROLE_USER: &str = "user";
/// Role required by the admin route group.
pub const ROLE_ADMIN: &str = "admin";

/// Claims embedded in every access token and, after validation, inserted
/// into request extensions by the authentication middleware. Minted once at
/// login from the current user record; a role change only takes effect on
/// the next login.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User id (users.id)
    pub sub: i64,
    pub email: String,
    pub role: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
