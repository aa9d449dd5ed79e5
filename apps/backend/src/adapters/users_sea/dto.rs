//! Write-side DTOs for the users adapter.

/// Fields required to insert a user row. `password_hash` is the Argon2 PHC
/// string, never the plaintext.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}
