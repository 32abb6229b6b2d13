//! Shared domain models.

use serde::{Deserialize, Serialize};

/// JWT claims embedded in access tokens.
///
/// `sub` is optional: tokens minted by the external issuer may omit the
/// subject claim. Such tokens still verify — callers that need an identity
/// must handle the `None` case themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: Option<String>,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub user_role: String,
}
