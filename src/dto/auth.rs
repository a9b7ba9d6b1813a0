//! Response returned to a client after a successful sign in.

use serde::{Deserialize, Serialize};

use crate::domain::user::AuthenticatedUser;

/// Token scheme advertised alongside every issued access token.
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Access token plus the identity of the user it was issued for.
///
/// The token itself is issued by the authentication service; this type only
/// carries it back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AuthResponse {
    pub fn new(
        access_token: impl Into<String>,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            token: access_token.into(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Builds the response for a user verified by the authentication service.
    pub fn from_user(access_token: impl Into<String>, user: &AuthenticatedUser) -> Self {
        Self::new(
            access_token,
            user.id.clone(),
            user.first_name.clone(),
            user.last_name.clone(),
            user.email.clone(),
        )
    }
}
