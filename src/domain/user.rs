use serde::{Deserialize, Serialize};

/// Identity of a user verified by the external authentication service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
