use serde::{Deserialize, Serialize};

/// Placeholder user record. No field is validated and nothing persists it;
/// handlers only echo it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
