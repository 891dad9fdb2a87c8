//! Axum HTTP handlers for the users resource
//!
//! Every handler is a stub: responses echo their input or return a
//! placeholder so clients can integrate against the API shape before the
//! storage layer exists. Nothing is persisted and no input is validated.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::model::User;

/// Known roles are `intern`, `employee` and `admin`, but the filter is not
/// applied yet. Unknown values are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserRef {
    pub id: String,
}

pub async fn list_users(Query(query): Query<ListUsersQuery>) -> Json<Vec<User>> {
    if let Some(role) = query.role.as_deref() {
        debug!(role, "role filter requested but not implemented");
    }
    Json(Vec::new())
}

pub async fn get_user(Path(id): Path<String>) -> Json<UserRef> {
    Json(UserRef { id })
}

pub async fn create_user(Json(user): Json<User>) -> Json<User> {
    Json(user)
}

/// Merges the patch over `{"id": id}` without checking that its keys are
/// legal user fields. A patch that carries its own `id` wins.
pub async fn update_user(
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Json<Value> {
    let mut merged = Map::new();
    merged.insert("id".to_string(), Value::String(id));
    merged.extend(patch);
    Json(Value::Object(merged))
}

pub async fn delete_user(Path(id): Path<String>) -> Json<UserRef> {
    Json(UserRef { id })
}
