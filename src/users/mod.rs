//! The users resource
//!
//! Provides the routing table and request handlers for `/users`.

use axum::{routing::get, Router};

pub mod handlers;
pub mod model;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/{id}",
            get(handlers::get_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
}
