pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sqlx::SqlitePool;

use routes::activities;

// API routes only; the root redirect and static file mount stay in main so
// tests can drive the API without a frontend directory on disk.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .with_state(pool)
}
