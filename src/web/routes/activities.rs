use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::warn;

use crate::services::activities_service::{self, ActivityView};
use crate::services::signup_service::{self, SignupError};

pub async fn activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<String, ActivityView>>, (StatusCode, Json<Value>)> {
    match activities_service::list_activities(&pool).await {
        Ok(listing) => Ok(Json(listing)),
        Err(e) => {
            warn!("Activity listing failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Internal server error" })),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::signup(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| signup_error_response(&activity_name, e))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    signup_service::unregister(&pool, &activity_name, &query.email)
        .await
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| signup_error_response(&activity_name, e))
}

fn signup_error_response(activity_name: &str, err: SignupError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
        SignupError::AlreadySignedUp | SignupError::ActivityFull | SignupError::NotSignedUp => {
            StatusCode::BAD_REQUEST
        }
        SignupError::Db(e) => {
            warn!("Signup command failed for {}: {}", activity_name, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "detail": err.detail() })))
}
