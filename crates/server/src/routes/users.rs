//! `/users` handlers. Each one runs a single statement against the
//! injected connection; input errors are rejected before storage is touched.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::user::{self, UserSummary};
use service::{
    errors::ServiceError,
    user_service::{self, CreateUserInput},
};
use tracing::{debug, error, info};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, without pins", body = [crate::openapi::UserSummaryDoc]),
        (status = 405, description = "Method Not Allowed"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserSummary>>, JsonApiError> {
    let users = user_service::list_users(&state.db).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = crate::openapi::UserSummaryDoc),
        (status = 400, description = "Missing or invalid id", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 405, description = "Method Not Allowed"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserSummary>, JsonApiError> {
    let id = parse_user_id(&raw_id)?;
    let found = user_service::get_user(&state.db, id).await?;
    Ok(Json(found))
}

/// `GET /users/` with nothing after the slash.
pub async fn missing_user_id() -> JsonApiError {
    JsonApiError::bad_request("Missing ID")
}

/// Parse everything after `/users/` as a non-negative integer; extra segments are invalid.
pub fn parse_user_id(raw: &str) -> Result<i64, JsonApiError> {
    if raw.is_empty() {
        return Err(JsonApiError::bad_request("Missing ID"));
    }
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| JsonApiError::bad_request("Invalid ID"))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = crate::openapi::CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid body, name or pin", body = crate::openapi::ErrorBody),
        (status = 405, description = "Method Not Allowed"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    // decoded by hand so shape errors and missing content-type both map to 400
    let input: CreateUserInput = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "rejected create user body");
        JsonApiError::bad_request("Invalid JSON body")
    })?;

    match user_service::create_user(&state.db, input).await {
        Ok(created) => {
            info!(user_id = created.id, "created user");
            Ok((StatusCode::CREATED, Json(created)))
        }
        Err(ServiceError::Db(detail)) => {
            error!(error = %detail, "create user failed");
            Err(JsonApiError::internal("Failed to create user"))
        }
        Err(e) => Err(e.into()),
    }
}
