use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorBody { pub error: String }

/// Stored user as returned by `POST /users`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UserDoc {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub pin: i32,
    #[schema(example = "2024-01-01T12:00:00")]
    pub created_at: String,
}

/// Read projection; the pin is never listed.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummaryDoc {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[schema(example = "2024-01-01T12:00:00")]
    pub created_at: String,
}

/// Unknown fields are rejected.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    #[schema(example = "Bell")]
    pub name: String,
    #[schema(example = "1234")]
    pub pin: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            UserDoc,
            UserSummaryDoc,
            CreateUserRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users")
    )
)]
pub struct ApiDoc;
