//! User account handlers.
//!
//! ```text
//! GET    /user/{userName}
//! POST   /user              {"userName":"alice1","firstName":"Alice","lastName":"Smith"}
//! POST   /user/{userName}   {"firstName":"Alice","lastName":"Smith"}
//! PUT    /user/{userName}   {"firstName":"Alicia","lastName":"Smith"}
//! DELETE /user/{userName}
//! ```
//!
//! Names arrive unvalidated; the service applies the naming rules and a
//! missing field is reported as an invalid (empty) name.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// User representation returned by every user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Storage-assigned identifier.
    pub user_id: i64,
    /// Unique user name.
    pub user_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id().get(),
            user_name: user.user_name().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
        }
    }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    /// Requested user name; fixed once created.
    pub user_name: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(body: CreateUserBody) -> Self {
        Self {
            user_name: body.user_name,
            first_name: body.first_name,
            last_name: body.last_name,
        }
    }
}

/// Body carrying the mutable profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
}

impl From<ProfileBody> for UpdateUserRequest {
    fn from(body: ProfileBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
        }
    }
}

/// Fetch a user by user name.
#[utoipa::path(
    get,
    path = "/user/{userName}",
    params(("userName" = String, Path, description = "Unique user name")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid user name", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{userName}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get_user(&path.into_inner()).await?;
    Ok(web::Json(user.into()))
}

/// Create a user and its empty journal.
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid name", body = Error),
        (status = 409, description = "User name taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Create a user whose name is taken from the path.
#[utoipa::path(
    post,
    path = "/user/{userName}",
    params(("userName" = String, Path, description = "Requested user name")),
    request_body = ProfileBody,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid name", body = Error),
        (status = 409, description = "User name taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createNamedUser"
)]
#[post("/user/{userName}")]
pub async fn create_named_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ProfileBody>,
) -> ApiResult<HttpResponse> {
    let ProfileBody {
        first_name,
        last_name,
    } = payload.into_inner();
    let request = CreateUserRequest {
        user_name: Some(path.into_inner()),
        first_name,
        last_name,
    };
    let user = state.users.create_user(request).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Replace a user's first and last name.
#[utoipa::path(
    put,
    path = "/user/{userName}",
    params(("userName" = String, Path, description = "Unique user name")),
    request_body = ProfileBody,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid name", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{userName}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ProfileBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users
        .update_user(&path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(user.into()))
}

/// Delete a user with its journal and entries.
#[utoipa::path(
    delete,
    path = "/user/{userName}",
    params(("userName" = String, Path, description = "Unique user name")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user name", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{userName}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
