use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        monster::CreateMonsterDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError,
        extract::{ValidatedJson, ValidatedPath},
        model::{monster::CreateMonsterParam, user::CreateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users with their monsters resolved.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "List of users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dto: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a user by ID.
///
/// Answers a list holding the user, or an empty list when no user matches.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Matching users (empty when not found)", body = Vec<UserDto>),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_by_id(id).await?;

    let dto: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a user by name and password.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user by ID.
///
/// Removes every user matching the ID; the owned monsters are kept. Answers the
/// same confirmation whether or not anything matched.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, "User deleted"))
}

/// Create a monster owned by the user.
#[utoipa::path(
    post,
    path = "/users/{id}/monsters",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = CreateMonsterDto,
    responses(
        (status = 200, description = "Updated user with monsters resolved", body = UserDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_monster(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<CreateMonsterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .add_monster(id, CreateMonsterParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
