//! NomeUsuario API handlers
//!
//! CRUD over the single user table. Not-found is checked here, before any
//! write, so the repository never has to decide what a missing id means.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::{debug, info};

use super::dto::{UserDto, UserRequest};
use crate::domain::UserRepository;
use crate::interfaces::http::common::{ApiError, ValidatedJson};

/// Route prefix of the user resource
pub const USERS_PATH: &str = "/api/nomeusuarios";

pub const USER_UPDATED: &str = "Usuário atualizado com sucesso.";
pub const USER_DELETED: &str = "Usuário removido com sucesso.";

#[derive(Clone)]
pub struct UserHandlerState {
    pub repository: Arc<dyn UserRepository>,
}

impl UserHandlerState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

/// Lista todos os usuários
///
/// Returns every registered user; an empty list is still a 200.
#[utoipa::path(
    get,
    path = "/api/nomeusuarios",
    tag = "NomeUsuarios",
    responses(
        (status = 200, description = "Usuários encontrados com sucesso", body = Vec<UserDto>)
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.repository.list_all().await?;
    debug!("Listing {} users", users.len());
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Busca um usuário por ID
#[utoipa::path(
    get,
    path = "/api/nomeusuarios/{id}",
    tag = "NomeUsuarios",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Usuário encontrado com sucesso", body = UserDto),
        (status = 404, description = "Usuário não encontrado", body = String, content_type = "text/plain")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .repository
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(UserDto::from(user)))
}

/// Cria um novo usuário
///
/// The response carries a `Location` header pointing at the new resource.
#[utoipa::path(
    post,
    path = "/api/nomeusuarios",
    tag = "NomeUsuarios",
    request_body = UserRequest,
    responses(
        (status = 201, description = "Usuário criado com sucesso", body = UserDto,
            headers(("Location" = String, description = "URL of the created user"))),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Missing or empty required field")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserDto>), ApiError> {
    let user = state.repository.add(request.into()).await?;
    info!("Created user {}", user.id);

    let location = format!("{}/{}", USERS_PATH, user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(user)),
    ))
}

/// Atualiza um usuário
///
/// Replaces name, email, phone number and birth date. The id in the path
/// wins over any id sent in the body.
#[utoipa::path(
    put,
    path = "/api/nomeusuarios/{id}",
    tag = "NomeUsuarios",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Usuário atualizado com sucesso", body = String, content_type = "text/plain"),
        (status = 404, description = "Usuário não encontrado", body = String, content_type = "text/plain")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> Result<&'static str, ApiError> {
    let mut existing = state
        .repository
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    existing.apply(request.into());
    state.repository.update(existing).await?;
    info!("Updated user {}", id);

    Ok(USER_UPDATED)
}

/// Remove um usuário
#[utoipa::path(
    delete,
    path = "/api/nomeusuarios/{id}",
    tag = "NomeUsuarios",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Usuário removido com sucesso", body = String, content_type = "text/plain"),
        (status = 404, description = "Usuário não encontrado", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i32>,
) -> Result<&'static str, ApiError> {
    if state.repository.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.repository.delete(id).await?;
    info!("Deleted user {}", id);

    Ok(USER_DELETED)
}
