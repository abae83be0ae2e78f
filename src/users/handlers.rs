use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{CreateUser, DeleteStatus, PublicUser, UpdateUser},
        password::hash_password,
        repo::User,
    },
};

const MIN_PASSWORD_CHARS: usize = 8;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

fn public(user: User) -> PublicUser {
    PublicUser {
        id: user.id,
        name: user.name,
        registration_time: user.registration_time,
    }
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;
    Ok(Json(public(user)))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    let Json(body) = payload?;

    if body.name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".into()));
    }
    if body.password.chars().count() < MIN_PASSWORD_CHARS {
        warn!("password too short");
        return Err(ApiError::Validation("password is too short".into()));
    }

    let hash = hash_password(&body.password).map_err(|e| ApiError::Internal(e.to_string()))?;
    let user = User::create(&state.db, body.name.trim(), &hash)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("user already exists".into()),
            other => other,
        })?;

    info!(user_id = user.id, name = %user.name, "user created");
    Ok(Json(public(user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    let Json(body) = payload?;

    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".into()));
        }
    }

    let password_hash = match &body.password {
        Some(password) => {
            if password.chars().count() < MIN_PASSWORD_CHARS {
                warn!("password too short");
                return Err(ApiError::Validation("password is too short".into()));
            }
            Some(hash_password(password).map_err(|e| ApiError::Internal(e.to_string()))?)
        }
        None => None,
    };

    let user = User::update(
        &state.db,
        id,
        body.name.as_deref().map(str::trim),
        password_hash.as_deref(),
    )
    .await
    .map_err(|e| match ApiError::from(e) {
        ApiError::Conflict(_) => ApiError::Conflict("user already exists".into()),
        other => other,
    })?
    .ok_or_else(|| ApiError::NotFound("user not found".into()))?;

    info!(user_id = user.id, "user updated");
    Ok(Json(public(user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteStatus>, ApiError> {
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("user not found".into()));
    }

    info!(user_id = id, "user deleted");
    Ok(Json(DeleteStatus::deleted()))
}
