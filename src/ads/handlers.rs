use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    ads::{
        dto::{
            AdvertisementDetails, AdvertisementSummary, CreateAdvertisement, DeleteStatus,
            UpdateAdvertisement,
        },
        repo::Advertisement,
        validate,
    },
    error::ApiError,
    state::AppState,
    users::repo::User,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", post(create_advertisement))
        .route(
            "/api/:id",
            get(get_advertisement)
                .patch(update_advertisement)
                .delete(delete_advertisement),
        )
}

#[instrument(skip(state))]
pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AdvertisementDetails>, ApiError> {
    let ad = Advertisement::get_with_owner(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("there is no such record".into()))?;

    Ok(Json(AdvertisementDetails {
        id: ad.id,
        heading: ad.heading,
        description: ad.description,
        date_of_creation: ad.date_of_creation,
        user_name: ad.user_name,
        id_user: ad.user_id,
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_advertisement(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdvertisement>, JsonRejection>,
) -> Result<Json<AdvertisementSummary>, ApiError> {
    let Json(body) = payload?;
    validate::check_create(&body)?;

    if !User::exists(&state.db, body.user_id).await? {
        warn!(user_id = body.user_id, "advertisement references unknown user");
        return Err(ApiError::Validation("there is no such user".into()));
    }

    let ad = Advertisement::create(&state.db, &body.heading, &body.description, body.user_id)
        .await?;

    info!(id = ad.id, user_id = ad.user_id, "advertisement created");
    Ok(Json(AdvertisementSummary {
        id: ad.id,
        heading: ad.heading,
        description: ad.description,
        user_id: ad.user_id,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_advertisement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateAdvertisement>, JsonRejection>,
) -> Result<Json<AdvertisementSummary>, ApiError> {
    let Json(body) = payload?;
    validate::check_update(&body)?;

    if let Some(user_id) = body.user_id {
        if !User::exists(&state.db, user_id).await? {
            warn!(user_id, "update references unknown user");
            return Err(ApiError::Validation("there is no such user".into()));
        }
    }

    let ad = Advertisement::update(&state.db, id, &body)
        .await?
        .ok_or_else(|| ApiError::NotFound("there is no such record".into()))?;

    info!(id = ad.id, "advertisement updated");
    Ok(Json(AdvertisementSummary {
        id: ad.id,
        heading: ad.heading,
        description: ad.description,
        user_id: ad.user_id,
    }))
}

#[instrument(skip(state))]
pub async fn delete_advertisement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteStatus>, ApiError> {
    if !Advertisement::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("there is no such record".into()));
    }

    info!(id, "advertisement deleted");
    Ok(Json(DeleteStatus::deleted()))
}
