use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{favorite, person, planet, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Favorite response model
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(model: favorite::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
            people_id: model.people_id,
        }
    }
}

/// Body returned after a favorite has been removed
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteDeletedResponse {
    pub success: String,
}

impl FavoriteDeletedResponse {
    fn deleted() -> Self {
        Self {
            success: "Favorite deleted".to_string(),
        }
    }
}

/// Get all favorites belonging to a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = Vec<FavoriteResponse>),
        (status = 404, description = "No favorites found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_user_favorites(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    debug!("Fetching favorites for user {}", user_id);

    let favorites = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?;

    // A user with zero favorites and a user that does not exist both land
    // here; the 404 does not distinguish them.
    if favorites.is_empty() {
        warn!("No favorites found for user {}", user_id);
        return Err(ApiError::not_found("favorites not found"));
    }

    info!("Retrieved {} favorites for user {}", favorites.len(), user_id);
    let responses = favorites.into_iter().map(FavoriteResponse::from).collect();
    Ok(Json(responses))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 201, description = "Favorite created successfully", body = FavoriteResponse),
        (status = 404, description = "User or planet not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn add_planet_favorite(
    Path((user_id, planet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    debug!("Adding planet {} to favorites of user {}", planet_id, user_id);

    let user_row = user::Entity::find_by_id(user_id).one(&state.db).await?;
    let planet_row = planet::Entity::find_by_id(planet_id).one(&state.db).await?;
    if user_row.is_none() || planet_row.is_none() {
        warn!("User {} or planet {} not found", user_id, planet_id);
        return Err(ApiError::not_found("User or planet not found"));
    }

    let new_favorite = favorite::ActiveModel {
        user_id: Set(user_id),
        planet_id: Set(Some(planet_id)),
        ..Default::default()
    };

    let favorite_model = new_favorite.insert(&state.db).await?;
    info!(
        "Favorite created with ID: {} (user {}, planet {})",
        favorite_model.id, user_id, planet_id
    );

    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponse::from(favorite_model)),
    ))
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 201, description = "Favorite created successfully", body = FavoriteResponse),
        (status = 404, description = "User or person not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn add_people_favorite(
    Path((user_id, people_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    debug!("Adding person {} to favorites of user {}", people_id, user_id);

    let user_row = user::Entity::find_by_id(user_id).one(&state.db).await?;
    let person_row = person::Entity::find_by_id(people_id).one(&state.db).await?;
    if user_row.is_none() || person_row.is_none() {
        warn!("User {} or person {} not found", user_id, people_id);
        return Err(ApiError::not_found("User or People not found"));
    }

    let new_favorite = favorite::ActiveModel {
        user_id: Set(user_id),
        people_id: Set(Some(people_id)),
        ..Default::default()
    };

    let favorite_model = new_favorite.insert(&state.db).await?;
    info!(
        "Favorite created with ID: {} (user {}, person {})",
        favorite_model.id, user_id, people_id
    );

    Ok((
        StatusCode::CREATED,
        Json(FavoriteResponse::from(favorite_model)),
    ))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Favorite deleted successfully", body = FavoriteDeletedResponse),
        (status = 404, description = "Favorite not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn delete_planet_favorite(
    Path((user_id, planet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<FavoriteDeletedResponse>, ApiError> {
    debug!(
        "Removing planet {} from favorites of user {}",
        planet_id, user_id
    );

    // First match only; duplicate rows survive a single delete.
    let favorite_model = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(favorite::Column::PlanetId.eq(planet_id))
        .one(&state.db)
        .await?;

    match favorite_model {
        Some(favorite_model) => {
            favorite_model.delete(&state.db).await?;
            info!(
                "Favorite deleted (user {}, planet {})",
                user_id, planet_id
            );
            Ok(Json(FavoriteDeletedResponse::deleted()))
        }
        None => {
            warn!(
                "Favorite not found for user {} and planet {}",
                user_id, planet_id
            );
            Err(ApiError::not_found("Favorite not found"))
        }
    }
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/people/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Favorite deleted successfully", body = FavoriteDeletedResponse),
        (status = 404, description = "Favorite not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn delete_people_favorite(
    Path((user_id, people_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<FavoriteDeletedResponse>, ApiError> {
    debug!(
        "Removing person {} from favorites of user {}",
        people_id, user_id
    );

    let favorite_model = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(favorite::Column::PeopleId.eq(people_id))
        .one(&state.db)
        .await?;

    match favorite_model {
        Some(favorite_model) => {
            favorite_model.delete(&state.db).await?;
            info!(
                "Favorite deleted (user {}, person {})",
                user_id, people_id
            );
            Ok(Json(FavoriteDeletedResponse::deleted()))
        }
        None => {
            warn!(
                "Favorite not found for user {} and person {}",
                user_id, people_id
            );
            Err(ApiError::not_found("Favorite not found"))
        }
    }
}
