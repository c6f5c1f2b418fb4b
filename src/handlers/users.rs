use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{extract::State, response::Json};
use model::entities::user;
use sea_orm::EntityTrait;
use serde::Serialize;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// User response model. The password column is never serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    debug!("Fetching all users from database");

    let users = user::Entity::find().all(&state.db).await?;
    info!("Retrieved {} users", users.len());

    let responses = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}
