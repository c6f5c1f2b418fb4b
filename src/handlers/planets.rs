use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use model::entities::planet;
use sea_orm::EntityTrait;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

/// Planet response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
            population: model.population,
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<PlanetResponse>),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    debug!("Fetching all planets from database");

    let planets = planet::Entity::find().all(&state.db).await?;

    let responses = planets.into_iter().map(PlanetResponse::from).collect();
    Ok(Json(responses))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = PlanetResponse),
        (status = 404, description = "Planet not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_planet(
    Path(planet_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PlanetResponse>, ApiError> {
    debug!("Fetching planet with ID: {}", planet_id);

    match planet::Entity::find_by_id(planet_id).one(&state.db).await? {
        Some(planet_model) => Ok(Json(PlanetResponse::from(planet_model))),
        None => {
            warn!("Planet with ID {} not found", planet_id);
            Err(ApiError::not_found("Planet not found"))
        }
    }
}
