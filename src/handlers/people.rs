use crate::error::ApiError;
use crate::schemas::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::person;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

/// Request body for creating a new person
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePersonRequest {
    /// Character name
    pub name: String,
    /// In-universe birth year (e.g. "19BBY")
    pub birth_year: Option<String>,
    /// Character gender
    pub gender: Option<String>,
}

/// Person response model
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<person::Model> for PersonResponse {
    fn from(model: person::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            birth_year: model.birth_year,
            gender: model.gender,
        }
    }
}

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = Vec<PersonResponse>),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    debug!("Fetching all people from database");

    let people = person::Entity::find().all(&state.db).await?;
    info!("Retrieved {} people", people.len());

    let responses = people.into_iter().map(PersonResponse::from).collect();
    Ok(Json(responses))
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created successfully", body = PersonResponse),
        (status = 422, description = "Body is missing required fields"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    debug!("Creating person with name: {}", request.name);

    let new_person = person::ActiveModel {
        name: Set(request.name),
        birth_year: Set(request.birth_year),
        gender: Set(request.gender),
        ..Default::default()
    };

    let person_model = new_person.insert(&state.db).await?;
    info!(
        "Person created successfully with ID: {}, name: {}",
        person_model.id, person_model.name
    );

    Ok((StatusCode::CREATED, Json(PersonResponse::from(person_model))))
}

/// Get a specific person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person retrieved successfully", body = PersonResponse),
        (status = 404, description = "Person not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    )
)]
#[instrument]
pub async fn get_person(
    Path(people_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<PersonResponse>, ApiError> {
    debug!("Fetching person with ID: {}", people_id);

    match person::Entity::find_by_id(people_id).one(&state.db).await? {
        Some(person_model) => Ok(Json(PersonResponse::from(person_model))),
        None => {
            warn!("Person with ID {} not found", people_id);
            Err(ApiError::not_found("Person not found"))
        }
    }
}
