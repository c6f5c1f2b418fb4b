use sea_orm::DatabaseConnection;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::error::ErrorBody;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::people::get_people,
        crate::handlers::people::create_person,
        crate::handlers::people::get_person,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::users::get_users,
        crate::handlers::favorites::get_user_favorites,
        crate::handlers::favorites::add_planet_favorite,
        crate::handlers::favorites::add_people_favorite,
        crate::handlers::favorites::delete_planet_favorite,
        crate::handlers::favorites::delete_people_favorite,
    ),
    components(
        schemas(
            ErrorBody,
            HealthResponse,
            crate::handlers::people::CreatePersonRequest,
            crate::handlers::people::PersonResponse,
            crate::handlers::planets::PlanetResponse,
            crate::handlers::users::UserResponse,
            crate::handlers::favorites::FavoriteResponse,
            crate::handlers::favorites::FavoriteDeletedResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "people", description = "Character records"),
        (name = "planets", description = "Planet records"),
        (name = "users", description = "Blog users and their favorites"),
        (name = "favorites", description = "Favorite join rows between users and people or planets"),
    ),
    info(
        title = "Holocron API",
        description = "Star Wars blog backend: people, planets, users and favorites",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
