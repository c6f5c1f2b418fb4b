use crate::handlers::{
    favorites::{
        add_people_favorite, add_planet_favorite, delete_people_favorite, delete_planet_favorite,
        get_user_favorites,
    },
    health::health_check,
    people::{create_person, get_people, get_person},
    planets::{get_planet, get_planets},
    users::get_users,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // People routes
        .route("/people", get(get_people))
        .route("/people", post(create_person))
        .route("/people/:people_id", get(get_person))
        // Planet routes
        .route("/planets", get(get_planets))
        .route("/planets/:planet_id", get(get_planet))
        // User routes
        .route("/users", get(get_users))
        .route("/user/:user_id/favorites", get(get_user_favorites))
        // Favorite routes
        .route(
            "/favorite/user/:user_id/planet/:planet_id",
            post(add_planet_favorite),
        )
        .route(
            "/favorite/user/:user_id/people/:people_id",
            post(add_people_favorite),
        )
        .route(
            "/favorite/user/:user_id/planet/:planet_id",
            delete(delete_planet_favorite),
        )
        .route(
            "/favorite/user/:user_id/people/:people_id",
            delete(delete_people_favorite),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
