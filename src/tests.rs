#[cfg(test)]
mod integration_tests {
    use crate::handlers::people::CreatePersonRequest;
    use crate::test_utils::test_utils::{seed_person, seed_planet, seed_user, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_health_check() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_get_people_empty() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people").await;

        // No rows yet: still a 200 with an empty array, not a 404.
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_person_then_get() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = CreatePersonRequest {
            name: "Luke".to_string(),
            birth_year: Some("19BBY".to_string()),
            gender: None,
        };

        let response = server.post("/people").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["name"], "Luke");
        assert_eq!(body["birth_year"], "19BBY");
        assert_eq!(body["gender"], Value::Null);
        let person_id = body["id"].as_i64().unwrap();
        assert!(person_id > 0);

        // Reading the row back returns the same fields.
        let response = server.get(&format!("/people/{}", person_id)).await;
        response.assert_status(StatusCode::OK);
        let fetched: Value = response.json();
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_get_people_lists_created_rows() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        seed_person(&state.db, "Obi-Wan Kenobi").await;
        seed_person(&state.db, "Leia Organa").await;

        let response = server.get("/people").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert!(body.iter().any(|p| p["name"] == "Obi-Wan Kenobi"));
        assert!(body.iter().any(|p| p["name"] == "Leia Organa"));
    }

    #[tokio::test]
    async fn test_get_person_not_found() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/people/99999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Person not found"}));
    }

    #[tokio::test]
    async fn test_create_person_missing_name_rejected() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // `name` is required by the typed body schema; the extractor
        // rejects the request before anything reaches the database.
        let response = server
            .post("/people")
            .json(&json!({"birth_year": "41BBY"}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = server.get("/people").await;
        let body: Value = response.json();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_get_planets() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/planets").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!([]));

        let tatooine = seed_planet(&state.db, "Tatooine").await;

        let response = server.get("/planets").await;
        response.assert_status(StatusCode::OK);
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "Tatooine");
        assert_eq!(body[0]["id"], tatooine.id);
    }

    #[tokio::test]
    async fn test_get_planet_by_id() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let hoth = seed_planet(&state.db, "Hoth").await;

        let response = server.get(&format!("/planets/{}", hoth.id)).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["name"], "Hoth");
        assert_eq!(body["climate"], "temperate");
        assert_eq!(body["terrain"], Value::Null);
    }

    #[tokio::test]
    async fn test_get_planet_not_found() {
        let (app, _state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/planets/99999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Planet not found"}));
    }

    #[tokio::test]
    async fn test_get_users_excludes_password() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        seed_user(&state.db, "luke@rebellion.example").await;

        let response = server.get("/users").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["email"], "luke@rebellion.example");
        assert_eq!(body[0]["is_active"], true);
        assert!(body[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_get_user_favorites_empty_is_404() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "han@rebellion.example").await;

        // An existing user with zero favorites...
        let response = server.get(&format!("/user/{}/favorites", user.id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "favorites not found"}));

        // ...is indistinguishable from a user that does not exist.
        let response = server.get("/user/99999/favorites").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "favorites not found"}));
    }

    #[tokio::test]
    async fn test_add_planet_favorite() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "leia@rebellion.example").await;
        let planet = seed_planet(&state.db, "Alderaan").await;

        let response = server
            .post(&format!("/favorite/user/{}/planet/{}", user.id, planet.id))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["planet_id"], planet.id);
        assert_eq!(body["people_id"], Value::Null);
        assert!(body["id"].as_i64().unwrap() > 0);

        // The row shows up in the user's favorites.
        let response = server.get(&format!("/user/{}/favorites", user.id)).await;
        response.assert_status(StatusCode::OK);
        let favorites: Vec<Value> = response.json();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0]["planet_id"], planet.id);
    }

    #[tokio::test]
    async fn test_add_planet_favorite_missing_rows() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "lando@rebellion.example").await;
        let planet = seed_planet(&state.db, "Bespin").await;

        // Planet missing
        let response = server
            .post(&format!("/favorite/user/{}/planet/99999", user.id))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "User or planet not found"}));

        // User missing
        let response = server
            .post(&format!("/favorite/user/99999/planet/{}", planet.id))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "User or planet not found"}));
    }

    #[tokio::test]
    async fn test_add_people_favorite() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "rey@resistance.example").await;
        let person = seed_person(&state.db, "Chewbacca").await;

        let response = server
            .post(&format!("/favorite/user/{}/people/{}", user.id, person.id))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["user_id"], user.id);
        assert_eq!(body["people_id"], person.id);
        assert_eq!(body["planet_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_add_people_favorite_missing_rows() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "finn@resistance.example").await;

        let response = server
            .post(&format!("/favorite/user/{}/people/99999", user.id))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "User or People not found"}));
    }

    #[tokio::test]
    async fn test_delete_planet_favorite_then_repeat() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "poe@resistance.example").await;
        let planet = seed_planet(&state.db, "Jakku").await;

        let path = format!("/favorite/user/{}/planet/{}", user.id, planet.id);
        server.post(&path).await.assert_status(StatusCode::CREATED);

        let response = server.delete(&path).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!({"success": "Favorite deleted"}));

        // The same delete again finds nothing.
        let response = server.delete(&path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Favorite not found"}));
    }

    #[tokio::test]
    async fn test_delete_favorite_removes_exactly_one() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "jyn@rebellion.example").await;
        let planet = seed_planet(&state.db, "Scarif").await;

        // Duplicate favorites are allowed; insert the same pair twice.
        let path = format!("/favorite/user/{}/planet/{}", user.id, planet.id);
        server.post(&path).await.assert_status(StatusCode::CREATED);
        server.post(&path).await.assert_status(StatusCode::CREATED);

        server.delete(&path).await.assert_status(StatusCode::OK);

        // One of the two rows survives the delete.
        let response = server.get(&format!("/user/{}/favorites", user.id)).await;
        response.assert_status(StatusCode::OK);
        let favorites: Vec<Value> = response.json();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0]["planet_id"], planet.id);
    }

    #[tokio::test]
    async fn test_delete_people_favorite() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "cassian@rebellion.example").await;
        let person = seed_person(&state.db, "K-2SO").await;

        let path = format!("/favorite/user/{}/people/{}", user.id, person.id);

        // Deleting before any favorite exists is a 404.
        let response = server.delete(&path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body, json!({"error": "Favorite not found"}));

        server.post(&path).await.assert_status(StatusCode::CREATED);

        let response = server.delete(&path).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body, json!({"success": "Favorite deleted"}));
    }

    #[tokio::test]
    async fn test_favorites_of_both_kinds_listed_together() {
        let (app, state) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let user = seed_user(&state.db, "mon@rebellion.example").await;
        let planet = seed_planet(&state.db, "Chandrila").await;
        let person = seed_person(&state.db, "Ahsoka Tano").await;

        server
            .post(&format!("/favorite/user/{}/planet/{}", user.id, planet.id))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post(&format!("/favorite/user/{}/people/{}", user.id, person.id))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get(&format!("/user/{}/favorites", user.id)).await;
        response.assert_status(StatusCode::OK);
        let favorites: Vec<Value> = response.json();
        assert_eq!(favorites.len(), 2);
        assert!(
            favorites
                .iter()
                .any(|f| f["planet_id"] == planet.id && f["people_id"] == Value::Null)
        );
        assert!(
            favorites
                .iter()
                .any(|f| f["people_id"] == person.id && f["planet_id"] == Value::Null)
        );
    }
}
