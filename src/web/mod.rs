//! HTTP interface.
//!
//! Axum handlers bind query strings and forms, run validation, and hand the
//! result to the controllers. Whatever [`View`] a controller picks is turned
//! into a response by [`Rendered`].

pub mod binding;
pub mod controllers;
mod error;
pub mod forms;
mod handlers;
pub mod view;

pub use binding::{BindingResult, FieldError};
pub use view::{Rendered, View, ViewModel};

use crate::services::Services;
use axum::{Router, routing::get};
use controllers::{OwnerController, PetController, VetController, VisitController};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Controllers shared by every request
pub struct AppState {
    /// Owner pages
    pub owners: OwnerController,
    /// Pet pages
    pub pets: PetController,
    /// Visit pages
    pub visits: VisitController,
    /// Vet listing
    pub vets: VetController,
}

impl AppState {
    /// Builds every controller from the shared services
    #[must_use]
    pub fn new(services: &Services) -> Self {
        Self {
            owners: OwnerController::new(
                Arc::clone(&services.owners),
                Arc::clone(&services.pets),
                Arc::clone(&services.visits),
            ),
            pets: PetController::new(
                Arc::clone(&services.owners),
                Arc::clone(&services.pets),
                Arc::clone(&services.pet_types),
            ),
            visits: VisitController::new(
                Arc::clone(&services.pets),
                Arc::clone(&services.visits),
            ),
            vets: VetController::new(Arc::clone(&services.vets)),
        }
    }
}

/// All routes of the application
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/owners", get(handlers::process_find_form))
        .route("/owners/find", get(handlers::init_find_form))
        .route(
            "/owners/new",
            get(handlers::init_owner_creation_form).post(handlers::process_owner_creation_form),
        )
        .route("/owners/:owner_id", get(handlers::show_owner))
        .route(
            "/owners/:owner_id/edit",
            get(handlers::init_update_owner_form).post(handlers::process_update_owner_form),
        )
        .route(
            "/owners/:owner_id/pets/new",
            get(handlers::init_pet_creation_form).post(handlers::process_pet_creation_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/edit",
            get(handlers::init_pet_update_form).post(handlers::process_pet_update_form),
        )
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(handlers::init_new_visit_form).post(handlers::process_new_visit_form),
        )
        .route("/vets", get(handlers::list_vets))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    async fn app() -> Result<(Router, Services)> {
        init_test_tracing();
        let db = setup_test_db().await?;
        let services = Services::sea_orm(&db);
        Ok((router(Arc::new(AppState::new(&services))), services))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    async fn get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    struct Clinic {
        weston: crate::entities::owner::Model,
        glenanne: crate::entities::owner::Model,
        rosco: crate::entities::pet::Model,
        buddy: crate::entities::pet::Model,
        dog: crate::entities::pet_type::Model,
    }

    /// Weston owns Rosco and Buddy, Glenanne owns nothing
    async fn clinic(services: &Services) -> Result<Clinic> {
        let weston = services.owners.save(owner_model("Michael", "Weston")).await?;
        let glenanne = services.owners.save(owner_model("Fiona", "Glenanne")).await?;
        let dog = services
            .pet_types
            .save(crate::entities::pet_type::Model {
                id: 0,
                name: "Dog".to_string(),
            })
            .await?;
        let rosco = services.pets.save(pet_model("Rosco", dog.id, weston.id)).await?;
        let buddy = services.pets.save(pet_model("Buddy", dog.id, weston.id)).await?;
        Ok(Clinic {
            weston,
            glenanne,
            rosco,
            buddy,
            dog,
        })
    }

    #[tokio::test]
    async fn test_index() -> Result<()> {
        let (app, _) = app().await?;
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["view"], "index");
        Ok(())
    }

    #[tokio::test]
    async fn test_find_owners_by_last_name() -> Result<()> {
        let (app, services) = app().await?;
        let weston = services.owners.save(owner_model("Michael", "Weston")).await?;
        services.owners.save(owner_model("Fiona", "Glenanne")).await?;

        // One match redirects to the owner
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/owners?lastName=West")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/owners/{}", weston.id));

        // No filter lists everyone
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/owners").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"], "owners/ownersList");
        assert_eq!(body["model"]["owners"].as_array().unwrap().len(), 2);

        // No match shows the search form with an error
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/owners?lastName=Nobody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"], "owners/findOwners");
        assert_eq!(body["errors"][0]["field"], "lastName");
        assert_eq!(body["errors"][0]["code"], "notFound");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_owner_from_form() -> Result<()> {
        let (app, services) = app().await?;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/owners/new")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "firstName=Sam&lastName=Axe&address=1+Ocean+Dr&city=Miami&telephone=3055551234",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let owners = services.owners.find_all().await?;
        assert_eq!(owners.len(), 1);
        assert_eq!(location(&response), format!("/owners/{}", owners[0].id));

        // Invalid telephone re-renders the form and stores nothing
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/owners/new")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "firstName=Sam&lastName=Axe&address=x&city=Miami&telephone=call-me",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["view"], "owners/createOrUpdateOwnerForm");
        assert_eq!(body["errors"][0]["field"], "telephone");
        assert_eq!(services.owners.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_show_missing_owner_is_not_found() -> Result<()> {
        let (app, _) = app().await?;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/owners/404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_pet_and_visit() -> Result<()> {
        let (app, services) = app().await?;
        let owner = services.owners.save(owner_model("Michael", "Weston")).await?;
        let dog = services
            .pet_types
            .save(crate::entities::pet_type::Model {
                id: 0,
                name: "Dog".to_string(),
            })
            .await?;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/owners/{}/pets/new", owner.id))
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(format!(
                        "name=Rosco&birthDate=2019-03-14&type={}",
                        dog.id
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/owners/{}", owner.id));

        let pets = services.pets.find_all_by_owner_id(owner.id).await?;
        assert_eq!(pets.len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!(
                        "/owners/{}/pets/{}/visits/new",
                        owner.id, pets[0].id
                    ))
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("date=2024-02-01&description=Checkup"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/owners/{}", owner.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["view"], "owners/ownerDetails");
        assert_eq!(body["model"]["owner"]["pets"][0]["name"], "Rosco");
        assert_eq!(
            body["model"]["owner"]["pets"][0]["visits"][0]["description"],
            "Checkup"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_find_form() -> Result<()> {
        let (app, _) = app().await?;
        let body = body_json(get(&app, "/owners/find").await).await;

        assert_eq!(body["view"], "owners/findOwners");
        assert_eq!(body["model"]["owner"]["lastName"], "");
        Ok(())
    }

    #[tokio::test]
    async fn test_owner_creation_form() -> Result<()> {
        let (app, _) = app().await?;
        let body = body_json(get(&app, "/owners/new").await).await;

        assert_eq!(body["view"], "owners/createOrUpdateOwnerForm");
        assert!(body["model"]["owner"].is_object());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_owner() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;
        let uri = format!("/owners/{}/edit", clinic.weston.id);

        let body = body_json(get(&app, &uri).await).await;
        assert_eq!(body["view"], "owners/createOrUpdateOwnerForm");
        assert_eq!(body["model"]["owner"]["lastName"], "Weston");

        let response = post_form(
            &app,
            &uri,
            "firstName=Michael&lastName=Weston&address=1+Ocean+Dr&city=Miami&telephone=3055551234",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/owners/{}", clinic.weston.id));

        let stored = services.owners.find_by_id(clinic.weston.id).await?.unwrap();
        assert_eq!(stored.city, "Miami");
        assert_eq!(services.owners.find_all().await?.len(), 2);

        // Invalid input re-renders the form
        let response = post_form(&app, &uri, "firstName=Michael").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["view"], "owners/createOrUpdateOwnerForm");
        assert!(body["errors"].as_array().unwrap().len() >= 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_missing_owner_is_not_found() -> Result<()> {
        let (app, _) = app().await?;

        assert_eq!(get(&app, "/owners/999/edit").await.status(), StatusCode::NOT_FOUND);
        let response = post_form(
            &app,
            "/owners/999/edit",
            "firstName=Sam&lastName=Axe&address=x&city=Miami&telephone=3055551234",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_pet_creation_form() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;

        let body = body_json(get(&app, &format!("/owners/{}/pets/new", clinic.weston.id)).await).await;
        assert_eq!(body["view"], "pets/createOrUpdatePetForm");
        assert_eq!(body["model"]["owner"]["id"], clinic.weston.id);
        assert_eq!(body["model"]["types"][0]["name"], "Dog");
        Ok(())
    }

    #[tokio::test]
    async fn test_pet_form_with_empty_fields_shows_errors() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;

        let response = post_form(
            &app,
            &format!("/owners/{}/pets/new", clinic.glenanne.id),
            "name=Just+Cat&birthDate=&type=",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["view"], "pets/createOrUpdatePetForm");
        let fields: Vec<_> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert!(fields.contains(&"birthDate".to_string()));
        assert!(fields.contains(&"type".to_string()));
        assert!(services.pets.find_all_by_owner_id(clinic.glenanne.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_pet() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;
        let uri = format!("/owners/{}/pets/{}/edit", clinic.weston.id, clinic.buddy.id);

        let body = body_json(get(&app, &uri).await).await;
        assert_eq!(body["view"], "pets/createOrUpdatePetForm");
        assert_eq!(body["model"]["pet"]["name"], "Buddy");

        let response = post_form(
            &app,
            &uri,
            &format!("name=Buddy+Boy&birthDate=2018-01-01&type={}", clinic.dog.id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let stored = services.pets.find_by_id(clinic.buddy.id).await?.unwrap();
        assert_eq!(stored.name, "Buddy Boy");
        assert_eq!(stored.owner_id, clinic.weston.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_pet_rejects_name_of_sibling() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;

        let response = post_form(
            &app,
            &format!("/owners/{}/pets/{}/edit", clinic.weston.id, clinic.buddy.id),
            &format!("name=rosco&birthDate=2018-01-01&type={}", clinic.dog.id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["code"], "duplicate");

        let names: Vec<_> = services
            .pets
            .find_all_by_owner_id(clinic.weston.id)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Buddy", "Rosco"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_pet_under_another_owner_is_not_found() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;
        let uri = format!("/owners/{}/pets/{}/edit", clinic.glenanne.id, clinic.rosco.id);

        assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
        let response = post_form(
            &app,
            &uri,
            &format!("name=Rosco&birthDate=2019-03-14&type={}", clinic.dog.id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let stored = services.pets.find_by_id(clinic.rosco.id).await?.unwrap();
        assert_eq!(stored.owner_id, clinic.weston.id);

        let response = post_form(
            &app,
            &format!("/owners/{}/pets/999/edit", clinic.weston.id),
            &format!("name=Ghost&birthDate=2019-03-14&type={}", clinic.dog.id),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_visit_form() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;

        let body = body_json(
            get(
                &app,
                &format!("/owners/{}/pets/{}/visits/new", clinic.weston.id, clinic.rosco.id),
            )
            .await,
        )
        .await;
        assert_eq!(body["view"], "pets/createOrUpdateVisitForm");
        assert_eq!(body["model"]["pet"]["name"], "Rosco");
        assert!(body["model"]["visit"]["date"].is_string());

        let uri = format!("/owners/{}/pets/{}/visits/new", clinic.glenanne.id, clinic.rosco.id);
        assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
        let response = post_form(&app, &uri, "date=2024-02-01&description=Checkup").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(services.visits.find_all_by_pet_id(clinic.rosco.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_visit_with_empty_date_shows_errors() -> Result<()> {
        let (app, services) = app().await?;
        let clinic = clinic(&services).await?;

        let response = post_form(
            &app,
            &format!("/owners/{}/pets/{}/visits/new", clinic.weston.id, clinic.rosco.id),
            "date=&description=Checkup",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "date");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_vets() -> Result<()> {
        let (app, services) = app().await?;
        let vet = services.vets.save(vet_model("Sam", "Axe")).await?;
        let radiology = services
            .specialities
            .save(crate::entities::speciality::Model {
                id: 0,
                description: "radiology".to_string(),
            })
            .await?;
        services.vets.add_speciality(vet.id, radiology.id).await?;

        let body = body_json(get(&app, "/vets").await).await;
        assert_eq!(body["view"], "vets/index");
        assert_eq!(body["model"]["vets"][0]["last_name"], "Axe");
        assert_eq!(body["model"]["vets"][0]["specialities"][0]["description"], "radiology");
        Ok(())
    }
}
