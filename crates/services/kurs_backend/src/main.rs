// File: services/kurs_backend/src/main.rs
use axum::{routing::get, Router};
use kurs_config::load_config;
use kurs_notify::routes as notify_routes;
use kurs_registration::routes as registration_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod app_state;
use app_state::AppState;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    kurs_common::logging::init();

    let state = AppState::new(config)
        .await
        .expect("Failed to initialize stores");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Kurs API!" }))
        .merge(registration_routes(state.manager.clone()))
        .merge(notify_routes(state.engine.clone(), state.manager.clone()));

    // Browsers call this API directly, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new().nest("/api", api_router).layer(cors);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use kurs_notify::doc::NotifyApiDoc;
        use kurs_registration::doc::RegistrationApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Kurs API",
                version = "0.1.0",
                description = "Event registration and reminder service API docs"
            ),
            components(),
            tags( (name = "Kurs", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(RegistrationApiDoc::openapi());
        openapi_doc.merge(NotifyApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
