use axum::{Router, handler::HandlerWithoutStateExt, middleware, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::{path::Path, sync::Arc};

use crate::{
    handlers::{self, rest},
    middleware::request_logger,
    service::NoteService,
};

pub fn router(service: Arc<NoteService>, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    // Anything that is neither an API route nor a file on disk is an unknown endpoint
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::unknown_endpoint.into_service());

    Router::new()
        .route("/", get(move || handlers::root(index.clone())))
        .route(
            "/api/notes",
            get(rest::get_all_notes).post(rest::create_note),
        )
        .route(
            "/api/notes/{id}",
            get(rest::get_one_note)
                .put(rest::update_note)
                .delete(rest::delete_note),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .method_not_allowed_fallback(handlers::unknown_endpoint)
        .fallback_service(static_files)
        .with_state(service)
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
}
