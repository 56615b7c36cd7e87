pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{generate_image_handler, hello_handler, root_handler};

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/hello", get(hello_handler))
        .route("/generate-image/", post(generate_image_handler))
        .route("/generate-image", post(generate_image_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
