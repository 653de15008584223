use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/services", get(handlers::services::list_services))
        .route("/api/services/:id", get(handlers::services::get_service))
}
