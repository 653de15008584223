use axum::{
    Json,
    extract::{Path, State},
};
use chairtime_core::{errors::BookingError, models::service::Service};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

pub(crate) fn to_service(db: chairtime_db::models::DbService) -> Service {
    Service {
        id: db.id,
        name: db.name,
        description: db.description,
        price_cents: db.price_cents,
        image_url: db.image_url,
        created_at: db.created_at,
    }
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services = chairtime_db::repositories::service::list_services(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(to_service).collect()))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Service>, AppError> {
    let service = chairtime_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(to_service(service)))
}
