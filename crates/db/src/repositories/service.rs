use crate::models::DbService;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_service(
    pool: &Pool<Postgres>,
    name: &str,
    description: &str,
    price_cents: i64,
    image_url: &str,
) -> Result<DbService> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating service: id={}, name={}", id, name);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        INSERT INTO services (id, name, description, price_cents, image_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, description, price_cents, image_url, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price_cents)
    .bind(image_url)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    tracing::debug!("Getting service by id: {}", id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price_cents, image_url, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn list_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    tracing::debug!("Listing services");

    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, name, description, price_cents, image_url, created_at
        FROM services
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(services)
}
