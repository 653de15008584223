use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            price_cents BIGINT NOT NULL,
            image_url TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT positive_price CHECK (price_cents >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. The unique constraint on (service_id, starts_at)
    // is what turns a lost booking race into a clean conflict error.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            service_id UUID NOT NULL REFERENCES services(id),
            user_id UUID NOT NULL,
            starts_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_service_time UNIQUE (service_id, starts_at)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_bookings_service_id ON bookings(service_id);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_user_id ON bookings(user_id);",
        "CREATE INDEX IF NOT EXISTS idx_bookings_starts_at ON bookings(starts_at);",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Inserts the default service catalog when the services table is empty.
/// Returns how many services were inserted.
pub async fn seed_services(pool: &Pool<Postgres>) -> Result<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        info!("Service catalog already seeded ({} services).", existing);
        return Ok(0);
    }

    let defaults = [
        (
            "Haircut",
            "Classic cut with clippers and scissors, finished with a hot towel.",
            4500_i64,
            "/images/haircut.png",
        ),
        (
            "Beard Trim",
            "Shape-up and line work for beard and mustache.",
            3000,
            "/images/beard.png",
        ),
        (
            "Haircut + Beard",
            "Full cut and beard service in one sitting.",
            7000,
            "/images/combo.png",
        ),
        (
            "Eyebrows",
            "Eyebrow shaping with razor detail.",
            1500,
            "/images/eyebrows.png",
        ),
        (
            "Scalp Treatment",
            "Deep-cleanse scalp massage and hydration.",
            2500,
            "/images/scalp.png",
        ),
    ];

    let mut inserted = 0;
    for (name, description, price_cents, image_url) in defaults {
        crate::repositories::service::create_service(pool, name, description, price_cents, image_url)
            .await?;
        inserted += 1;
    }

    info!("Seeded {} services.", inserted);
    Ok(inserted)
}
