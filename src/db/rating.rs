use crate::db::store_error;
use crate::errors::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_user_and_product(
    pool: &PgPool,
    user_id: &str,
    slug: &str,
) -> Result<Option<models::Rating>, StoreError> {
    let query_span = tracing::info_span!("Search for existing vote.");
    sqlx::query_as::<_, models::Rating>(
        r#"SELECT * FROM rating WHERE user_id=$1 AND product_slug=$2 LIMIT 1"#,
    )
    .bind(user_id)
    .bind(slug)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch rating", err))
}

pub async fn fetch_by_product(pool: &PgPool, slug: &str) -> Result<Vec<models::Rating>, StoreError> {
    let query_span = tracing::info_span!("Fetch ratings of a product.");
    sqlx::query_as::<_, models::Rating>(
        r#"SELECT * FROM rating WHERE product_slug=$1 ORDER BY id ASC"#,
    )
    .bind(slug)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch ratings", err))
}

pub async fn insert(pool: &PgPool, rating: models::Rating) -> Result<models::Rating, StoreError> {
    let query_span = tracing::info_span!("Saving new rating details into the database");
    sqlx::query_as::<_, models::Rating>(
        r#"
        INSERT INTO rating (user_id, username, product_slug, rate, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&rating.user_id)
    .bind(&rating.username)
    .bind(&rating.product_slug)
    .bind(rating.rate)
    .bind(rating.created_at)
    .bind(rating.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("insert rating", err))
}

pub async fn update(pool: &PgPool, rating: models::Rating) -> Result<models::Rating, StoreError> {
    let query_span = tracing::info_span!("Updating rating", id = rating.id);
    sqlx::query_as::<_, models::Rating>(
        r#"
        UPDATE rating
        SET
            rate=$2,
            updated_at=NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(rating.id)
    .bind(rating.rate)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("update rating", err))?
    .ok_or_else(|| StoreError::Gone(format!("rating {} is gone", rating.id)))
}
