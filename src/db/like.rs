use crate::db::store_error;
use crate::errors::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

// `like` is a reserved word, hence the table name.

pub async fn fetch_by_user_and_product(
    pool: &PgPool,
    user_id: &str,
    slug: &str,
) -> Result<Option<models::Like>, StoreError> {
    let query_span = tracing::info_span!("Search for existing like.");
    sqlx::query_as::<_, models::Like>(
        r#"SELECT * FROM product_like WHERE user_id=$1 AND product_slug=$2 LIMIT 1"#,
    )
    .bind(user_id)
    .bind(slug)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch like", err))
}

pub async fn fetch_by_product(pool: &PgPool, slug: &str) -> Result<Vec<models::Like>, StoreError> {
    let query_span = tracing::info_span!("Fetch likes of a product.");
    sqlx::query_as::<_, models::Like>(
        r#"SELECT * FROM product_like WHERE product_slug=$1 ORDER BY id ASC"#,
    )
    .bind(slug)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch likes", err))
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::Like>, StoreError> {
    let query_span = tracing::info_span!("Fetch likes by user id.");
    sqlx::query_as::<_, models::Like>(
        r#"SELECT * FROM product_like WHERE user_id=$1 ORDER BY id ASC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch user likes", err))
}

pub async fn insert(pool: &PgPool, like: models::Like) -> Result<models::Like, StoreError> {
    let query_span = tracing::info_span!("Saving new like into the database");
    sqlx::query_as::<_, models::Like>(
        r#"
        INSERT INTO product_like (user_id, username, product_slug, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&like.user_id)
    .bind(&like.username)
    .bind(&like.product_slug)
    .bind(like.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("insert like", err))
}

#[tracing::instrument(name = "Delete like.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM product_like WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| store_error("delete like", err))
}
