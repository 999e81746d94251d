use crate::db::store_error;
use crate::errors::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Comment>, StoreError> {
    tracing::info!("Fetch comment {}", id);
    sqlx::query_as::<_, models::Comment>(r#"SELECT * FROM comment WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| store_error("fetch comment", err))
}

pub async fn fetch_by_product(pool: &PgPool, slug: &str) -> Result<Vec<models::Comment>, StoreError> {
    let query_span = tracing::info_span!("Fetch comments of a product.");
    sqlx::query_as::<_, models::Comment>(
        r#"SELECT * FROM comment WHERE product_slug=$1 ORDER BY id ASC"#,
    )
    .bind(slug)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("fetch comments", err))
}

pub async fn insert(pool: &PgPool, comment: models::Comment) -> Result<models::Comment, StoreError> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_as::<_, models::Comment>(
        r#"
        INSERT INTO comment (user_id, username, product_slug, text, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&comment.user_id)
    .bind(&comment.username)
    .bind(&comment.product_slug)
    .bind(&comment.text)
    .bind(comment.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("insert comment", err))
}

#[tracing::instrument(name = "Delete comment.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, StoreError> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM comment WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| store_error("delete comment", err))
}
