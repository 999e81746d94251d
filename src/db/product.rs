use crate::db::store_error;
use crate::errors::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, slug: &str) -> Result<Option<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch product by slug.", slug = %slug);
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product WHERE slug = $1 LIMIT 1"#)
        .bind(slug)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| store_error("fetch product", err))
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product ORDER BY created_at, slug"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| store_error("fetch products", err))
}

pub async fn insert(pool: &PgPool, product: models::Product) -> Result<models::Product, StoreError> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO product (slug, user_id, username, title, description, image, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&product.slug)
    .bind(&product.user_id)
    .bind(&product.username)
    .bind(&product.title)
    .bind(&product.description)
    .bind(&product.image)
    .bind(product.created_at)
    .bind(product.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("insert product", err))
}

/// Owner and slug are never touched, only the listing content.
pub async fn update(pool: &PgPool, product: models::Product) -> Result<models::Product, StoreError> {
    let query_span = tracing::info_span!("Updating product", slug = %product.slug);
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE product
        SET
            title=$2,
            description=$3,
            image=$4,
            updated_at=NOW()
        WHERE slug = $1
        RETURNING *
        "#,
    )
    .bind(&product.slug)
    .bind(&product.title)
    .bind(&product.description)
    .bind(&product.image)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| store_error("update product", err))?
    .ok_or_else(|| StoreError::Gone(format!("product {} is gone", product.slug)))
}

/// Comments, ratings and likes go with the product (`ON DELETE CASCADE`).
#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, StoreError> {
    sqlx::query::<sqlx::Postgres>("DELETE FROM product WHERE slug = $1;")
        .bind(slug)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| store_error("delete product", err))
}
