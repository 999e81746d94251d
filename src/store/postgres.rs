use super::{Result, Store};
use crate::db;
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL store. Uniqueness and cascade rules live in the schema
/// (`migrations/`), violations come back as typed [`crate::errors::StoreError`]s.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_product(&self, product: models::Product) -> Result<models::Product> {
        db::product::insert(&self.pool, product).await
    }

    async fn fetch_product(&self, slug: &str) -> Result<Option<models::Product>> {
        db::product::fetch(&self.pool, slug).await
    }

    async fn list_products(&self) -> Result<Vec<models::Product>> {
        db::product::fetch_all(&self.pool).await
    }

    async fn update_product(&self, product: models::Product) -> Result<models::Product> {
        db::product::update(&self.pool, product).await
    }

    async fn delete_product(&self, slug: &str) -> Result<bool> {
        db::product::delete(&self.pool, slug).await
    }

    async fn fetch_comment(&self, id: i32) -> Result<Option<models::Comment>> {
        db::comment::fetch(&self.pool, id).await
    }

    async fn insert_comment(&self, comment: models::Comment) -> Result<models::Comment> {
        db::comment::insert(&self.pool, comment).await
    }

    async fn delete_comment(&self, id: i32) -> Result<bool> {
        db::comment::delete(&self.pool, id).await
    }

    async fn list_comments(&self, slug: &str) -> Result<Vec<models::Comment>> {
        db::comment::fetch_by_product(&self.pool, slug).await
    }

    async fn find_rating(&self, user_id: &str, slug: &str) -> Result<Option<models::Rating>> {
        db::rating::fetch_by_user_and_product(&self.pool, user_id, slug).await
    }

    async fn insert_rating(&self, rating: models::Rating) -> Result<models::Rating> {
        db::rating::insert(&self.pool, rating).await
    }

    async fn update_rating(&self, rating: models::Rating) -> Result<models::Rating> {
        db::rating::update(&self.pool, rating).await
    }

    async fn list_ratings(&self, slug: &str) -> Result<Vec<models::Rating>> {
        db::rating::fetch_by_product(&self.pool, slug).await
    }

    async fn find_like(&self, user_id: &str, slug: &str) -> Result<Option<models::Like>> {
        db::like::fetch_by_user_and_product(&self.pool, user_id, slug).await
    }

    async fn insert_like(&self, like: models::Like) -> Result<models::Like> {
        db::like::insert(&self.pool, like).await
    }

    async fn delete_like(&self, id: i32) -> Result<bool> {
        db::like::delete(&self.pool, id).await
    }

    async fn list_likes(&self, slug: &str) -> Result<Vec<models::Like>> {
        db::like::fetch_by_product(&self.pool, slug).await
    }

    async fn list_likes_by_user(&self, user_id: &str) -> Result<Vec<models::Like>> {
        db::like::fetch_by_user(&self.pool, user_id).await
    }
}
