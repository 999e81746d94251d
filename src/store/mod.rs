//! Entity store: persistence of products and of the interactions attached to them.
//!
//! Two implementations share one contract:
//! - [`PgStore`] backed by PostgreSQL (`db` module queries)
//! - [`MemoryStore`] kept in process, used by tests and local runs
//!
//! Contract every implementation upholds:
//! - writes are durable as soon as the call returns
//! - at most one rating and one like per (user, product) pair, a second
//!   insert fails with [`StoreError::Conflict`]
//! - interaction inserts for a missing product fail with [`StoreError::MissingParent`]
//! - updating a row that does not exist fails with [`StoreError::Gone`]
//! - deleting a product deletes its comments, ratings and likes
//! - every `list_*` call returns records in insertion order

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::errors::StoreError;
use crate::models;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_product(&self, product: models::Product) -> Result<models::Product>;
    async fn fetch_product(&self, slug: &str) -> Result<Option<models::Product>>;
    async fn list_products(&self) -> Result<Vec<models::Product>>;
    async fn update_product(&self, product: models::Product) -> Result<models::Product>;
    /// Returns `false` when there was nothing to delete.
    async fn delete_product(&self, slug: &str) -> Result<bool>;

    async fn fetch_comment(&self, id: i32) -> Result<Option<models::Comment>>;
    async fn insert_comment(&self, comment: models::Comment) -> Result<models::Comment>;
    async fn delete_comment(&self, id: i32) -> Result<bool>;
    async fn list_comments(&self, slug: &str) -> Result<Vec<models::Comment>>;

    async fn find_rating(&self, user_id: &str, slug: &str) -> Result<Option<models::Rating>>;
    async fn insert_rating(&self, rating: models::Rating) -> Result<models::Rating>;
    async fn update_rating(&self, rating: models::Rating) -> Result<models::Rating>;
    async fn list_ratings(&self, slug: &str) -> Result<Vec<models::Rating>>;

    async fn find_like(&self, user_id: &str, slug: &str) -> Result<Option<models::Like>>;
    async fn insert_like(&self, like: models::Like) -> Result<models::Like>;
    async fn delete_like(&self, id: i32) -> Result<bool>;
    async fn list_likes(&self, slug: &str) -> Result<Vec<models::Like>>;
    async fn list_likes_by_user(&self, user_id: &str) -> Result<Vec<models::Like>>;
}
