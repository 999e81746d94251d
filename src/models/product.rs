use chrono::{DateTime, Utc};
use serde::Serialize;

/// A product listing. `slug` is the primary key and never changes once set,
/// the owner (`user_id`/`username`) never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub slug: String,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
