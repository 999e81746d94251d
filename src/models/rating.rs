use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MIN_RATE: i32 = 1;
pub const MAX_RATE: i32 = 5;

/// One star rating per (user, product) pair.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Rating {
    pub id: i32,
    pub user_id: String,
    pub username: String,
    pub product_slug: String,
    pub rate: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
