use chrono::{DateTime, Utc};
use serde::Serialize;

/// At most one like per (user, product) pair. Carries nothing but the pair.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Like {
    pub id: i32,
    pub user_id: String,
    pub username: String,
    pub product_slug: String,
    pub created_at: DateTime<Utc>,
}
