use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i32,
    pub user_id: String,
    pub username: String, // author's name at the time of writing
    pub product_slug: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
