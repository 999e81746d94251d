use super::{Result, Store};
use crate::errors::StoreError;
use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex as TokioMutex;

// Tables are kept as vectors so that listing order is insertion order.
#[derive(Default)]
struct StoreData {
    products: Vec<models::Product>,
    comments: Vec<models::Comment>,
    ratings: Vec<models::Rating>,
    likes: Vec<models::Like>,
    next_comment_id: i32,
    next_rating_id: i32,
    next_like_id: i32,
}

impl StoreData {
    fn has_product(&self, slug: &str) -> bool {
        self.products.iter().any(|product| product.slug == slug)
    }

    fn require_product(&self, slug: &str) -> Result<()> {
        if self.has_product(slug) {
            Ok(())
        } else {
            Err(StoreError::MissingParent(format!(
                "product {} does not exist",
                slug
            )))
        }
    }
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

/// In-memory store (useful for testing and for running without a database)
pub struct MemoryStore {
    data: TokioMutex<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: TokioMutex::new(StoreData::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_product(&self, product: models::Product) -> Result<models::Product> {
        let mut data = self.data.lock().await;
        if data.has_product(&product.slug) {
            return Err(StoreError::Conflict(format!(
                "product {} already exists",
                product.slug
            )));
        }
        data.products.push(product.clone());
        Ok(product)
    }

    async fn fetch_product(&self, slug: &str) -> Result<Option<models::Product>> {
        let data = self.data.lock().await;
        Ok(data.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_products(&self) -> Result<Vec<models::Product>> {
        let data = self.data.lock().await;
        Ok(data.products.clone())
    }

    async fn update_product(&self, product: models::Product) -> Result<models::Product> {
        let mut data = self.data.lock().await;
        let stored = data
            .products
            .iter_mut()
            .find(|p| p.slug == product.slug)
            .ok_or_else(|| StoreError::Gone(format!("product {} is gone", product.slug)))?;

        stored.title = product.title;
        stored.description = product.description;
        stored.image = product.image;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_product(&self, slug: &str) -> Result<bool> {
        let mut data = self.data.lock().await;
        let before = data.products.len();
        data.products.retain(|p| p.slug != slug);
        if data.products.len() == before {
            return Ok(false);
        }

        data.comments.retain(|c| c.product_slug != slug);
        data.ratings.retain(|r| r.product_slug != slug);
        data.likes.retain(|l| l.product_slug != slug);
        Ok(true)
    }

    async fn fetch_comment(&self, id: i32) -> Result<Option<models::Comment>> {
        let data = self.data.lock().await;
        Ok(data.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_comment(&self, mut comment: models::Comment) -> Result<models::Comment> {
        let mut data = self.data.lock().await;
        data.require_product(&comment.product_slug)?;
        comment.id = next_id(&mut data.next_comment_id);
        data.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, id: i32) -> Result<bool> {
        let mut data = self.data.lock().await;
        let before = data.comments.len();
        data.comments.retain(|c| c.id != id);
        Ok(data.comments.len() != before)
    }

    async fn list_comments(&self, slug: &str) -> Result<Vec<models::Comment>> {
        let data = self.data.lock().await;
        Ok(data
            .comments
            .iter()
            .filter(|c| c.product_slug == slug)
            .cloned()
            .collect())
    }

    async fn find_rating(&self, user_id: &str, slug: &str) -> Result<Option<models::Rating>> {
        let data = self.data.lock().await;
        Ok(data
            .ratings
            .iter()
            .find(|r| r.user_id == user_id && r.product_slug == slug)
            .cloned())
    }

    async fn insert_rating(&self, mut rating: models::Rating) -> Result<models::Rating> {
        let mut data = self.data.lock().await;
        data.require_product(&rating.product_slug)?;
        if data
            .ratings
            .iter()
            .any(|r| r.user_id == rating.user_id && r.product_slug == rating.product_slug)
        {
            return Err(StoreError::Conflict("insert rating: duplicate record".to_string()));
        }
        rating.id = next_id(&mut data.next_rating_id);
        data.ratings.push(rating.clone());
        Ok(rating)
    }

    async fn update_rating(&self, rating: models::Rating) -> Result<models::Rating> {
        let mut data = self.data.lock().await;
        let stored = data
            .ratings
            .iter_mut()
            .find(|r| r.id == rating.id)
            .ok_or_else(|| StoreError::Gone(format!("rating {} is gone", rating.id)))?;

        stored.rate = rating.rate;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn list_ratings(&self, slug: &str) -> Result<Vec<models::Rating>> {
        let data = self.data.lock().await;
        Ok(data
            .ratings
            .iter()
            .filter(|r| r.product_slug == slug)
            .cloned()
            .collect())
    }

    async fn find_like(&self, user_id: &str, slug: &str) -> Result<Option<models::Like>> {
        let data = self.data.lock().await;
        Ok(data
            .likes
            .iter()
            .find(|l| l.user_id == user_id && l.product_slug == slug)
            .cloned())
    }

    async fn insert_like(&self, mut like: models::Like) -> Result<models::Like> {
        let mut data = self.data.lock().await;
        data.require_product(&like.product_slug)?;
        if data
            .likes
            .iter()
            .any(|l| l.user_id == like.user_id && l.product_slug == like.product_slug)
        {
            return Err(StoreError::Conflict("insert like: duplicate record".to_string()));
        }
        like.id = next_id(&mut data.next_like_id);
        data.likes.push(like.clone());
        Ok(like)
    }

    async fn delete_like(&self, id: i32) -> Result<bool> {
        let mut data = self.data.lock().await;
        let before = data.likes.len();
        data.likes.retain(|l| l.id != id);
        Ok(data.likes.len() != before)
    }

    async fn list_likes(&self, slug: &str) -> Result<Vec<models::Like>> {
        let data = self.data.lock().await;
        Ok(data
            .likes
            .iter()
            .filter(|l| l.product_slug == slug)
            .cloned()
            .collect())
    }

    async fn list_likes_by_user(&self, user_id: &str) -> Result<Vec<models::Like>> {
        let data = self.data.lock().await;
        Ok(data
            .likes
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }
}
