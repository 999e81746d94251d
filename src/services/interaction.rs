//! Interaction service: comments, ratings and likes on products.
//!
//! Every operation takes the acting user and the product explicitly. Rating
//! and like writes run check-then-write under the (user, product) lock so two
//! concurrent requests of one user cannot both pass the guard. A uniqueness
//! violation reported by the store (another process won the race) is mapped
//! onto the failure the guard would have produced.

use crate::errors::{Action, CatalogError, Entity, RatingIntent, Result, StoreError};
use crate::models;
use crate::services::aggregation;
use crate::services::guard::{self, LikeOp, LikeWrite, RatingWrite};
use crate::services::locks::KeyedLocks;
use crate::store::Store;
use crate::views;
use chrono::Utc;
use std::sync::Arc;

pub struct InteractionService {
    store: Arc<dyn Store>,
    locks: KeyedLocks,
}

impl InteractionService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            locks: KeyedLocks::new(),
        }
    }

    pub async fn resolve_product(&self, slug: &str) -> Result<models::Product> {
        self.store
            .fetch_product(slug)
            .await?
            .ok_or(CatalogError::not_found(Entity::Product))
    }

    pub async fn resolve_comment(&self, id: i32) -> Result<models::Comment> {
        self.store
            .fetch_comment(id)
            .await?
            .ok_or(CatalogError::not_found(Entity::Comment))
    }

    #[tracing::instrument(name = "Add comment.", skip(self, actor, text), fields(actor = %actor.id))]
    pub async fn add_comment(
        &self,
        actor: &models::User,
        slug: &str,
        text: String,
    ) -> Result<views::Comment> {
        let product = self.resolve_product(slug).await?;
        if text.trim().is_empty() {
            return Err(CatalogError::invalid("text", "may not be blank"));
        }

        let comment = models::Comment {
            id: 0,
            user_id: actor.id.clone(),
            username: actor.username.clone(),
            product_slug: product.slug,
            text,
            created_at: Utc::now(),
        };

        let comment = self
            .store
            .insert_comment(comment)
            .await
            .map_err(product_gone)?;
        tracing::info!(comment_id = comment.id, "Comment saved");

        Ok(comment.into())
    }

    #[tracing::instrument(name = "Delete comment.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn delete_comment(&self, actor: &models::User, comment_id: i32) -> Result<()> {
        let comment = self.resolve_comment(comment_id).await?;
        guard::authorize_mutation(actor, &comment.user_id, Action::DeleteComment)?;

        match self.store.delete_comment(comment.id).await? {
            true => Ok(()),
            false => Err(CatalogError::not_found(Entity::Comment)),
        }
    }

    /// Creates or updates the actor's rating of a product, as declared by
    /// `intent`. The value is checked first, whatever the intent.
    #[tracing::instrument(name = "Submit rating.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn submit_rating(
        &self,
        actor: &models::User,
        slug: &str,
        value: i32,
        intent: RatingIntent,
    ) -> Result<models::Rating> {
        let rate = guard::validate_rating_value(value)?;
        let product = self.resolve_product(slug).await?;

        let _lock = self.locks.acquire(&actor.id, &product.slug).await;
        let existing = self.store.find_rating(&actor.id, &product.slug).await?;

        let product_slug = product.slug.clone();
        match guard::check_rating_write_policy(existing, intent)? {
            RatingWrite::Create => {
                let now = Utc::now();
                let rating = models::Rating {
                    id: 0,
                    user_id: actor.id.clone(),
                    username: actor.username.clone(),
                    product_slug: product.slug,
                    rate,
                    created_at: now,
                    updated_at: now,
                };
                self.store.insert_rating(rating).await.map_err(|err| match err {
                    StoreError::Conflict(_) => CatalogError::IntentMismatch {
                        expected_path: RatingIntent::Update,
                    },
                    err => product_gone(err),
                })
            }
            RatingWrite::Update(mut rating) => {
                rating.rate = rate;
                match self.store.update_rating(rating).await {
                    Ok(rating) => Ok(rating),
                    Err(StoreError::Gone(_)) => Err(self.rating_gone(&product_slug).await),
                    Err(err) => Err(err.into()),
                }
            }
        }
    }

    // The rating went away under the update: with its product, or on its own.
    async fn rating_gone(&self, slug: &str) -> CatalogError {
        match self.store.fetch_product(slug).await {
            Ok(Some(_)) => CatalogError::IntentMismatch {
                expected_path: RatingIntent::Create,
            },
            Ok(None) => CatalogError::not_found(Entity::Product),
            Err(err) => err.into(),
        }
    }

    #[tracing::instrument(name = "Like product.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn like(&self, actor: &models::User, slug: &str) -> Result<models::Like> {
        let product = self.resolve_product(slug).await?;

        let _lock = self.locks.acquire(&actor.id, &product.slug).await;
        let existing = self.store.find_like(&actor.id, &product.slug).await?;
        guard::check_like_write_policy(existing, LikeOp::Like)?;

        let like = models::Like {
            id: 0,
            user_id: actor.id.clone(),
            username: actor.username.clone(),
            product_slug: product.slug,
            created_at: Utc::now(),
        };
        self.store.insert_like(like).await.map_err(|err| match err {
            StoreError::Conflict(_) => CatalogError::conflict("already liked"),
            err => product_gone(err),
        })
    }

    #[tracing::instrument(name = "Unlike product.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn unlike(&self, actor: &models::User, slug: &str) -> Result<()> {
        let product = self.resolve_product(slug).await?;

        let _lock = self.locks.acquire(&actor.id, &product.slug).await;
        let existing = self.store.find_like(&actor.id, &product.slug).await?;

        if let LikeWrite::Delete(like) = guard::check_like_write_policy(existing, LikeOp::Unlike)? {
            if !self.store.delete_like(like.id).await? {
                return Err(CatalogError::conflict("not liked yet"));
            }
        }

        Ok(())
    }

    #[tracing::instrument(name = "Aggregated product view.", skip(self))]
    pub async fn aggregated_view(&self, slug: &str) -> Result<views::AggregatedProductView> {
        let product = self.resolve_product(slug).await?;
        let comments = self.store.list_comments(&product.slug).await?;
        let ratings = self.store.list_ratings(&product.slug).await?;
        let likes = self.store.list_likes(&product.slug).await?;

        Ok(aggregation::build_view(product, comments, &ratings, &likes))
    }
}

// The product was deleted between the lookup and the insert.
fn product_gone(err: StoreError) -> CatalogError {
    match err {
        StoreError::MissingParent(_) => CatalogError::not_found(Entity::Product),
        err => err.into(),
    }
}
