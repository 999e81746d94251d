use crate::errors::{Action, CatalogError, Entity, Result, StoreError};
use crate::forms;
use crate::helpers::slugify;
use crate::models;
use crate::services::guard;
use crate::store::Store;
use crate::views;
use chrono::Utc;
use serde_valid::Validate;
use std::collections::HashMap;
use std::sync::Arc;

/// Product listings and the actor's liked products.
pub struct ProductService {
    store: Arc<dyn Store>,
}

impl ProductService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    async fn resolve(&self, slug: &str) -> Result<models::Product> {
        self.store
            .fetch_product(slug)
            .await?
            .ok_or(CatalogError::not_found(Entity::Product))
    }

    #[tracing::instrument(name = "Create product.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn create(
        &self,
        actor: &models::User,
        form: forms::ProductForm,
    ) -> Result<models::Product> {
        form.validate()
            .map_err(|errors| CatalogError::invalid("product", errors.to_string()))?;

        let slug = match form.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&form.title),
        };
        if slug.is_empty() {
            return Err(CatalogError::invalid(
                "slug",
                "must contain at least one letter or digit",
            ));
        }

        let now = Utc::now();
        let product = models::Product {
            slug,
            user_id: actor.id.clone(),
            username: actor.username.clone(),
            title: form.title,
            description: form.description,
            image: form.image.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.store
            .insert_product(product)
            .await
            .map_err(|err| match err {
                StoreError::Conflict(_) => {
                    CatalogError::conflict("product with this slug already exists")
                }
                err => err.into(),
            })
    }

    pub async fn list(&self) -> Result<Vec<views::ProductListItem>> {
        let products = self.store.list_products().await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(name = "Update product.", skip(self, actor, form), fields(actor = %actor.id))]
    pub async fn update(
        &self,
        actor: &models::User,
        slug: &str,
        form: forms::ProductUpdateForm,
    ) -> Result<models::Product> {
        let mut product = self.resolve(slug).await?;
        guard::authorize_mutation(actor, &product.user_id, Action::UpdateProduct)?;

        form.validate()
            .map_err(|errors| CatalogError::invalid("product", errors.to_string()))?;
        form.update(&mut product);

        self.store
            .update_product(product)
            .await
            .map_err(|err| match err {
                StoreError::Gone(_) => CatalogError::not_found(Entity::Product),
                err => err.into(),
            })
    }

    /// Removes the product together with every comment, rating and like on it.
    #[tracing::instrument(name = "Delete product.", skip(self, actor), fields(actor = %actor.id))]
    pub async fn delete(&self, actor: &models::User, slug: &str) -> Result<()> {
        let product = self.resolve(slug).await?;
        guard::authorize_mutation(actor, &product.user_id, Action::DeleteProduct)?;

        match self.store.delete_product(&product.slug).await? {
            true => {
                tracing::info!(slug = %product.slug, "Product deleted");
                Ok(())
            }
            false => Err(CatalogError::not_found(Entity::Product)),
        }
    }

    pub async fn liked_by(&self, actor: &models::User) -> Result<Vec<views::LikedProduct>> {
        let likes = self.store.list_likes_by_user(&actor.id).await?;

        let mut products: HashMap<String, models::Product> = HashMap::new();
        let mut liked = Vec::with_capacity(likes.len());
        for like in likes {
            if !products.contains_key(&like.product_slug) {
                match self.store.fetch_product(&like.product_slug).await? {
                    Some(product) => {
                        products.insert(product.slug.clone(), product);
                    }
                    // deleted in between, its likes are gone with it
                    None => continue,
                }
            }
            if let Some(product) = products.get(&like.product_slug) {
                liked.push(views::LikedProduct::new(like, product));
            }
        }

        Ok(liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn user(id: &str) -> models::User {
        models::User {
            id: id.to_string(),
            username: format!("{}-name", id),
            email: format!("{}@example.com", id),
        }
    }

    fn form(title: &str, slug: Option<&str>) -> forms::ProductForm {
        forms::ProductForm {
            title: title.to_string(),
            slug: slug.map(str::to_string),
            description: "description".to_string(),
            image: None,
        }
    }

    fn service() -> (Arc<MemoryStore>, ProductService) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), ProductService::new(store))
    }

    #[tokio::test]
    async fn test_create_derives_slug() {
        let (_store, service) = service();
        let product = service
            .create(&user("u1"), form("Dark Souls III", None))
            .await
            .unwrap();
        assert_eq!(product.slug, "dark-souls-iii");
        assert_eq!(product.user_id, "u1");
        assert_eq!(product.username, "u1-name");
    }

    #[tokio::test]
    async fn test_create_transliterates_title() {
        let (_store, service) = service();
        let product = service
            .create(&user("u1"), form("Москва 2", None))
            .await
            .unwrap();
        assert_eq!(product.slug, "moskva-2");
        assert_eq!(product.title, "Москва 2");

        let other = service
            .create(&user("u1"), form("Привет 2", None))
            .await
            .unwrap();
        assert_eq!(other.slug, "privet-2");
    }

    #[tokio::test]
    async fn test_create_keeps_given_slug() {
        let (_store, service) = service();
        let product = service
            .create(&user("u1"), form("Dark Souls III", Some("ds3")))
            .await
            .unwrap();
        assert_eq!(product.slug, "ds3");
    }

    #[tokio::test]
    async fn test_create_rejects_taken_slug() {
        let (_store, service) = service();
        service.create(&user("u1"), form("Doom", None)).await.unwrap();
        let err = service.create(&user("u2"), form("DOOM", None)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_form() {
        let (_store, service) = service();
        let err = service.create(&user("u1"), form("", None)).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));

        let err = service.create(&user("u1"), form("???", None)).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[tokio::test]
    async fn test_update_by_owner_only() {
        let (_store, service) = service();
        service.create(&user("u1"), form("Doom", None)).await.unwrap();

        let update = || forms::ProductUpdateForm {
            title: Some("Doom Eternal".to_string()),
            description: None,
            image: Some("doom.png".to_string()),
        };

        let err = service.update(&user("u2"), "doom", update()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Forbidden { .. }));

        let product = service.update(&user("u1"), "doom", update()).await.unwrap();
        assert_eq!(product.slug, "doom");
        assert_eq!(product.title, "Doom Eternal");
        assert_eq!(product.description, "description");
        assert_eq!(product.image, "doom.png");
    }

    #[tokio::test]
    async fn test_delete_by_owner_cascades() {
        let (store, service) = service();
        service.create(&user("u1"), form("Doom", None)).await.unwrap();
        store
            .insert_like(models::Like {
                id: 0,
                user_id: "u2".to_string(),
                username: "u2-name".to_string(),
                product_slug: "doom".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let err = service.delete(&user("u2"), "doom").await.unwrap_err();
        assert!(matches!(err, CatalogError::Forbidden { .. }));

        service.delete(&user("u1"), "doom").await.unwrap();
        assert!(store.list_likes("doom").await.unwrap().is_empty());
        assert_eq!(
            service.delete(&user("u1"), "doom").await.unwrap_err(),
            CatalogError::not_found(Entity::Product)
        );
    }

    #[tokio::test]
    async fn test_list_and_liked() {
        let (store, service) = service();
        service.create(&user("u1"), form("Doom", None)).await.unwrap();
        service.create(&user("u1"), form("Quake", None)).await.unwrap();

        let titles: Vec<String> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Doom", "Quake"]);

        store
            .insert_like(models::Like {
                id: 0,
                user_id: "u2".to_string(),
                username: "u2-name".to_string(),
                product_slug: "quake".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let liked = service.liked_by(&user("u2")).await.unwrap();
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0].products, "Quake");
        assert_eq!(liked[0].user, "u2-name");
        assert_eq!(liked[0].url, "/product/quake");
        assert!(service.liked_by(&user("u3")).await.unwrap().is_empty());
    }
}
