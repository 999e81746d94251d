use catalog::errors::StoreError;
use catalog::models;
use catalog::store::{PgStore, Store};
use chrono::Utc;
use sqlx::{Connection, Executor, PgConnection, PgPool};

// Runs against the server in DATABASE_URL (without a database name); a fresh
// database is created per test. Skipped when the variable is not set.
async fn spawn_store() -> Option<PgStore> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping tests: DATABASE_URL is not set");
            return None;
        }
    };
    let database_name = uuid::Uuid::new_v4().to_string();

    let mut connection = PgConnection::connect(&url)
        .await
        .expect("Failed to connect to postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, database_name).as_str())
        .await
        .expect("Failed to create database");

    let pool = PgPool::connect(&format!("{}/{}", url.trim_end_matches('/'), database_name))
        .await
        .expect("Failed to connect to database pool");
    let store = PgStore::new(pool);
    store.migrate().await.expect("Failed to migrate database");

    Some(store)
}

fn product(slug: &str) -> models::Product {
    models::Product {
        slug: slug.to_string(),
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        title: slug.to_uppercase(),
        description: String::new(),
        image: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn like(user_id: &str, slug: &str) -> models::Like {
    models::Like {
        id: 0,
        user_id: user_id.to_string(),
        username: format!("{}-name", user_id),
        product_slug: slug.to_string(),
        created_at: Utc::now(),
    }
}

fn rating(user_id: &str, slug: &str, rate: i32) -> models::Rating {
    models::Rating {
        id: 0,
        user_id: user_id.to_string(),
        username: format!("{}-name", user_id),
        product_slug: slug.to_string(),
        rate,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn unique_pairs_and_missing_parent() {
    let store = match spawn_store().await {
        Some(store) => store,
        None => return,
    };
    store.insert_product(product("doom")).await.unwrap();

    assert!(matches!(
        store.insert_product(product("doom")).await,
        Err(StoreError::Conflict(_))
    ));

    store.insert_like(like("u2", "doom")).await.unwrap();
    assert!(matches!(
        store.insert_like(like("u2", "doom")).await,
        Err(StoreError::Conflict(_))
    ));
    assert!(matches!(
        store.insert_like(like("u2", "quake")).await,
        Err(StoreError::MissingParent(_))
    ));

    let saved = store.insert_rating(rating("u2", "doom", 4)).await.unwrap();
    assert!(matches!(
        store.insert_rating(rating("u2", "doom", 2)).await,
        Err(StoreError::Conflict(_))
    ));

    let mut update = saved.clone();
    update.rate = 2;
    let updated = store.update_rating(update).await.unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.rate, 2);
}

#[tokio::test]
async fn delete_product_cascades() {
    let store = match spawn_store().await {
        Some(store) => store,
        None => return,
    };
    store.insert_product(product("doom")).await.unwrap();
    store.insert_like(like("u2", "doom")).await.unwrap();
    store.insert_rating(rating("u2", "doom", 5)).await.unwrap();
    store
        .insert_comment(models::Comment {
            id: 0,
            user_id: "u2".to_string(),
            username: "u2-name".to_string(),
            product_slug: "doom".to_string(),
            text: "great".to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    assert!(store.delete_product("doom").await.unwrap());
    assert!(!store.delete_product("doom").await.unwrap());

    assert!(store.fetch_product("doom").await.unwrap().is_none());
    assert!(store.list_comments("doom").await.unwrap().is_empty());
    assert!(store.list_ratings("doom").await.unwrap().is_empty());
    assert!(store.list_likes("doom").await.unwrap().is_empty());
    assert!(store.list_likes_by_user("u2").await.unwrap().is_empty());
}
