use crate::configuration::Settings;
use crate::forms;
use crate::middleware::authentication::get_header;
use crate::models;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Users resolved per bearer token, kept for `ttl` to spare the identity provider.
pub struct OAuthCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedUser>>,
}

struct CachedUser {
    user: models::User,
    expires_at: Instant,
}

impl OAuthCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<models::User> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                Some(entry) if entry.expires_at > now => return Some(entry.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // expired, drop it unless someone refreshed it meanwhile
        let mut entries = self.entries.write().await;
        match entries.get(token) {
            Some(entry) if entry.expires_at > now => Some(entry.user.clone()),
            Some(_) => {
                entries.remove(token);
                None
            }
            None => None,
        }
    }

    /// Stores a resolved user and drops every entry that has expired, so
    /// tokens seen only once do not stay around.
    pub async fn insert(&self, token: String, user: models::User) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            token,
            CachedUser {
                user,
                expires_at: now + self.ttl,
            },
        );
    }
}

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer missing scheme".to_string()),
    }

    match authentication_parts.next().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => {
            tracing::error!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip(req))]
pub async fn try_oauth(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = match get_header::<String>(req, "authorization")? {
        Some(authentication) => authentication,
        None => return Ok(false),
    };

    let token = try_extract_token(authentication)?;
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| "settings are not configured".to_string())?;
    let http_client = req
        .app_data::<web::Data<reqwest::Client>>()
        .ok_or_else(|| "http client is not configured".to_string())?;
    let cache = req
        .app_data::<web::Data<OAuthCache>>()
        .ok_or_else(|| "oauth cache is not configured".to_string())?;

    let user = match cache.get(&token).await {
        Some(user) => user,
        None => {
            let user = fetch_user(http_client.get_ref(), settings.auth_url.as_str(), &token).await?;
            cache.insert(token, user.clone()).await;
            user
        }
    };

    tracing::debug!(user_id = %user.id, "Authenticated");
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}

pub async fn fetch_user(
    client: &reqwest::Client,
    auth_url: &str,
    token: &str,
) -> Result<models::User, String> {
    let resp = client
        .get(auth_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|err| {
            tracing::error!(target: "auth", error = %err, "OAuth request failed");
            "No response from OAuth server".to_string()
        })?;

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::UserForm>()
        .await
        .map_err(|_err| "can't parse the response body".to_string())?
        .try_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> models::User {
        models::User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_extract_token() {
        assert_eq!(try_extract_token("Bearer abc".to_string()).unwrap(), "abc");
        assert!(try_extract_token("Basic abc".to_string()).is_err());
        assert!(try_extract_token("Bearer ".to_string()).is_err());
        assert!(try_extract_token("Bearer".to_string()).is_err());
    }

    #[tokio::test]
    async fn test_cache_hit() {
        let cache = OAuthCache::new(Duration::from_secs(60));
        cache.insert("token".to_string(), user()).await;
        assert_eq!(cache.get("token").await, Some(user()));
        assert_eq!(cache.get("other").await, None);
    }

    #[tokio::test]
    async fn test_cache_expiry() {
        let cache = OAuthCache::new(Duration::from_millis(0));
        cache.insert("token".to_string(), user()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(cache.get("token").await, None);
        assert!(cache.entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_insert_sweeps_expired_tokens() {
        let cache = OAuthCache::new(Duration::from_millis(0));
        cache.insert("once".to_string(), user()).await;
        cache.insert("twice".to_string(), user()).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        cache.insert("latest".to_string(), user()).await;
        let entries = cache.entries.read().await;
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("latest"));
    }
}
