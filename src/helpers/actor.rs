use crate::errors::CatalogError;
use crate::models;
use actix_web::web;
use std::sync::Arc;

/// The current actor of a request. Anonymous requests carry no user and are
/// refused for every operation that writes.
pub fn require_actor(
    user: Option<web::ReqData<Arc<models::User>>>,
) -> Result<Arc<models::User>, CatalogError> {
    user.map(|user| user.into_inner())
        .ok_or(CatalogError::Unauthenticated)
}
