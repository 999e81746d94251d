use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::ProductService;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete product.", skip(user, service))]
#[delete("/{slug}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    service.delete(&actor, &slug).await?;

    Ok(JsonResponse::<models::Product>::build().ok("Deleted"))
}
