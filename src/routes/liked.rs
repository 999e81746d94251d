use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::ProductService;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get liked products.", skip(user, service))]
#[get("")]
pub async fn liked_handler(
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let liked = service.liked_by(&actor).await?;

    Ok(JsonResponse::build().set_list(liked).ok("OK"))
}
