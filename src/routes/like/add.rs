use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::InteractionService;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Like product.", skip(user, service))]
#[post("/{slug}/like")]
pub async fn like_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    let like = service.like(&actor, &slug).await?;

    Ok(JsonResponse::build().set_id(like.id).set_item(like).ok("Liked!"))
}
