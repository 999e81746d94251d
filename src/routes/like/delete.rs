use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::InteractionService;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Unlike product.", skip(user, service))]
#[delete("/{slug}/like")]
pub async fn unlike_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    service.unlike(&actor, &slug).await?;

    Ok(JsonResponse::<models::Like>::build().ok("Unliked!"))
}
