use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::InteractionService;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete comment.", skip(user, service))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (id,) = path.into_inner();
    service.delete_comment(&actor, id).await?;

    Ok(JsonResponse::<models::Comment>::build().set_id(id).ok("Deleted"))
}
