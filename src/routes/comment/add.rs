use crate::forms;
use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::InteractionService;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add comment.", skip(user, service))]
#[post("/{slug}/comment")]
pub async fn add_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::CommentForm>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    let comment = service
        .add_comment(&actor, &slug, form.into_inner().text)
        .await?;

    Ok(JsonResponse::build()
        .set_id(comment.id)
        .set_item(comment)
        .created("Created"))
}
