use crate::forms;
use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::ProductService;
use actix_web::{put, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Update product.", skip(user, service))]
#[put("/{slug}")]
pub async fn update_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::ProductUpdateForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    let product = service.update(&actor, &slug, form.into_inner()).await?;

    Ok(JsonResponse::build().set_item(product).ok("success"))
}
