use crate::forms;
use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::ProductService;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add product.", skip(user, service))]
#[post("")]
pub async fn add_handler(
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::ProductForm>,
    service: web::Data<ProductService>,
) -> Result<impl Responder> {
    let actor = require_actor(user)?;
    let product = service.create(&actor, form.into_inner()).await?;

    Ok(JsonResponse::build().set_item(product).created("Created"))
}
