use crate::helpers::JsonResponse;
use crate::services::{InteractionService, ProductService};
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get product list.", skip(service))]
#[get("")]
pub async fn list_handler(service: web::Data<ProductService>) -> Result<impl Responder> {
    let products = service.list().await?;

    Ok(JsonResponse::build().set_list(products).ok("OK"))
}

#[tracing::instrument(name = "Get product.", skip(service))]
#[get("/{slug}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    let (slug,) = path.into_inner();
    let view = service.aggregated_view(&slug).await?;

    Ok(JsonResponse::build().set_item(view).ok("OK"))
}
