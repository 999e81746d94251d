use crate::errors::RatingIntent;
use crate::forms;
use crate::helpers::{require_actor, JsonResponse};
use crate::models;
use crate::services::InteractionService;
use actix_web::{patch, post, web, Responder, Result};
use std::sync::Arc;

// POST creates the actor's rating, PATCH updates it. Using the wrong method
// for the current state is refused with a hint at the right one.

#[tracing::instrument(name = "Create rating.", skip(user, service))]
#[post("/{slug}/set-rating")]
pub async fn create_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::RatingForm>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    submit(path, user, form, service, RatingIntent::Create).await
}

#[tracing::instrument(name = "Update rating.", skip(user, service))]
#[patch("/{slug}/set-rating")]
pub async fn update_handler(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::RatingForm>,
    service: web::Data<InteractionService>,
) -> Result<impl Responder> {
    submit(path, user, form, service, RatingIntent::Update).await
}

async fn submit(
    path: web::Path<(String,)>,
    user: Option<web::ReqData<Arc<models::User>>>,
    form: web::Json<forms::RatingForm>,
    service: web::Data<InteractionService>,
    intent: RatingIntent,
) -> Result<web::Json<JsonResponse<models::Rating>>> {
    let actor = require_actor(user)?;
    let (slug,) = path.into_inner();
    let rating = service
        .submit_rating(&actor, &slug, form.rating, intent)
        .await?;

    let message = match intent {
        RatingIntent::Create => "Created",
        RatingIntent::Update => "Updated",
    };
    Ok(JsonResponse::build().set_id(rating.id).set_item(rating).ok(message))
}
