use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::routes;
use crate::services::{InteractionService, ProductService};
use crate::store::Store;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn Store>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let interaction_service = web::Data::new(InteractionService::new(store.clone()));
    let product_service = web::Data::new(ProductService::new(store));

    let oauth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let oauth_http_client = web::Data::new(oauth_http_client);

    let oauth_cache = web::Data::new(middleware::authentication::OAuthCache::new(
        Duration::from_secs(settings.auth_cache_ttl_secs),
    ));
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "invalid body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => format!("invalid body: {}", err),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/product")
                    .service(routes::product::list_handler)
                    .service(routes::product::add_handler)
                    .service(routes::product::item_handler)
                    .service(routes::product::update_handler)
                    .service(routes::product::delete_handler)
                    .service(routes::comment::add_handler)
                    .service(routes::rating::create_handler)
                    .service(routes::rating::update_handler)
                    .service(routes::like::like_handler)
                    .service(routes::like::unlike_handler),
            )
            .service(web::scope("/comment").service(routes::comment::delete_handler))
            .service(web::scope("/liked").service(routes::liked_handler))
            .app_data(json_config.clone())
            .app_data(interaction_service.clone())
            .app_data(product_service.clone())
            .app_data(oauth_http_client.clone())
            .app_data(oauth_cache.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
