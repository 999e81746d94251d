use catalog::configuration::{get_configuration, StoreBackend};
use catalog::startup::run;
use catalog::store::{MemoryStore, PgStore, Store};
use catalog::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("catalog".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration()?;

    let store: Arc<dyn Store> = match settings.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Postgres => {
            tracing::info!(
                db_host = %settings.database.host,
                db_port = settings.database.port,
                db_name = %settings.database.database_name,
                "Connecting to PostgreSQL"
            );

            let pg_pool = PgPoolOptions::new()
                .max_connections(settings.database.max_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect(&settings.database.connection_string())
                .await?;
            let store = PgStore::new(pg_pool);
            store.migrate().await?;
            Arc::new(store)
        }
    };

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, store, settings).await?.await?;
    Ok(())
}
