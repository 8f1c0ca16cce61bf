use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use employee_api::config::Config;
use employee_api::store::EmployeeStore;
use employee_api::store::mongo::MongoEmployeeStore;
use employee_api::{routes, spa};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    info!("Server starting...");

    let store = MongoEmployeeStore::connect(&config.mongo_url).await?;
    info!("MongoDB connected successfully");

    // One handle stays behind for teardown once the server exits.
    let store_handle = store.clone();
    let shared: Arc<dyn EmployeeStore> = Arc::new(store);

    let server_addr = config.server_addr.clone();
    let static_dir = config.static_dir.clone();

    info!(addr = %server_addr, "Server is running");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(Data::from(shared.clone()))
            .configure(routes::configure)
            .service(spa::service(static_dir.clone()))
    })
    .bind(server_addr)?
    .run()
    .await?;

    store_handle.close().await;
    info!("MongoDB connection closed");

    Ok(())
}
