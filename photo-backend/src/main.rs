use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod photos;

use config::Config;
use photos::PhotoStore;

pub struct AppState {
    pub config: Config,
    pub store: Arc<PhotoStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Photo backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    log::info!("Metadata directory: {}", config.store.metadata_dir.display());
    log::info!("Asset directory: {}", config.store.asset_dir.display());
    log::info!("Image base path: {}", config.store.image_base_path);

    if let Err(e) = config.store.ensure_dirs() {
        log::error!("Error creating photo directories: {}", e);
    }

    let store = Arc::new(PhotoStore::new(config.store.clone()));
    let bind = (config.bind_host.clone(), config.port);

    log::info!("Server listening on http://{}:{}", bind.0, bind.1);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::vocabulary::config)
            .configure(controllers::photos::config)
            .configure(controllers::images::config)
    })
    .bind(bind)?
    .run();

    let server_handle = server.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Received Ctrl+C, shutting down...");
            server_handle.stop(true).await;
            log::info!("Shutdown complete");
        }
    });

    server.await
}
