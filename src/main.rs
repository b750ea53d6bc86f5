use actix_web::{App, HttpServer, web};

use storebot::db::establish_connection_pool;
use storebot::dedup::UpdateDedup;
use storebot::models::config::ServerConfig;
use storebot::repository::DieselRepository;
use storebot::routes;

fn load_config() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
        dedup_capacity: std::env::var("DEDUP_CAPACITY")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.dedup_capacity),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config();
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "storebot.db".to_string());

    let pool = establish_connection_pool(&database_url).map_err(|e| {
        log::error!("Failed to establish database pool: {e}");
        std::io::Error::other(e)
    })?;
    let repo = DieselRepository::new(pool);
    let dedup = web::Data::new(UpdateDedup::new(config.dedup_capacity));

    log::info!("Starting storebot on {}", config.bind_address);

    let bind_address = config.bind_address.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(dedup.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
