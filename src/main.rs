use actix_web::HttpServer;
use std::process;
use std::sync::Arc;

use taskpad::config::Config;
use taskpad::store::PgStore;
use taskpad::{build_app, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let store = match PgStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("could not connect to the database: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = store.migrate().await {
        log::error!("{}", e);
        process::exit(1);
    }
    log::info!("database ready");

    let store = Arc::new(store);
    let state = match AppState::new(
        store.clone(),
        store,
        &config.jwt_secret,
        config.bcrypt_cost,
    ) {
        Ok(state) => state,
        Err(e) => {
            log::error!("could not initialise services: {}", e);
            process::exit(1);
        }
    };

    log::info!("Starting task API at {}", config.server_url());
    HttpServer::new(move || build_app(state.clone()))
        .bind((config.server_host.as_str(), config.server_port))?
        .run()
        .await
}
