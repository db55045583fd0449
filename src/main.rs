use std::sync::Arc;

use llm_workbench::app::create_app;
use llm_workbench::config;
use llm_workbench::gateway::Gateway;
use llm_workbench::store::Stores;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing LLM workbench...");

    let config = config::load_config().expect("Failed to load config");
    let gateway = Arc::new(Gateway::from_config(&config).expect("Failed to build HTTP client"));
    let stores = Stores::open(&config.data_dir).expect("Failed to open record stores");

    log::info!(
        "upstream server: {}, data directory: {}",
        gateway.base_url(),
        config.data_dir.display()
    );

    let app_factory = move || create_app(gateway.clone(), stores.clone());

    let server = actix_web::HttpServer::new(app_factory);

    server.bind((config.host.as_str(), config.port))?.run().await
}
