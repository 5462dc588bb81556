use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use bot::config::settings::Settings;
use bot::middleware::request_trace::RequestTrace;
use bot::middleware::structured_logger::StructuredLogger;
use bot::notify::http::HttpMessenger;
use bot::routes;
use bot::services::sweeper;
use bot::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via env_file or --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting roshambo bot on http://{}:{}",
        settings.host, settings.port
    );

    let messenger = Arc::new(HttpMessenger::new(&settings));
    let app_state = AppState::new(settings.clone(), messenger);

    // Background eviction of abandoned sessions; None when the TTL is 0.
    let _sweeper = sweeper::spawn(Arc::clone(&app_state.store), settings.session_ttl_secs);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
