use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;

use markdeck::app::{self, AppState};
use markdeck::config::{self, Cli};
use markdeck::deck::DeckSource;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let source = cli.deck_source();
    if let DeckSource::File(path) = &source {
        if !path.exists() {
            log::warn!("{} does not exist yet; the viewer will report it on load", path.display());
        }
    }

    let state = web::Data::new(AppState::new(source));
    let secret_key = config::session_key();
    let static_dir = cli.static_dir.clone();

    log::info!("Presenting {} at http://{}:{}", state.source, cli.host, cli.port);

    HttpServer::new(move || {
        App::new()
            .wrap(app::session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(app::routes(static_dir.clone()))
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await
}
