use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

use crate::deck::{Deck, DeckSource};
use crate::handlers;

/// Shared application data.
pub struct AppState {
    pub source: DeckSource,
    pub decks: DeckStore,
}

impl AppState {
    pub fn new(source: DeckSource) -> Self {
        Self { source, decks: DeckStore::default() }
    }
}

/// Loaded decks, keyed by content fingerprint.
///
/// A session keeps the key of the deck it started with, so a later `start`
/// from another session adds an entry and never swaps that deck.
#[derive(Default)]
pub struct DeckStore {
    decks: RwLock<HashMap<u64, Arc<Deck>>>,
}

impl DeckStore {
    pub fn get(&self, id: u64) -> Option<Arc<Deck>> {
        self.decks.read().unwrap_or_else(|e| e.into_inner()).get(&id).cloned()
    }

    /// Store `deck` and return the key to find it again.
    pub fn insert(&self, deck: Arc<Deck>) -> u64 {
        let id = deck.fingerprint();
        self.decks
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(id)
            .or_insert(deck);
        id
    }
}

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// All routes of the viewer, with static assets served from `static_dir`.
pub fn routes(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(Files::new("/static", static_dir))
            .route("/", web::get().to(handlers::viewer::index))
            .route("/health", web::get().to(handlers::api::health))
            .route("/api/slides", web::get().to(handlers::api::slides))
            .route("/highlight/{theme}.css", web::get().to(handlers::viewer::highlight_css))
            .service(
                web::scope("/api/presenter")
                    .route("/start", web::post().to(handlers::presenter::start))
                    .route("/key", web::post().to(handlers::presenter::key))
                    .route("/action", web::post().to(handlers::presenter::action)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::viewer::not_found));
    }
}
