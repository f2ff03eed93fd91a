//! Shared test infrastructure for deck, presenter and HTTP tests.
//!
//! # Helpers
//! - `write_deck()` - markdown deck in a temp dir (keep the `TempDir` alive)
//! - `init_app!` - in-process viewer service for a `DeckSource`
//! - `post_json!` - POST JSON, carrying the session cookie between calls
//! - `serve_producer()` - real HTTP producer answering `/api/slides` with a fixed response
#![allow(dead_code, unused_macros)]

use std::path::PathBuf;

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServerHandle, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use tempfile::TempDir;

// ============================================================================
// TEST DECKS
// ============================================================================

pub const DEMO_DECK: &str = "# Demo

First slide

---

# Second Slide

Second slide content

<!--NOTES:
Test notes
-->

---

# Third Slide

```rust
fn main() {}
```";

/// The three-slide deck from the navigation walkthrough.
pub const ABC_DECK: &str = "# A\n---\n# B\n---\n# C";

// ============================================================================
// SETUP
// ============================================================================

/// Write `contents` to `<tempdir>/<name>`.
///
/// Returns the TempDir, which must be kept alive for the file to exist.
pub fn write_deck(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write deck");
    (dir, path)
}

pub fn test_key() -> Key {
    Key::from(&[42u8; 64])
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(markdeck::config::default_static_dir())
}

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
}

/// Start a real producer whose `/api/slides` always answers `status` with `body`.
/// Returns its base URL and a handle to stop it.
pub async fn serve_producer(status: u16, body: &'static str) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new().route(
            "/api/slides",
            web::get().to(move || async move {
                HttpResponse::build(StatusCode::from_u16(status).expect("valid status"))
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test producer");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}"), handle)
}

// ============================================================================
// SERVICE MACROS
// ============================================================================

macro_rules! init_app {
    ($source:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(markdeck::app::session_middleware(common::test_key()))
                .app_data(actix_web::web::Data::new(markdeck::app::AppState::new($source)))
                .configure(markdeck::app::routes(common::static_dir())),
        )
        .await
    };
}

/// Evaluates to `(StatusCode, serde_json::Value)`; updates `$cookie` when the session changes.
macro_rules! post_json {
    ($app:expr, $cookie:expr, $uri:expr, $body:expr) => {{
        let mut req = actix_web::test::TestRequest::post().uri($uri).set_json($body);
        if let Some(c) = $cookie.as_ref() {
            req = req.cookie(c.clone());
        }
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        if let Some(c) = common::session_cookie(&resp) {
            $cookie = Some(c);
        }
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}
