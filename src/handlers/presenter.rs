use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::errors::AppError;
use crate::presentation::{Action, Effect, Phase, PresentationState, Presenter, SlideView, suppresses_default};

const STATE_KEY: &str = "presentation";
/// Fingerprint of the deck this session started with.
const DECK_KEY: &str = "deck";

#[derive(Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

/// Envelope returned by every presenter endpoint.
#[derive(Serialize)]
pub struct PresenterResponse {
    pub phase: &'static str,
    /// Whether the input mapped to an action.
    pub handled: bool,
    pub prevent_default: bool,
    pub effects: Vec<Effect>,
    pub view: Option<SlideView>,
}

/// POST /api/presenter/start - Load the deck and reset this session's state.
pub async fn start(
    state: web::Data<AppState>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let presenter = Presenter::load(&state.source).await;

    if let Phase::Error(message) = presenter.phase() {
        session.remove(STATE_KEY);
        session.remove(DECK_KEY);
        let body = serde_json::json!({ "phase": "error", "error": message });
        return Ok(HttpResponse::BadGateway().json(body));
    }

    if let Some(deck) = presenter.deck() {
        session.insert(DECK_KEY, state.decks.insert(deck.clone()))?;
    }
    session.insert(STATE_KEY, presenter.state())?;

    Ok(HttpResponse::Ok().json(PresenterResponse {
        phase: "presenting",
        handled: true,
        prevent_default: false,
        effects: Vec::new(),
        view: presenter.view(),
    }))
}

/// POST /api/presenter/key - Apply the action bound to a keyboard key.
pub async fn key(
    state: web::Data<AppState>,
    session: Session,
    body: web::Json<KeyRequest>,
) -> Result<HttpResponse, AppError> {
    let mut presenter = resume(&state, &session)?;
    let before = presenter.state().clone();

    let effects = presenter.press(&body.key);
    let handled = effects.is_some();
    persist(&session, &before, &presenter)?;

    Ok(HttpResponse::Ok().json(PresenterResponse {
        phase: "presenting",
        handled,
        prevent_default: suppresses_default(&body.key),
        effects: effects.unwrap_or_default(),
        view: presenter.view(),
    }))
}

/// POST /api/presenter/action - Apply a pointer or platform action.
pub async fn action(
    state: web::Data<AppState>,
    session: Session,
    body: web::Json<Action>,
) -> Result<HttpResponse, AppError> {
    let mut presenter = resume(&state, &session)?;
    let before = presenter.state().clone();

    let effects = presenter.dispatch(body.into_inner());
    persist(&session, &before, &presenter)?;

    Ok(HttpResponse::Ok().json(PresenterResponse {
        phase: "presenting",
        handled: true,
        prevent_default: false,
        effects,
        view: presenter.view(),
    }))
}

fn resume(state: &AppState, session: &Session) -> Result<Presenter, AppError> {
    let deck = session
        .get::<u64>(DECK_KEY)?
        .and_then(|id| state.decks.get(id))
        .ok_or(AppError::NotStarted)?;
    let stored = session
        .get::<PresentationState>(STATE_KEY)?
        .ok_or(AppError::NotStarted)?;
    Ok(Presenter::resume(deck, stored))
}

fn persist(session: &Session, before: &PresentationState, presenter: &Presenter) -> Result<(), AppError> {
    if presenter.state() != before {
        session.insert(STATE_KEY, presenter.state())?;
    }
    Ok(())
}
