/// Presentation controller tests: initialisation protocol against real deck
/// sources, then keyboard-driven navigation without any HTTP layer.
use std::sync::Arc;

use markdeck::deck::{Deck, DeckSource, LoadError, Slide};
use markdeck::presentation::{Action, Effect, Phase, PresentationState, Presenter};

mod common;
use common::{ABC_DECK, DEMO_DECK, serve_producer, write_deck};

fn abc() -> Arc<Deck> {
    let slides = ["# A", "# B", "# C"].map(|c| Slide::new(c, None)).to_vec();
    Arc::new(Deck::new("Demo", slides).expect("non-empty deck"))
}

// ---------------------------------------------------------------------------
// Initialisation
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_load_from_file_starts_at_first_slide() {
    let (_dir, path) = write_deck("talk.md", DEMO_DECK);
    let presenter = Presenter::load(&DeckSource::File(path)).await;

    assert_eq!(presenter.phase(), &Phase::Presenting);
    assert_eq!(presenter.state(), &PresentationState::default());

    let view = presenter.view().expect("presenting has a view");
    assert_eq!(view.document_title, "Demo - MarkDeck");
    assert_eq!(view.current, 1);
    assert_eq!(view.total, 3);
}

#[actix_web::test]
async fn test_missing_file_enters_error_phase() {
    let presenter = Presenter::load(&DeckSource::File("/nonexistent/talk.md".into())).await;
    match presenter.phase() {
        Phase::Error(message) => assert!(message.contains("File not found")),
        other => panic!("expected error phase, got {other:?}"),
    }
    assert!(presenter.view().is_none());
}

#[actix_web::test]
async fn test_remote_deck_is_loaded() {
    let body = r##"{"title":"Remote","total":2,"slides":[{"id":0,"content":"# One","notes":null},{"id":1,"content":"# Two","notes":"hi"}]}"##;
    let (base, handle) = serve_producer(200, body).await;
    let presenter = Presenter::load(&DeckSource::remote(&base)).await;
    handle.stop(false).await;

    assert_eq!(presenter.phase(), &Phase::Presenting);
    let deck = presenter.deck().expect("deck");
    assert_eq!(deck.title(), "Remote");
    assert_eq!(deck.slides()[1].notes.as_deref(), Some("hi"));
}

#[actix_web::test]
async fn test_remote_http_500_uses_status_text() {
    let (base, handle) = serve_producer(500, "{}").await;
    let result = DeckSource::remote(&base).load().await;
    handle.stop(false).await;

    let err = result.expect_err("500 must fail");
    assert!(matches!(err, LoadError::Status { status: 500, .. }));
    assert_eq!(err.to_string(), "Failed to load slides: Internal Server Error");
}

#[actix_web::test]
async fn test_remote_zero_total_is_error() {
    let (base, handle) = serve_producer(200, r#"{"title":"Empty","total":0,"slides":[]}"#).await;
    let mut presenter = Presenter::load(&DeckSource::remote(&base)).await;
    handle.stop(false).await;

    assert_eq!(presenter.phase(), &Phase::Error("No slides found in presentation".into()));
    assert!(presenter.dispatch(Action::Next).is_empty());
    assert!(presenter.press("ArrowRight").map(|e| e.is_empty()).unwrap_or(false));
}

#[actix_web::test]
async fn test_remote_total_mismatch_is_error() {
    let body = r##"{"title":"Bad","total":3,"slides":[{"content":"# One"}]}"##;
    let (base, handle) = serve_producer(200, body).await;
    let result = DeckSource::remote(&base).load().await;
    handle.stop(false).await;

    assert!(matches!(result, Err(LoadError::TotalMismatch { total: 3, actual: 1 })));
}

#[actix_web::test]
async fn test_unreachable_producer_is_network_error() {
    let result = DeckSource::remote("http://127.0.0.1:1").load().await;
    let err = result.expect_err("nothing listens on port 1");
    assert!(matches!(err, LoadError::Network(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_finish_load_only_leaves_loading_once() {
    let presenter = Presenter::new().finish_load(Err(LoadError::Empty));
    let again = presenter.clone().finish_load(Ok(Deck::new("x", vec![Slide::new("# x", None)]).unwrap()));
    assert_eq!(again.phase(), presenter.phase());
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_arrow_right_stops_at_last_slide() {
    let mut presenter = Presenter::resume(abc(), PresentationState::default());

    presenter.press("ArrowRight");
    presenter.press("ArrowRight");
    assert_eq!(presenter.state().current_index, 2);
    assert_eq!(presenter.view().map(|v| v.current), Some(3));

    let effects = presenter.press("ArrowRight").expect("bound key");
    assert!(effects.is_empty());
    assert_eq!(presenter.state().current_index, 2);
}

#[test]
fn test_next_from_start_reaches_end() {
    let mut presenter = Presenter::resume(abc(), PresentationState::default());
    for _ in 0..2 {
        assert_eq!(presenter.dispatch(Action::Next), vec![Effect::ResetScroll]);
    }
    assert_eq!(presenter.state().current_index, 2);
}

#[test]
fn test_home_end_and_escape_overlays() {
    let mut presenter = Presenter::resume(abc(), PresentationState::default());

    presenter.press("End");
    assert_eq!(presenter.state().current_index, 2);
    presenter.press("Home");
    assert_eq!(presenter.state().current_index, 0);

    presenter.press("?");
    assert!(presenter.state().help_visible);
    presenter.press("Escape");
    assert!(!presenter.state().help_visible);
}

#[test]
fn test_resume_clamps_stale_state() {
    let stale = PresentationState {
        current_index: 9,
        overview_visible: true,
        overview_highlight: Some(8),
        ..Default::default()
    };
    let presenter = Presenter::resume(abc(), stale);
    assert_eq!(presenter.state().current_index, 2);
    assert_eq!(presenter.state().overview_highlight, None);
}

#[actix_web::test]
async fn test_file_walkthrough_matches_deck() {
    let (_dir, path) = write_deck("abc.md", ABC_DECK);
    let mut presenter = Presenter::load(&DeckSource::File(path)).await;

    for expected in [1, 2, 2] {
        presenter.dispatch(Action::Next);
        assert_eq!(presenter.state().current_index, expected);
    }
    let view = presenter.view().expect("view");
    assert!((view.progress_percent - 100.0).abs() < f64::EPSILON);
    assert!(view.content_html.contains("<h1>C</h1>"));
}
