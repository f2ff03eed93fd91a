use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::state::{PresentationState, Theme};
use crate::deck::{Deck, Slide};
use crate::markdown;

pub const NOTES_PLACEHOLDER: &str = "<em>No notes for this slide</em>";

const LABEL_MAX_CHARS: usize = 48;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.+?)[ \t#]*$").expect("valid heading pattern"));

/// Everything the viewer needs to draw one state of the presentation.
#[derive(Debug, Clone, Serialize)]
pub struct SlideView {
    pub title: String,
    pub document_title: String,
    pub index: usize,
    /// 1-based label for the progress counter.
    pub current: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub content_html: String,
    pub notes_html: String,
    pub notes_visible: bool,
    pub help_visible: bool,
    pub fullscreen: bool,
    pub theme: Theme,
    pub overview: Option<Vec<OverviewItem>>,
}

/// One thumbnail in the slide grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewItem {
    pub index: usize,
    pub number: usize,
    pub label: String,
    pub current: bool,
    pub highlighted: bool,
}

impl SlideView {
    /// Project `(state, deck)` into a view. `state` must already be clamped to the deck.
    pub fn project(state: &PresentationState, deck: &Deck) -> Self {
        let total = deck.len();
        let index = state.current_index.min(total.saturating_sub(1));
        let slide = &deck.slides()[index];

        let notes_html = match slide.notes.as_deref() {
            Some(notes) => markdown::render(notes),
            None => NOTES_PLACEHOLDER.to_string(),
        };

        let overview = state.overview_visible.then(|| {
            deck.slides()
                .iter()
                .enumerate()
                .map(|(i, s)| OverviewItem {
                    index: i,
                    number: i + 1,
                    label: slide_label(s, i),
                    current: i == index,
                    highlighted: state.overview_highlight == Some(i),
                })
                .collect()
        });

        Self {
            title: deck.title().to_string(),
            document_title: document_title(deck.title()),
            index,
            current: index + 1,
            total,
            progress_percent: progress_percent(index, total),
            content_html: markdown::render(&slide.content),
            notes_html,
            notes_visible: state.notes_visible,
            help_visible: state.help_visible,
            fullscreen: state.fullscreen_active,
            theme: state.theme,
            overview,
        }
    }
}

pub fn document_title(deck_title: &str) -> String {
    format!("{deck_title} - MarkDeck")
}

pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 / total as f64 * 100.0
}

/// Short plain-text label for a grid thumbnail.
fn slide_label(slide: &Slide, index: usize) -> String {
    let text = HEADING_RE
        .captures(&slide.content)
        .map(|caps| caps[1].to_string())
        .or_else(|| {
            slide
                .content
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty() && !l.starts_with('<'))
                .map(str::to_string)
        });

    match text {
        Some(text) if text.chars().count() > LABEL_MAX_CHARS => {
            let cut: String = text.chars().take(LABEL_MAX_CHARS - 1).collect();
            format!("{}…", cut.trim_end())
        }
        Some(text) => text,
        None => format!("Slide {}", index + 1),
    }
}
