use serde::{Deserialize, Serialize};

/// Colour scheme of the viewer and its code highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Name of the bundled syntect theme used for code blocks.
    pub fn highlight_theme(self) -> &'static str {
        match self {
            Theme::Dark => "base16-ocean.dark",
            Theme::Light => "InspiredGitHub",
        }
    }
}

/// Per-session presentation state. Only the reducer changes it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresentationState {
    pub current_index: usize,
    pub notes_visible: bool,
    pub fullscreen_active: bool,
    pub help_visible: bool,
    pub overview_visible: bool,
    pub overview_highlight: Option<usize>,
    pub theme: Theme,
}

impl PresentationState {
    /// Pull indices back inside a deck of `len` slides.
    pub fn clamped(mut self, len: usize) -> Self {
        let last = len.saturating_sub(1);
        self.current_index = self.current_index.min(last);
        self.overview_highlight = self.overview_highlight.filter(|i| *i < len);
        self
    }
}

/// Lifecycle of a presenter. `Error` and `Presenting` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error(String),
    Presenting,
}
