use serde::{Deserialize, Serialize};

/// Input to the reducer. Indices are signed because they arrive from the
/// browser unchecked; the reducer absorbs anything out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Next,
    Previous,
    GoTo { index: i64 },
    First,
    Last,
    ToggleNotes,
    ToggleHelp,
    CloseHelp,
    ToggleFullscreen,
    FullscreenChanged { active: bool },
    ToggleOverview,
    HighlightSlide { index: i64 },
    SelectSlide { index: i64 },
    ToggleTheme,
    Escape,
}

/// Side effects the UI layer must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    RequestFullscreen,
    ExitFullscreen,
    ResetScroll,
}

/// A keyboard binding, shown in the help overlay.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    /// DOM `KeyboardEvent.key` values, case-sensitive.
    pub keys: &'static [&'static str],
    pub label: &'static str,
    pub description: &'static str,
    pub action: Action,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: &["ArrowRight", " ", "PageDown"],
        label: "→ / Space / PgDn",
        description: "Next slide",
        action: Action::Next,
    },
    KeyBinding {
        keys: &["ArrowLeft", "PageUp"],
        label: "← / PgUp",
        description: "Previous slide",
        action: Action::Previous,
    },
    KeyBinding { keys: &["Home"], label: "Home", description: "First slide", action: Action::First },
    KeyBinding { keys: &["End"], label: "End", description: "Last slide", action: Action::Last },
    KeyBinding {
        keys: &["f", "F"],
        label: "F",
        description: "Toggle fullscreen",
        action: Action::ToggleFullscreen,
    },
    KeyBinding {
        keys: &["s", "S"],
        label: "S",
        description: "Toggle speaker notes",
        action: Action::ToggleNotes,
    },
    KeyBinding {
        keys: &["o", "O"],
        label: "O",
        description: "Toggle slide overview",
        action: Action::ToggleOverview,
    },
    KeyBinding {
        keys: &["t", "T"],
        label: "T",
        description: "Switch light/dark theme",
        action: Action::ToggleTheme,
    },
    KeyBinding { keys: &["?"], label: "?", description: "Toggle this help", action: Action::ToggleHelp },
    KeyBinding {
        keys: &["Escape"],
        label: "Esc",
        description: "Exit fullscreen or close overlay",
        action: Action::Escape,
    },
];

/// Keys whose default browser handling (page scrolling) is always suppressed.
pub const SUPPRESSED_KEYS: &[&str] = &[" ", "ArrowLeft", "ArrowRight", "PageUp", "PageDown"];

/// Map a DOM key value to its action.
pub fn key_action(key: &str) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&key))
        .map(|binding| binding.action)
}

pub fn suppresses_default(key: &str) -> bool {
    SUPPRESSED_KEYS.contains(&key)
}

/// Every key value that maps to an action.
pub fn bound_keys() -> Vec<&'static str> {
    KEY_BINDINGS.iter().flat_map(|b| b.keys.iter().copied()).collect()
}
