use super::action::{Action, Effect};
use super::state::PresentationState;

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PresentationState,
    pub effects: Vec<Effect>,
}

/// Pure state machine for a deck of `len` slides.
pub fn reduce(state: &PresentationState, len: usize, action: Action) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match action {
        Action::Next => {
            if state.current_index + 1 < len {
                go_to(&mut next, &mut effects, len, state.current_index as i64 + 1);
            }
        }
        Action::Previous => {
            if state.current_index > 0 {
                go_to(&mut next, &mut effects, len, state.current_index as i64 - 1);
            }
        }
        Action::GoTo { index } => {
            go_to(&mut next, &mut effects, len, index);
        }
        Action::First => {
            go_to(&mut next, &mut effects, len, 0);
        }
        Action::Last => {
            go_to(&mut next, &mut effects, len, len as i64 - 1);
        }
        Action::ToggleNotes => next.notes_visible = !state.notes_visible,
        Action::ToggleHelp => next.help_visible = !state.help_visible,
        Action::CloseHelp => next.help_visible = false,
        // The flag only follows FullscreenChanged, never the request.
        Action::ToggleFullscreen => effects.push(if state.fullscreen_active {
            Effect::ExitFullscreen
        } else {
            Effect::RequestFullscreen
        }),
        Action::FullscreenChanged { active } => next.fullscreen_active = active,
        Action::ToggleOverview => {
            next.overview_visible = !state.overview_visible;
            next.overview_highlight = next.overview_visible.then_some(state.current_index);
        }
        Action::HighlightSlide { index } => {
            if state.overview_visible {
                if let Some(index) = in_range(index, len) {
                    next.overview_highlight = Some(index);
                }
            }
        }
        Action::SelectSlide { index } => {
            if go_to(&mut next, &mut effects, len, index) {
                next.overview_visible = false;
                next.overview_highlight = None;
            }
        }
        Action::ToggleTheme => next.theme = state.theme.toggled(),
        Action::Escape => {
            if state.fullscreen_active {
                effects.push(Effect::ExitFullscreen);
            } else if state.help_visible {
                next.help_visible = false;
            } else if state.overview_visible {
                next.overview_visible = false;
                next.overview_highlight = None;
            }
        }
    }

    Transition { state: next, effects }
}

/// The only bounds guard: out-of-range targets leave everything untouched.
fn go_to(state: &mut PresentationState, effects: &mut Vec<Effect>, len: usize, index: i64) -> bool {
    let Some(index) = in_range(index, len) else {
        return false;
    };
    state.current_index = index;
    effects.push(Effect::ResetScroll);
    true
}

fn in_range(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|i| *i < len)
}
