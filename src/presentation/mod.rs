//! The presentation controller.
//!
//! State changes go through the pure [`reduce`] function; [`SlideView`] is the
//! side-effect-free projection the viewer draws from. [`Presenter`] ties both
//! to a loaded deck and its `Loading` → `Presenting`/`Error` lifecycle.

mod action;
mod presenter;
mod reducer;
mod state;
mod view;

pub use action::{
    Action, Effect, KEY_BINDINGS, KeyBinding, SUPPRESSED_KEYS, bound_keys, key_action,
    suppresses_default,
};
pub use presenter::Presenter;
pub use reducer::{Transition, reduce};
pub use state::{Phase, PresentationState, Theme};
pub use view::{NOTES_PLACEHOLDER, OverviewItem, SlideView, document_title, progress_percent};
