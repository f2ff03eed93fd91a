use std::sync::Arc;

use super::action::{Action, Effect, key_action};
use super::reducer::reduce;
use super::state::{Phase, PresentationState};
use super::view::SlideView;
use crate::deck::{Deck, DeckSource, LoadError};

/// The presentation controller: a loaded deck plus the state machine over it.
#[derive(Debug, Clone)]
pub struct Presenter {
    phase: Phase,
    deck: Option<Arc<Deck>>,
    state: PresentationState,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    /// A presenter waiting for its deck.
    pub fn new() -> Self {
        Self { phase: Phase::Loading, deck: None, state: PresentationState::default() }
    }

    /// Run the initialisation protocol against `source`.
    pub async fn load(source: &DeckSource) -> Self {
        log::info!("Loading deck from {source}");
        Self::new().finish_load(source.load().await)
    }

    /// Leave `Loading` with the outcome of the deck fetch.
    pub fn finish_load(self, result: Result<Deck, LoadError>) -> Self {
        if self.phase != Phase::Loading {
            return self;
        }
        match result {
            Ok(deck) => {
                log::info!("Loaded \"{}\" with {} slides", deck.title(), deck.len());
                Self::resume(Arc::new(deck), PresentationState::default())
            }
            Err(e) => {
                log::error!("Deck load failed: {e}");
                Self { phase: Phase::Error(e.to_string()), deck: None, state: self.state }
            }
        }
    }

    /// Continue presenting `deck` from a previously stored state.
    pub fn resume(deck: Arc<Deck>, state: PresentationState) -> Self {
        let state = state.clamped(deck.len());
        Self { phase: Phase::Presenting, deck: Some(deck), state }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn deck(&self) -> Option<&Arc<Deck>> {
        self.deck.as_ref()
    }

    /// Apply an action. Ignored outside `Presenting`.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let Some(deck) = self.presenting_deck() else {
            return Vec::new();
        };
        let transition = reduce(&self.state, deck.len(), action);
        self.state = transition.state;
        transition.effects
    }

    /// Dispatch the action bound to a DOM key. `None` when the key is unbound.
    pub fn press(&mut self, key: &str) -> Option<Vec<Effect>> {
        let action = key_action(key)?;
        Some(self.dispatch(action))
    }

    pub fn view(&self) -> Option<SlideView> {
        self.presenting_deck()
            .map(|deck| SlideView::project(&self.state, deck))
    }

    fn presenting_deck(&self) -> Option<&Arc<Deck>> {
        match self.phase {
            Phase::Presenting => self.deck.as_ref(),
            _ => None,
        }
    }
}
