use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::LoadError;

/// One markdown slide with optional speaker notes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slide {
    pub content: String,
    pub notes: Option<String>,
}

impl Slide {
    /// Blank notes are normalised to `None`.
    pub fn new(content: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            content: content.into(),
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// A loaded presentation. Always holds at least one slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Returns `None` for an empty slide list.
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self { title: title.into(), slides })
    }

    /// Validate a wire payload. `slides.len()` is authoritative; `total` must agree with it.
    pub fn from_payload(payload: DeckPayload) -> Result<Self, LoadError> {
        if payload.total == 0 || payload.slides.is_empty() {
            return Err(LoadError::Empty);
        }
        if payload.total != payload.slides.len() {
            return Err(LoadError::TotalMismatch {
                total: payload.total,
                actual: payload.slides.len(),
            });
        }
        let slides = payload
            .slides
            .into_iter()
            .map(|s| Slide::new(s.content, s.notes))
            .collect();
        Deck::new(payload.title, slides).ok_or(LoadError::Empty)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Content hash; equal decks share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// JSON body of `GET /api/slides`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPayload {
    pub title: String,
    pub total: usize,
    pub slides: Vec<SlidePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidePayload {
    #[serde(default)]
    pub id: Option<usize>,
    pub content: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DeckPayload {
    pub fn from_slides(title: impl Into<String>, slides: &[Slide]) -> Self {
        Self {
            title: title.into(),
            total: slides.len(),
            slides: slides
                .iter()
                .enumerate()
                .map(|(i, s)| SlidePayload {
                    id: Some(i),
                    content: s.content.clone(),
                    notes: s.notes.clone(),
                })
                .collect(),
        }
    }
}
