//! Render targets handed to the controller.
//!
//! The app writes to three mount points: a weather line, a general status
//! line, and a container receiving one card per place. Hosts supply their own
//! implementations; [`MemorySurface`] keeps everything in memory.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::card::CardView;

pub trait TextSlot: Send + Sync {
    fn set_text(&self, text: &str);
}

pub trait CardContainer: Send + Sync {
    fn append(&self, card: CardView);
}

/// The three mount points used by [`crate::AppController`].
#[derive(Clone)]
pub struct Mounts {
    pub weather: Arc<dyn TextSlot>,
    pub status: Arc<dyn TextSlot>,
    pub places: Arc<dyn CardContainer>,
}

#[derive(Debug, Default)]
pub struct TextBuffer {
    text: Mutex<Option<String>>,
}

impl TextBuffer {
    /// `None` until something is written.
    pub fn text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

impl TextSlot for TextBuffer {
    fn set_text(&self, text: &str) {
        *self.text.lock() = Some(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct CardList {
    cards: Mutex<Vec<CardView>>,
}

impl CardList {
    pub fn cards(&self) -> Vec<CardView> {
        self.cards.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.cards.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.lock().is_empty()
    }
}

impl CardContainer for CardList {
    fn append(&self, card: CardView) {
        self.cards.lock().push(card);
    }
}

/// In-memory surface backing all three mounts
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    pub weather: Arc<TextBuffer>,
    pub status: Arc<TextBuffer>,
    pub places: Arc<CardList>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounts(&self) -> Mounts {
        Mounts {
            weather: self.weather.clone(),
            status: self.status.clone(),
            places: self.places.clone(),
        }
    }
}
