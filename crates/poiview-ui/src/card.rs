//! Place cards.
//!
//! [`CardRenderer::build_card`] produces a [`CardView`]: the text to show and
//! the actions on offer. Actions are plain data; a host calls
//! [`CardRenderer::invoke`] when the user triggers one.

use std::sync::Arc;

use poiview_services::{FavoritesStore, Place, PlaceId, StorageError};
use poiview_weather::{distance_km, Coordinate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Favorite(PlaceId),
    /// Has no effect yet.
    Details(PlaceId),
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Favorite(_) => "⭐ Add to favorites",
            CardAction::Details(_) => "Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    FavoriteAdded,
    AlreadyFavorite,
    NoEffect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub place_id: PlaceId,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    /// Present only when the user position is known
    pub distance: Option<String>,
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone)]
pub struct CardRenderer {
    favorites: Arc<FavoritesStore>,
}

impl CardRenderer {
    pub fn new(favorites: Arc<FavoritesStore>) -> Self {
        Self { favorites }
    }

    pub fn build_card(&self, place: &Place, user: Option<&Coordinate>) -> CardView {
        let distance =
            user.map(|user| format!("Distance: {} km", distance_km(user, &place.position())));

        CardView {
            place_id: place.id.clone(),
            image: place.image.clone(),
            image_alt: place.name.clone(),
            title: place.name.clone(),
            description: place.description.clone(),
            distance,
            actions: vec![
                CardAction::Favorite(place.id.clone()),
                CardAction::Details(place.id.clone()),
            ],
        }
    }

    pub fn invoke(&self, action: &CardAction) -> Result<ActionOutcome, StorageError> {
        match action {
            CardAction::Favorite(id) => {
                if self.favorites.add_favorite(id)? {
                    Ok(ActionOutcome::FavoriteAdded)
                } else {
                    Ok(ActionOutcome::AlreadyFavorite)
                }
            }
            CardAction::Details(id) => {
                tracing::debug!("Details requested for place {}", id);
                Ok(ActionOutcome::NoEffect)
            }
        }
    }
}
