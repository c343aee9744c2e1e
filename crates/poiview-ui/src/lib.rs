//! Presentation-side orchestration for poiview.
//!
//! Everything here works on view-models and injected mount points; nothing
//! touches a real display. [`present`] turns a rendered surface into text.

pub mod card;
pub mod controller;
pub mod error_mapping;
pub mod mount;
pub mod present;

pub use card::{ActionOutcome, CardAction, CardRenderer, CardView};
pub use controller::{AppController, AppState, LocationStatus, RunSummary};
pub use error_mapping::IntoAppError;
pub use mount::{CardContainer, CardList, MemorySurface, Mounts, TextBuffer, TextSlot};
