pub mod catalog;
pub mod favorites;
pub mod place;
pub mod storage;

pub use catalog::{CatalogError, CatalogSource, PlaceCatalogLoader};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use place::{Place, PlaceId};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
