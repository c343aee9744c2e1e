//! Favorites survive across store instances when backed by a file.

use std::sync::Arc;

use poiview_services::{FavoritesStore, JsonFileStore, KeyValueStore, PlaceId, FAVORITES_KEY};

#[test]
fn test_favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let favorites = FavoritesStore::new(Arc::new(JsonFileStore::new(&path)));
        assert!(favorites.add_favorite(&PlaceId::Int(1)).unwrap());
        assert!(favorites.add_favorite(&PlaceId::from("louvre")).unwrap());
    }

    let kv = Arc::new(JsonFileStore::new(&path));
    let favorites = FavoritesStore::new(kv.clone());
    assert!(!favorites.add_favorite(&PlaceId::Int(1)).unwrap());

    let raw = kv.get(FAVORITES_KEY).unwrap().unwrap();
    let ids: Vec<PlaceId> = serde_json::from_str(&raw).unwrap();
    assert_eq!(ids, vec![PlaceId::Int(1), PlaceId::from("louvre")]);
}

#[test]
fn test_same_id_twice_stored_once() {
    let dir = tempfile::tempdir().unwrap();
    let kv = Arc::new(JsonFileStore::new(dir.path().join("storage.json")));
    let favorites = FavoritesStore::new(kv.clone());

    favorites.add_favorite(&PlaceId::Int(9)).unwrap();
    favorites.add_favorite(&PlaceId::Int(9)).unwrap();

    let raw = kv.get(FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(raw, "[9]");
}
