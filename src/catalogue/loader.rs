//! Reading the catalogue data files.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    CatalogueError,
    Entity,
    Location,
    Service,
};

/// Whether `id` can appear in a URL path segment without percent-encoding.
///
/// Allowed characters are the RFC 3986 unreserved set: `A-Z a-z 0-9 - . _ ~`.
#[must_use]
pub fn is_url_safe(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b"-._~".contains(&b))
}

/// Parse the JSON array at `path` and validate the entity ids.
///
/// Each element is converted on its own. An element that does not match the
/// entity schema, has an id that is not URL-safe, or repeats an earlier id is
/// dropped with a warning; the rest of the file is kept.
///
/// # Errors
/// Returns error if the file cannot be read or is not a JSON array.
pub fn try_load_collection<T>(path: &Path) -> Result<Vec<T>, CatalogueError>
where
    T: DeserializeOwned + Entity,
{
    let content = std::fs::read_to_string(path)
        .map_err(|source| CatalogueError::Io { path: path.to_path_buf(), source })?;

    let elements: Vec<Value> = serde_json::from_str(&content)
        .map_err(|source| CatalogueError::Parse { path: path.to_path_buf(), source })?;

    let entities = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<T>(element) {
            Ok(entity) => Some(entity),
            Err(e) => {
                tracing::warn!("Dropping entity #{} in {:?}: {}", index, path, e);
                None
            }
        })
        .collect();

    Ok(retain_valid_ids(entities, path))
}

/// Drops entities whose id is not URL-safe or already taken, keeping the first.
fn retain_valid_ids<T: Entity>(entities: Vec<T>, path: &Path) -> Vec<T> {
    let mut seen = HashSet::new();
    entities
        .into_iter()
        .filter(|entity| {
            let id = entity.id();
            if !is_url_safe(id) {
                tracing::warn!("Dropping entity with non URL-safe id {:?} in {:?}", id, path);
                return false;
            }
            if !seen.insert(id.to_string()) {
                tracing::warn!("Dropping duplicate id {:?} in {:?}", id, path);
                return false;
            }
            true
        })
        .collect()
}

/// Parse the collection at `path`, or return an empty list on failure.
///
/// The failure is logged. Every call reads the file again.
#[must_use]
pub fn load_collection<T>(path: &Path) -> Vec<T>
where
    T: DeserializeOwned + Entity,
{
    try_load_collection(path).unwrap_or_else(|e| {
        tracing::error!("{}", e);
        Vec::new()
    })
}

#[must_use]
pub fn load_services(path: &Path) -> Vec<Service> {
    load_collection(path)
}

#[must_use]
pub fn load_locations(path: &Path) -> Vec<Location> {
    load_collection(path)
}
