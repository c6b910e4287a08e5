//! Generic queries shared by both entity kinds.

use std::collections::HashSet;

use super::{
    Location,
    Service,
};

/// An entity addressable by a stable, unique id.
pub trait Entity {
    /// Unique, URL-safe identifier.
    fn id(&self) -> &str;
}

impl Entity for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

/// First entity whose id equals `id`.
#[must_use]
pub fn find_by_id<'a, T: Entity>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Flatten an attribute across all entities, dropping repeated values.
///
/// Values are returned in first-seen order.
pub fn distinct_values<'a, T, I, F>(items: &'a [T], extract: F) -> Vec<String>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for item in items {
        for value in extract(item) {
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// Entities other than `current_id`, ordered by how many attribute values they
/// share with it, at most `limit` of them.
///
/// The sort is stable, so ties keep collection order. Unknown `current_id`
/// yields an empty list.
pub fn rank_by_shared<'a, T, F>(
    items: &'a [T],
    current_id: &str,
    limit: usize,
    attribute: F,
) -> Vec<&'a T>
where
    T: Entity,
    F: Fn(&T) -> &[String],
{
    let Some(current) = find_by_id(items, current_id) else {
        return Vec::new();
    };
    let current_values: HashSet<&str> = attribute(current).iter().map(String::as_str).collect();

    let mut scored: Vec<(usize, &T)> = items
        .iter()
        .filter(|item| item.id() != current_id)
        .map(|item| {
            let values: HashSet<&str> = attribute(item).iter().map(String::as_str).collect();
            (values.intersection(&current_values).count(), item)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, item)| item).collect()
}
