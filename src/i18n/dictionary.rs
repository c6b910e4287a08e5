//! Typed translation dictionary tree.

use std::collections::{
    BTreeSet,
    HashMap,
};

use serde_json::Value;

/// A node of a locale dictionary.
///
/// Dictionaries are arbitrarily nested JSON objects whose leaves are strings.
/// Arrays are kept so that numeric path segments (`items.0`) can address them;
/// numbers, booleans and null are kept as [`TranslationNode::Scalar`] and never
/// resolve to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    Text(String),
    Map(HashMap<String, TranslationNode>),
    List(Vec<TranslationNode>),
    Scalar(String),
}

/// Outcome of descending a dictionary along a key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The path ends on a string leaf.
    Text(&'a str),
    /// The path exists but ends on a mapping, list or non-string scalar.
    NotText,
    /// Some segment of the path does not exist.
    Missing,
}

impl From<Value> for TranslationNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect())
            }
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            other => Self::Scalar(other.to_string()),
        }
    }
}

impl Default for TranslationNode {
    fn default() -> Self {
        Self::Map(HashMap::new())
    }
}

impl TranslationNode {
    /// Returns the direct child addressed by `segment`, if any.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Map(map) => map.get(segment),
            Self::List(items) => {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                segment.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            Self::Text(_) | Self::Scalar(_) => None,
        }
    }

    /// Descends one segment at a time and reports where the path ends.
    pub fn lookup<'s, I>(&self, segments: I) -> Lookup<'_>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut node = self;
        for segment in segments {
            match node.child(segment) {
                Some(next) => node = next,
                None => return Lookup::Missing,
            }
        }

        match node {
            Self::Text(text) => Lookup::Text(text),
            Self::Map(_) | Self::List(_) | Self::Scalar(_) => Lookup::NotText,
        }
    }

    /// Collects every path that resolves to a string leaf, joined with `separator`.
    #[must_use]
    pub fn text_keys(&self, separator: &str) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        collect_text_keys(self, separator, None, &mut result);
        result
    }
}

/// Depth-first walk that appends the full key of every text leaf.
fn collect_text_keys(
    node: &TranslationNode,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeSet<String>,
) {
    match node {
        TranslationNode::Map(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                collect_text_keys(value, separator, Some(&full_key), result);
            }
        }
        TranslationNode::List(items) => {
            for (index, value) in items.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| index.to_string(), |p| format!("{p}{separator}{index}"));
                collect_text_keys(value, separator, Some(&full_key), result);
            }
        }
        TranslationNode::Text(_) => {
            if let Some(key) = prefix {
                result.insert(key.to_string());
            }
        }
        TranslationNode::Scalar(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[fixture]
    fn dictionary() -> TranslationNode {
        TranslationNode::from(json!({
            "common": {
                "getInTouch": "Get in touch",
                "learnMore": "Learn more"
            },
            "nav": {
                "items": ["Home", "About"]
            },
            "stats": {
                "clients": 120,
                "enabled": true,
                "none": null
            }
        }))
    }

    #[rstest]
    #[case::nested_leaf("common.getInTouch", Lookup::Text("Get in touch"))]
    #[case::list_index("nav.items.1", Lookup::Text("About"))]
    #[case::branch("common", Lookup::NotText)]
    #[case::list_branch("nav.items", Lookup::NotText)]
    #[case::number_leaf("stats.clients", Lookup::NotText)]
    #[case::null_leaf("stats.none", Lookup::NotText)]
    #[case::missing_leaf("common.missing", Lookup::Missing)]
    #[case::missing_root("footer.title", Lookup::Missing)]
    #[case::past_leaf("common.getInTouch.extra", Lookup::Missing)]
    #[case::list_out_of_range("nav.items.5", Lookup::Missing)]
    #[case::list_signed_index("nav.items.+1", Lookup::Missing)]
    fn lookup_cases(
        dictionary: TranslationNode,
        #[case] key: &str,
        #[case] expected: Lookup<'static>,
    ) {
        assert_eq!(dictionary.lookup(key.split('.')), expected);
    }

    #[rstest]
    fn lookup_with_no_segments_is_not_text(dictionary: TranslationNode) {
        assert_eq!(dictionary.lookup(std::iter::empty()), Lookup::NotText);
    }

    #[rstest]
    fn text_keys_lists_only_string_leaves(dictionary: TranslationNode) {
        let keys = dictionary.text_keys(".");

        assert_that!(
            keys.into_iter().collect::<Vec<_>>(),
            elements_are![
                eq("common.getInTouch"),
                eq("common.learnMore"),
                eq("nav.items.0"),
                eq("nav.items.1"),
            ]
        );
    }

    #[rstest]
    fn default_node_is_empty_map() {
        assert_eq!(TranslationNode::default().lookup(["a"]), Lookup::Missing);
    }
}
