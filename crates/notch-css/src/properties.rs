//! Custom property names and the property map seen by a painter.
//!
//! [CSS Painting API § 4 Paint Invocation](https://www.w3.org/TR/css-paint-api-1/#paint-invocation)
//!
//! "The `StylePropertyMapReadOnly` ... containing only the properties listed
//! in `inputProperties`."

use std::collections::HashMap;

/// Shorthand: `<sides-x> [ / <sides-y> ]?`, each side list 1 to 4 lengths.
pub const BORDER_RADIUS_REVERSE: &str = "--border-radius-reverse";

/// Fill color of the painted box.
pub const BORDER_RADIUS_REVERSE_COLOR: &str = "--border-radius-reverse-color";

/// Top-left longhand: `<x> <y>?`.
pub const BORDER_RADIUS_REVERSE_TOP_LEFT: &str = "--border-radius-reverse-top-left";

/// Top-right longhand: `<x> <y>?`.
pub const BORDER_RADIUS_REVERSE_TOP_RIGHT: &str = "--border-radius-reverse-top-right";

/// Bottom-right longhand: `<x> <y>?`.
pub const BORDER_RADIUS_REVERSE_BOTTOM_RIGHT: &str = "--border-radius-reverse-bottom-right";

/// Bottom-left longhand: `<x> <y>?`.
pub const BORDER_RADIUS_REVERSE_BOTTOM_LEFT: &str = "--border-radius-reverse-bottom-left";

/// Every property the `border-radius-reverse` painter reads, in declaration order.
pub const INPUT_PROPERTIES: [&str; 6] = [
    BORDER_RADIUS_REVERSE,
    BORDER_RADIUS_REVERSE_COLOR,
    BORDER_RADIUS_REVERSE_TOP_LEFT,
    BORDER_RADIUS_REVERSE_TOP_RIGHT,
    BORDER_RADIUS_REVERSE_BOTTOM_RIGHT,
    BORDER_RADIUS_REVERSE_BOTTOM_LEFT,
];

/// Raw, unparsed property values keyed by property name.
///
/// The host fills this in; painters only read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePropertyMap {
    values: HashMap<String, String>,
}

impl StylePropertyMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.values.insert(name.into(), value.into());
    }

    /// The raw value of `name`, if the host supplied one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether the host supplied a value for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of properties present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no property is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A copy restricted to `names`.
    ///
    /// Used to hand a painter exactly the properties it declared.
    #[must_use]
    pub fn project(&self, names: &[&str]) -> Self {
        names
            .iter()
            .filter_map(|name| self.values.get_key_value(*name))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StylePropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
