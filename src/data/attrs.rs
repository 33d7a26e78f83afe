//! Attribute values attached to groups and datasets.

use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar.
    UInt(u64),
    /// Floating point scalar.
    Float(f64),
    /// Text.
    Text(String),
    /// Raw byte string; decoded as UTF-8 only for display.
    Bytes(Vec<u8>),
    /// An array of values.
    List(Vec<AttrValue>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{}", v),
            AttrValue::UInt(v) => write!(f, "{}", v),
            AttrValue::Float(v) => write!(f, "{}", v),
            AttrValue::Text(v) => f.write_str(v),
            AttrValue::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            AttrValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Attributes of a node, in stored order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, replacing any earlier value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: AttrValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AttrValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, AttrValue)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let attrs: AttributeMap = [
            ("zeta", AttrValue::Int(1)),
            ("alpha", AttrValue::Int(2)),
            ("mid", AttrValue::Int(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut attrs = AttributeMap::new();
        attrs.insert("a", AttrValue::Int(1));
        attrs.insert("b", AttrValue::Int(2));
        attrs.insert("a", AttrValue::Int(9));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), Some(&AttrValue::Int(9)));
        assert_eq!(attrs.iter().next().map(|(k, _)| k), Some("a"));
    }

    #[test]
    fn invalid_utf8_bytes_never_fail_to_display() {
        let value = AttrValue::Bytes(vec![b'o', b'k', 0xff, 0xfe]);
        let shown = value.to_string();
        assert!(shown.starts_with("ok"));
    }

    #[test]
    fn lists_are_bracketed() {
        let value = AttrValue::List(vec![AttrValue::Float(1.5), AttrValue::Int(-2)]);
        assert_eq!(value.to_string(), "[1.5, -2]");
    }
}
