//! XML Attributes
//!
//! Attribute name to value mapping delivered with start tags and the XML
//! declaration. Values are the raw bytes between the quotes; entity
//! references are left untouched (see [`super::entities`]).

use crate::error::AttributeError;
use memchr::memchr;
use std::collections::hash_map::{self, HashMap};

/// Attribute mapping; a repeated name overwrites the earlier value.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: HashMap<Vec<u8>, Vec<u8>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any earlier value for the same name
    pub fn insert(&mut self, name: &[u8], value: &[u8]) {
        self.map.insert(name.to_vec(), value.to_vec());
    }

    /// Get the raw value of an attribute
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&[u8]> {
        self.map.get(name.as_ref()).map(Vec::as_slice)
    }

    pub fn contains(&self, name: impl AsRef<[u8]>) -> bool {
        self.map.contains_key(name.as_ref())
    }

    /// Get an attribute value as a string
    pub fn get_str(&self, name: &str) -> Result<Option<&str>, AttributeError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => std::str::from_utf8(value)
                .map(Some)
                .map_err(|_| AttributeError::NotUtf8 {
                    name: name.to_string(),
                }),
        }
    }

    /// Get an attribute value parsed as a floating point number
    ///
    /// Surrounding whitespace is ignored. A value that does not parse is
    /// reported as [`AttributeError::NotANumber`], never as a panic.
    pub fn get_f64(&self, name: &str) -> Result<Option<f64>, AttributeError> {
        let Some(value) = self.get_str(name)? else {
            return Ok(None);
        };
        value
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AttributeError::NotANumber {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.map.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl IntoIterator for Attributes {
    type Item = (Vec<u8>, Vec<u8>);
    type IntoIter = hash_map::IntoIter<Vec<u8>, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<K: AsRef<[u8]>, V: AsRef<[u8]>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k.as_ref(), v.as_ref());
        }
        attrs
    }
}

/// Split a name into prefix and local name at the colon
pub fn split_name(name: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if let Some(colon_pos) = memchr(b':', name) {
        (Some(&name[..colon_pos]), &name[colon_pos + 1..])
    } else {
        (None, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_overwrites() {
        let mut attrs = Attributes::new();
        attrs.insert(b"lat", b"1");
        attrs.insert(b"lat", b"2");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("lat"), Some(b"2" as &[u8]));
        assert!(attrs.contains("lat"));
        assert!(!attrs.contains("lon"));
    }

    #[test]
    fn test_get_f64() {
        let attrs: Attributes = [("lat", "52.5"), ("lon", " 4.9 "), ("ele", "high")]
            .into_iter()
            .collect();
        assert_eq!(attrs.get_f64("lat"), Ok(Some(52.5)));
        assert_eq!(attrs.get_f64("lon"), Ok(Some(4.9)));
        assert_eq!(attrs.get_f64("time"), Ok(None));
        assert_eq!(
            attrs.get_f64("ele"),
            Err(AttributeError::NotANumber {
                name: "ele".to_string(),
                value: "high".to_string(),
            })
        );
    }

    #[test]
    fn test_get_str_rejects_invalid_utf8() {
        let mut attrs = Attributes::new();
        attrs.insert(b"name", b"\xff\xfe");
        assert!(matches!(
            attrs.get_str("name"),
            Err(AttributeError::NotUtf8 { .. })
        ));
    }

    #[test]
    fn test_split_name() {
        assert_eq!(
            split_name(b"xmlns:xlink"),
            (Some(b"xmlns" as &[u8]), b"xlink" as &[u8])
        );
        assert_eq!(split_name(b"trkpt"), (None, b"trkpt" as &[u8]));
    }
}
