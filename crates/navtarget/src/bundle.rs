//! Generic key-value container backing target parameters.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced when reading typed values out of a [`Bundle`].
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("missing bundle key `{0}`")]
    MissingKey(String),

    #[error("bundle key `{key}` holds a {found} value, expected {expected}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A value that can be carried by a [`Bundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Bool(bool),
    I32(i32),
    I64(i64),
    F64(f64),
    Str(String),
}

impl BundleValue {
    fn kind(&self) -> &'static str {
        match self {
            BundleValue::Bool(_) => "bool",
            BundleValue::I32(_) => "i32",
            BundleValue::I64(_) => "i64",
            BundleValue::F64(_) => "f64",
            BundleValue::Str(_) => "string",
        }
    }
}

impl From<bool> for BundleValue {
    fn from(value: bool) -> Self {
        BundleValue::Bool(value)
    }
}

impl From<i32> for BundleValue {
    fn from(value: i32) -> Self {
        BundleValue::I32(value)
    }
}

impl From<i64> for BundleValue {
    fn from(value: i64) -> Self {
        BundleValue::I64(value)
    }
}

// Widened on insert; read back via `get_i64`.
impl From<u32> for BundleValue {
    fn from(value: u32) -> Self {
        BundleValue::I64(i64::from(value))
    }
}

impl From<f64> for BundleValue {
    fn from(value: f64) -> Self {
        BundleValue::F64(value)
    }
}

// Widened on insert; read back via `get_f64`.
impl From<f32> for BundleValue {
    fn from(value: f32) -> Self {
        BundleValue::F64(f64::from(value))
    }
}

impl From<&str> for BundleValue {
    fn from(value: &str) -> Self {
        BundleValue::Str(value.to_string())
    }
}

impl From<String> for BundleValue {
    fn from(value: String) -> Self {
        BundleValue::Str(value)
    }
}

/// Ordered key-value container passed between generated factories and
/// bundle-backed models.
///
/// Keys iterate in lexicographic order, so two bundles with the same content
/// compare and debug-print identically regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    values: BTreeMap<String, BundleValue>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<BundleValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, BundleError> {
        match self.require(key)? {
            BundleValue::Bool(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "bool", other)),
        }
    }

    pub fn get_i32(&self, key: &str) -> Result<i32, BundleError> {
        match self.require(key)? {
            BundleValue::I32(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "i32", other)),
        }
    }

    pub fn get_i64(&self, key: &str) -> Result<i64, BundleError> {
        match self.require(key)? {
            BundleValue::I64(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "i64", other)),
        }
    }

    pub fn get_f64(&self, key: &str) -> Result<f64, BundleError> {
        match self.require(key)? {
            BundleValue::F64(value) => Ok(*value),
            other => Err(Self::wrong_type(key, "f64", other)),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<&str, BundleError> {
        match self.require(key)? {
            BundleValue::Str(value) => Ok(value.as_str()),
            other => Err(Self::wrong_type(key, "string", other)),
        }
    }

    fn require(&self, key: &str) -> Result<&BundleValue, BundleError> {
        self.values
            .get(key)
            .ok_or_else(|| BundleError::MissingKey(key.to_string()))
    }

    fn wrong_type(key: &str, expected: &'static str, found: &BundleValue) -> BundleError {
        BundleError::WrongType {
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

/// Implemented by models that can be rebuilt from a [`Bundle`].
///
/// Generated `TargetBundles` accessors delegate to this trait.
pub trait FromBundle: Sized {
    fn from_bundle(bundle: &Bundle) -> Result<Self, BundleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_typed_get() {
        let mut bundle = Bundle::new();
        bundle.insert("userId", 42i64);
        bundle.insert("title", "hello");
        bundle.insert("ratio", 0.5f64);
        bundle.insert("visible", true);

        assert_eq!(bundle.get_i64("userId").unwrap(), 42);
        assert_eq!(bundle.get_str("title").unwrap(), "hello");
        assert_eq!(bundle.get_f64("ratio").unwrap(), 0.5);
        assert!(bundle.get_bool("visible").unwrap());
        assert_eq!(bundle.len(), 4);
    }

    #[test]
    fn test_missing_key() {
        let bundle = Bundle::new();
        let err = bundle.get_str("absent").unwrap_err();
        assert!(matches!(err, BundleError::MissingKey(key) if key == "absent"));
    }

    #[test]
    fn test_wrong_type() {
        let mut bundle = Bundle::new();
        bundle.insert("userId", 42i64);

        let err = bundle.get_str("userId").unwrap_err();
        match err {
            BundleError::WrongType {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, "userId");
                assert_eq!(expected, "string");
                assert_eq!(found, "i64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut bundle = Bundle::new();
        bundle.insert("key", 1i32);
        bundle.insert("key", 2i32);
        assert_eq!(bundle.get_i32("key").unwrap(), 2);
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_from_bundle() {
        struct Session {
            token: String,
        }

        impl FromBundle for Session {
            fn from_bundle(bundle: &Bundle) -> Result<Self, BundleError> {
                Ok(Session {
                    token: bundle.get_str("token")?.to_string(),
                })
            }
        }

        let mut bundle = Bundle::new();
        bundle.insert("token", "abc");
        let session = Session::from_bundle(&bundle).unwrap();
        assert_eq!(session.token, "abc");

        assert!(Session::from_bundle(&Bundle::new()).is_err());
    }
}
