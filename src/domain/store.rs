//! The store entity.

use crate::domain::model::StoreRecord;
use crate::utils::error::{Result, StoreError, ValidationError};
use crate::utils::sanitize::sanitize_text;
use crate::utils::validation::{validate_max_length, validate_non_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A store, reduced to its postal address.
///
/// The address is always trimmed, sanitized, non-empty and at most
/// [`Store::MAX_ADDRESS_LENGTH`] characters long. Every write goes through
/// [`Store::set_address`], including the one made by the constructor.
///
/// ```
/// use store_entity::Store;
///
/// let store = Store::new("  123WestRoad  ").unwrap();
/// assert_eq!(store.address(), "123WestRoad");
/// assert!(Store::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "StoreRecord", try_from = "StoreRecord")]
pub struct Store {
    store_address: String,
}

impl Store {
    pub const MAX_ADDRESS_LENGTH: usize = 100;

    /// Build a store from a proposed address.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] with the violated rule when the
    /// address is rejected.
    pub fn new(address: &str) -> Result<Self> {
        let mut store = Self {
            store_address: String::new(),
        };
        store.set_address(address)?;
        Ok(store)
    }

    /// Build a store from raw bytes.
    ///
    /// # Errors
    ///
    /// Bytes that are not UTF-8 yield [`StoreError::Construction`] with the
    /// decoding error as its source. Decoded text is validated as in
    /// [`Store::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let address = std::str::from_utf8(bytes)
            .map_err(|e| StoreError::construction("store address is not valid UTF-8", e))?;
        Self::new(address)
    }

    pub fn address(&self) -> &str {
        &self.store_address
    }

    pub fn into_address(self) -> String {
        self.store_address
    }

    /// Replace the address.
    ///
    /// The value is trimmed, then sanitized, then checked for emptiness and
    /// length, in that order. On error the current address is kept.
    pub fn set_address(&mut self, value: &str) -> std::result::Result<(), ValidationError> {
        let sanitized = sanitize_text(value.trim());

        validate_non_empty(&sanitized)
            .and_then(|()| validate_max_length(&sanitized, Self::MAX_ADDRESS_LENGTH))
            .inspect_err(|e| tracing::warn!("Rejected store address: {}", e))?;

        tracing::debug!(address = %sanitized, "Store address set");
        self.store_address = sanitized;
        Ok(())
    }

    pub fn to_serializable_form(&self) -> StoreRecord {
        StoreRecord {
            store_address: self.store_address.clone(),
        }
    }

    /// Encode the serializable form as JSON.
    ///
    /// # Errors
    ///
    /// Encoder failures are returned as [`StoreError::Serialization`].
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let record = self.to_serializable_form();
        let json = if pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        Ok(json)
    }
}

impl From<Store> for StoreRecord {
    fn from(store: Store) -> Self {
        StoreRecord {
            store_address: store.store_address,
        }
    }
}

impl TryFrom<StoreRecord> for Store {
    type Error = StoreError;

    fn try_from(record: StoreRecord) -> Result<Self> {
        Self::new(&record.store_address)
    }
}

impl std::str::FromStr for Store {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.store_address)
    }
}

impl AsRef<str> for Store {
    fn as_ref(&self) -> &str {
        &self.store_address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let store = Store::new("  123WestRoad  ").unwrap();
        assert_eq!(store.address(), "123WestRoad");
    }

    #[test]
    fn test_new_rejects_empty_and_blank() {
        for input in ["", "   ", "\t\n"] {
            let err = Store::new(input).unwrap_err();
            assert_eq!(err.validation_kind(), Some(&ValidationError::EmptyOrInsecure));
        }
    }

    #[test]
    fn test_new_rejects_markup_only() {
        let err = Store::new("<script></script>").unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationError::EmptyOrInsecure));
    }

    #[test]
    fn test_length_boundary() {
        assert!(Store::new(&"a".repeat(100)).is_ok());

        let err = Store::new(&"a".repeat(101)).unwrap_err();
        assert_eq!(
            err.validation_kind(),
            Some(&ValidationError::TooLong { max: 100, actual: 101 })
        );
    }

    #[test]
    fn test_length_is_checked_after_sanitizing() {
        let padded = format!("{}<b></b>", "a".repeat(100));
        assert_eq!(Store::new(&padded).unwrap().address(), "a".repeat(100));
    }

    #[test]
    fn test_sanitized_value_is_not_retrimmed() {
        let store = Store::new("<b>x</b> 1 Elm").unwrap();
        assert_eq!(store.address(), "x 1 Elm");

        let store = Store::new("<br> 1 Elm").unwrap();
        assert_eq!(store.address(), " 1 Elm");
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut store = Store::new("123WestRoad").unwrap();

        assert_eq!(store.set_address(""), Err(ValidationError::EmptyOrInsecure));
        assert!(store.set_address(&"b".repeat(150)).is_err());
        assert_eq!(store.address(), "123WestRoad");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = Store::new("1 Elm").unwrap();
        once.set_address("9 Oak Lane").unwrap();

        let mut twice = Store::new("1 Elm").unwrap();
        twice.set_address("9 Oak Lane").unwrap();
        twice.set_address("9 Oak Lane").unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_from_bytes_wraps_utf8_error() {
        use std::error::Error as _;

        let err = Store::from_bytes(&[0x31, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, StoreError::Construction { .. }));
        assert!(err
            .source()
            .is_some_and(|source| source.is::<std::str::Utf8Error>()));
    }

    #[test]
    fn test_from_bytes_validates_text() {
        assert_eq!(Store::from_bytes(b" 1 Elm ").unwrap().address(), "1 Elm");
        assert!(Store::from_bytes(b"").unwrap_err().validation_kind().is_some());
    }

    #[test]
    fn test_serializable_form() {
        let store = Store::new("123WestRoad").unwrap();
        assert_eq!(
            store.to_serializable_form(),
            StoreRecord {
                store_address: "123WestRoad".to_string()
            }
        );
    }

    #[test]
    fn test_to_json_string() {
        let store = Store::new("123WestRoad").unwrap();
        assert_eq!(
            store.to_json_string(false).unwrap(),
            r#"{"storeAddress":"123WestRoad"}"#
        );
        assert_eq!(
            store.to_json_string(true).unwrap(),
            "{\n  \"storeAddress\": \"123WestRoad\"\n}"
        );
    }

    #[test]
    fn test_parse_and_display() {
        let store: Store = " 5 Pine Ct ".parse().unwrap();
        assert_eq!(store.to_string(), "5 Pine Ct");
        assert!("".parse::<Store>().is_err());
    }
}
