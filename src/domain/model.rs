use serde::{Deserialize, Serialize};

/// Key/value view of a [`Store`](crate::domain::store::Store) for serialization.
///
/// The field name is part of the exchange contract: `{"storeAddress": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreRecord {
    #[serde(rename = "storeAddress")]
    pub store_address: String,
}
