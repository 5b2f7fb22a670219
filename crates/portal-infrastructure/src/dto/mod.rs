//! Wire DTOs for the content provider.
//!
//! Every record is decoded on its own against a strict DTO and then checked
//! before it becomes a domain value. A malformed record is dropped and
//! counted; it never poisons the rest of the collection.

mod account;
mod content;

pub use account::{AccountDto, AccountProfileDto, AddressDto, GeoDto};
pub use content::{ItemDto, ReactionDto};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected a JSON array of records")]
    NotAnArray,
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// Decoded records plus the number of records that were rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub rejected: usize,
}

/// Decodes a single record through its DTO.
pub fn decode_record<D, T>(value: Value) -> Result<T, DecodeError>
where
    D: DeserializeOwned + TryInto<T, Error = DecodeError>,
{
    let dto: D = serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    dto.try_into()
}

/// Decodes a JSON array record by record, keeping the valid ones.
pub fn decode_collection<D, T>(value: Value) -> Result<Decoded<T>, DecodeError>
where
    D: DeserializeOwned + TryInto<T, Error = DecodeError>,
{
    let Value::Array(values) = value else {
        return Err(DecodeError::NotAnArray);
    };

    let mut records = Vec::with_capacity(values.len());
    let mut rejected = 0;
    for value in values {
        match decode_record::<D, T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::debug!("[dto] Rejected record: {}", e);
                rejected += 1;
            }
        }
    }

    Ok(Decoded { records, rejected })
}

pub(crate) fn require_positive(field: &'static str, id: i64) -> Result<i64, DecodeError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(DecodeError::invalid(field, "must be a positive integer"))
    }
}

pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, DecodeError> {
    if value.trim().is_empty() {
        Err(DecodeError::invalid(field, "must not be empty"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::content::ContentItem;
    use serde_json::json;

    #[test]
    fn test_collection_keeps_valid_records() {
        let value = json!([
            { "userId": 1, "id": 1, "title": "first", "body": "one" },
            { "userId": "1", "id": 2, "title": "wrong owner type", "body": "" },
            { "userId": 1, "id": 3, "title": "missing body" },
            { "userId": 2, "id": 4, "title": "fourth", "body": "four", "extra": true },
        ]);

        let decoded = decode_collection::<ItemDto, ContentItem>(value).unwrap();
        let ids: Vec<i64> = decoded.records.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(decoded.rejected, 2);
    }

    #[test]
    fn test_non_array_is_rejected_whole() {
        let err = decode_collection::<ItemDto, ContentItem>(json!({ "id": 1 })).unwrap_err();
        assert_eq!(err, DecodeError::NotAnArray);
    }
}
