//! JSON decoding helpers.

use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_domain::{ClientSettings, ListResponse};

    #[test]
    fn test_settings_defaults_fill_gaps() {
        let settings: ClientSettings =
            from_json_bytes(br#"{"page_size": 20}"#).expect("deserialization should work");
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.base_url, ClientSettings::default().base_url);
    }

    #[test]
    fn test_from_json_bytes_list_body() {
        let body = br#"{"count": 1, "next": null, "previous": null, "results": [{"name": "Luke"}]}"#;
        let response: ListResponse = from_json_bytes(body).expect("deserialization should work");
        assert_eq!(response.count, Some(1));
    }

    #[test]
    fn test_from_json_bytes_invalid() {
        let result: Result<ListResponse, _> = from_json_bytes(b"<html>rate limited</html>");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
