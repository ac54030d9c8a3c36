use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::RangerClientError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Function for building a [HeaderMap] sent with every gateway request.
///
/// Takes a single argument, list of header key/value pairs. Auth material
/// (signing proxies, temporary tokens) arrives through here; the client
/// itself never signs requests.
pub fn build(header_map: &HashMap<String, String>) -> Result<HeaderMap, RangerClientError> {
    let mut headers = HeaderMap::new();

    // this should be consistent for any request to the control plane
    let content_type = HeaderValue::from_str(JSON_CONTENT_TYPE)?;
    headers.append("Content-Type", content_type);

    for (key, value) in header_map {
        let header_key = HeaderName::from_bytes(key.as_bytes())?;
        let mut header_value = HeaderValue::from_str(value)?;
        header_value.set_sensitive(true);
        headers.append(header_key, header_value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_from_pairs() {
        let mut pairs = HashMap::new();
        pairs.insert("x-api-key".to_string(), "da-key".to_string());
        let headers = build(&pairs).unwrap();
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.get("x-api-key").unwrap(), "da-key");
    }

    #[test]
    fn it_rejects_invalid_header_names() {
        let mut pairs = HashMap::new();
        pairs.insert("not a header".to_string(), "value".to_string());
        assert!(build(&pairs).is_err());
    }
}
