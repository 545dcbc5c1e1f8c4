//! Response body decoding.
//!
//! When the `tracing` feature is enabled, unknown fields are logged as warnings
//! and decode failures are logged with the JSON path that failed, which helps
//! detect API changes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::response::PageDetail;

/// Splits the `{"data": .., "pagination": ..}` envelope, if present, and decodes
/// the payload. Bodies without an envelope are decoded as a whole.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    body: Value,
) -> serde_json::Result<(T, Option<PageDetail>)> {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            let pagination = match map.remove("pagination") {
                Some(Value::Null) | None => None,
                Some(value) => Some(deserialize_with_warnings(value)?),
            };
            let data = map.remove("data").unwrap_or(Value::Null);

            Ok((deserialize_with_warnings(data)?, pagination))
        }
        other => Ok((deserialize_with_warnings(other)?, None)),
    }
}

/// Deserialize JSON, logging unknown fields and the location of any failure.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> serde_json::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing JSON");

    let mut unknown_paths: Vec<String> = Vec::new();
    let result = serde_ignored::deserialize(&value, |path| {
        unknown_paths.push(path.to_string());
    });

    let decoded: T = match result {
        Ok(decoded) => decoded,
        Err(e) => {
            let path_result: std::result::Result<T, _> = serde_path_to_error::deserialize(&value);
            if let Err(path_err) = path_result {
                let path = path_err.path().to_string();
                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path,
                    value = %format_value(lookup_value(&value, &path)),
                    error = %path_err.inner(),
                    "deserialization failed"
                );
            }
            return Err(e);
        }
    };

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&value, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> serde_json::Result<T> {
    serde_json::from_value(value)
}

/// Resolves a `serde_ignored` / `serde_path_to_error` path such as
/// `targetingDimensions.age?.included[0]` by turning it into a JSON pointer.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let pointer: String = path
        .replace('[', ".")
        .split('.')
        .map(|segment| segment.trim_end_matches(['?', ']']))
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("/{segment}"))
        .collect();

    value.pointer(&pointer)
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Keyword {
        id: u64,
        text: String,
    }

    #[test]
    fn envelope_should_be_unwrapped() {
        let body = json!({
            "data": [{"id": 1, "text": "running shoes"}],
            "pagination": {"totalResults": 1, "startIndex": 0, "itemsPerPage": 1},
            "error": null
        });

        let (data, pagination): (Vec<Keyword>, _) = decode_envelope(body).expect("decode");

        assert_eq!(
            data,
            vec![Keyword {
                id: 1,
                text: "running shoes".to_owned()
            }]
        );
        assert_eq!(pagination.map(|p| p.total_results), Some(1));
    }

    #[test]
    fn bare_body_should_decode_without_pagination() {
        let (data, pagination): (Vec<Keyword>, _) = decode_envelope(json!([])).expect("decode");

        assert!(data.is_empty(), "empty array decodes to empty vec");
        assert!(pagination.is_none(), "bare bodies carry no pagination");
    }

    #[test]
    fn null_pagination_should_be_ignored() {
        let body = json!({"data": {"id": 7, "text": "shoes"}, "pagination": null});

        let (data, pagination): (Keyword, _) = decode_envelope(body).expect("decode");

        assert_eq!(data.id, 7);
        assert!(pagination.is_none(), "null pagination is absent");
    }

    #[test]
    fn wrong_shape_should_fail() {
        let result: serde_json::Result<(Vec<Keyword>, _)> =
            decode_envelope(json!({"data": {"id": 1}}));

        let err = result.unwrap_err();
        assert!(err.is_data(), "shape mismatches are data errors");
    }

    #[test]
    fn unknown_fields_should_not_fail() {
        let body = json!({"data": {"id": 7, "text": "shoes", "bidAmount": null}});

        let (data, _): (Keyword, _) = decode_envelope(body).expect("decode");

        assert_eq!(data.text, "shoes");
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn lookup_should_follow_ignored_paths() {
        let value = json!({"targetingDimensions": {"age": {"included": [{"minAge": 18}]}}});

        assert_eq!(
            lookup_value(&value, "targetingDimensions.age?.included[0].minAge"),
            Some(&json!(18))
        );
        assert_eq!(lookup_value(&value, "missing.path"), None);
        assert_eq!(format_value(None), "<unable to retrieve>");
    }
}
