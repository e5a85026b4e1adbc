use axum::body::Bytes;
use serde_json::Value;

use crate::error::AppError::{self, InvalidInput};

/// Pulls the `data` array out of a raw request body.
pub fn get_data_from_body(body: &Bytes) -> Result<Vec<Value>, AppError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| InvalidInput)?;

    match payload {
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(data)) => Ok(data),
            _ => Err(InvalidInput),
        },
        _ => Err(InvalidInput),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn body(raw: &str) -> Bytes {
        Bytes::from(raw.to_string())
    }

    #[test]
    fn test_valid_body() {
        let data = get_data_from_body(&body(r#"{"data": ["A", 1]}"#)).unwrap();

        assert_eq!(data, vec![json!("A"), json!(1)]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let data = get_data_from_body(&body(r#"{"data": [], "user": "x"}"#)).unwrap();

        assert!(data.is_empty());
    }

    #[test]
    fn test_missing_data() {
        assert!(matches!(
            get_data_from_body(&body(r#"{"notData": []}"#)),
            Err(InvalidInput)
        ));
    }

    #[test]
    fn test_data_not_array() {
        for raw in [
            r#"{"data": "A,B"}"#,
            r#"{"data": null}"#,
            r#"{"data": {"0": "A"}}"#,
            r#"{"data": 1}"#,
        ] {
            assert!(matches!(get_data_from_body(&body(raw)), Err(InvalidInput)), "{raw}");
        }
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(get_data_from_body(&body("[1, 2]")), Err(InvalidInput)));
        assert!(matches!(get_data_from_body(&body("not json")), Err(InvalidInput)));
        assert!(matches!(get_data_from_body(&body("")), Err(InvalidInput)));
    }
}
