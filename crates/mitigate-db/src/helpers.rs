//! Row and value conversion helpers.
//!
//! Documents are stored as JSON text. Aggregates read `json_extract` results,
//! whose SQL type follows the JSON type of the extracted field, so they come
//! back as dynamically typed `libsql::Value`s.

use serde_json::Value;

use crate::error::DatabaseError;

/// JSON path for a top-level document field, e.g. `"$.citizen_id"`.
#[must_use]
pub fn field_path(field: &str) -> String {
    format!("$.{field}")
}

/// Convert a dynamically typed SQL value into JSON.
///
/// Blobs have no JSON form and are rejected.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for blob values.
pub fn sql_to_json(value: libsql::Value) -> Result<Value, DatabaseError> {
    match value {
        libsql::Value::Null => Ok(Value::Null),
        libsql::Value::Integer(i) => Ok(Value::from(i)),
        libsql::Value::Real(f) => Ok(Value::from(f)),
        libsql::Value::Text(s) => Ok(Value::String(s)),
        libsql::Value::Blob(_) => Err(DatabaseError::InvalidState(
            "blob value inside a JSON document".into(),
        )),
    }
}

/// Render a grouping key as a display label.
///
/// Strings are used verbatim, a missing field becomes an empty label, and any
/// other scalar uses its JSON text.
#[must_use]
pub fn json_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse the `doc` column into a JSON object.
///
/// # Errors
///
/// Returns `DatabaseError::Document` for invalid JSON and
/// `DatabaseError::InvalidState` if the document is not an object.
pub fn parse_document(raw: &str) -> Result<Value, DatabaseError> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(DatabaseError::InvalidState(format!(
            "stored document is not a JSON object: {raw}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_path_prefixes_root() {
        assert_eq!(field_path("state"), "$.state");
    }

    #[test]
    fn sql_values_map_to_json() {
        assert_eq!(sql_to_json(libsql::Value::Integer(3)).unwrap(), json!(3));
        assert_eq!(
            sql_to_json(libsql::Value::Text("NY".into())).unwrap(),
            json!("NY")
        );
        assert_eq!(sql_to_json(libsql::Value::Null).unwrap(), Value::Null);
        assert!(sql_to_json(libsql::Value::Blob(vec![1])).is_err());
    }

    #[test]
    fn labels_render_scalars() {
        assert_eq!(json_label(&json!("Pfizer")), "Pfizer");
        assert_eq!(json_label(&json!(2)), "2");
        assert_eq!(json_label(&Value::Null), "");
    }

    #[test]
    fn parse_document_requires_object() {
        assert!(parse_document(r#"{"a":1}"#).is_ok());
        assert!(matches!(
            parse_document("[1,2]"),
            Err(DatabaseError::InvalidState(_))
        ));
        assert!(matches!(
            parse_document("{oops"),
            Err(DatabaseError::Document(_))
        ));
    }
}
