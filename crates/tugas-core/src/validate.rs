//! Payload validation.
//!
//! One pass over a declared schema instead of ad-hoc per-field conditionals:
//! every failing field is collected, in schema order, so a caller fixing a
//! bad payload sees all problems at once.

use std::fmt;

use serde_json::{Map, Value};

use crate::model::{InputPair, RequestRecord};

/// Scalar fields required on every creation payload, in reporting order.
pub const SCALAR_FIELDS: [&str; 8] = [
    "assignee",
    "deadline",
    "division",
    "domain",
    "link",
    "note",
    "request_name",
    "status",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing required field: {0}")]
    Missing(String),

    #[error("invalid field: {0}")]
    Invalid(String),
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing(f) | FieldError::Invalid(f) => f,
        }
    }
}

/// Every field that failed validation, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn field_names(&self) -> Vec<&str> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{e}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validate and normalize a creation payload into a [`RequestRecord`].
///
/// All-or-nothing: either the payload yields a complete record, or the
/// error names every missing/malformed field. A payload that is not a JSON
/// object reports every field. Pure function, no side effects.
pub fn validate_payload(payload: &Value) -> Result<RequestRecord, ValidationError> {
    let empty = Map::new();
    let obj = payload.as_object().unwrap_or(&empty);

    let mut errors = Vec::new();

    // Missing scalars yield a placeholder so the single pass can continue;
    // a non-empty error list discards the record before it is ever visible.
    let mut scalar = |name: &str| -> String {
        match obj.get(name) {
            None => {
                errors.push(FieldError::Missing(name.to_string()));
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                errors.push(FieldError::Invalid(name.to_string()));
                String::new()
            }
        }
    };

    let record = RequestRecord {
        assignee: scalar("assignee"),
        deadline: scalar("deadline"),
        division: scalar("division"),
        domain: scalar("domain"),
        link: scalar("link"),
        note: scalar("note"),
        request_name: scalar("request_name"),
        status: scalar("status"),
        tag: Vec::new(),
        list_input: Vec::new(),
    };

    let tag = parse_tags(obj.get("tag")).unwrap_or_else(|e| {
        errors.push(e);
        Vec::new()
    });

    let list_input = parse_list_input(obj.get("list_input")).unwrap_or_else(|e| {
        errors.push(e);
        Vec::new()
    });

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    Ok(RequestRecord { tag, list_input, ..record })
}

fn parse_tags(value: Option<&Value>) -> Result<Vec<String>, FieldError> {
    let invalid = || FieldError::Invalid("tag".to_string());
    let arr = value.and_then(Value::as_array).ok_or_else(invalid)?;

    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        match item {
            Value::String(s) => out.push(s.clone()),
            _ => return Err(invalid()),
        }
    }
    Ok(out)
}

fn parse_list_input(value: Option<&Value>) -> Result<Vec<InputPair>, FieldError> {
    let invalid = || FieldError::Invalid("list_input".to_string());
    let arr = value.and_then(Value::as_array).ok_or_else(invalid)?;

    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        let obj = item.as_object().ok_or_else(invalid)?;
        let input = obj.get("input").and_then(Value::as_str).ok_or_else(invalid)?;
        let output = obj.get("output").and_then(Value::as_str).ok_or_else(invalid)?;
        out.push(InputPair {
            input: input.to_string(),
            output: output.to_string(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "assignee": "Alice",
            "deadline": "2024-01-01",
            "division": "Eng",
            "domain": "Backend",
            "link": "http://x",
            "note": "n",
            "request_name": "Bob",
            "status": "Open",
            "tag": ["urgent"],
            "list_input": [{"input": "a", "output": "b"}],
        })
    }

    #[test]
    fn accepts_full_payload() {
        let rec = validate_payload(&full_payload()).unwrap();
        assert_eq!(rec.assignee, "Alice");
        assert_eq!(rec.status, "Open");
        assert_eq!(rec.tag, vec!["urgent".to_string()]);
        assert_eq!(
            rec.list_input,
            vec![InputPair { input: "a".into(), output: "b".into() }]
        );
    }

    #[test]
    fn empty_tag_and_list_input_are_valid() {
        let mut v = full_payload();
        v["tag"] = json!([]);
        v["list_input"] = json!([]);
        let rec = validate_payload(&v).unwrap();
        assert!(rec.tag.is_empty());
        assert!(rec.list_input.is_empty());
    }

    #[test]
    fn each_missing_scalar_is_reported() {
        for name in SCALAR_FIELDS {
            let mut v = full_payload();
            v.as_object_mut().unwrap().remove(name);
            let err = validate_payload(&v).unwrap_err();
            assert_eq!(err.errors, vec![FieldError::Missing(name.to_string())]);
        }
    }

    #[test]
    fn non_string_scalar_is_invalid() {
        let mut v = full_payload();
        v["deadline"] = json!(20240101);
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Invalid("deadline".to_string())]);
    }

    #[test]
    fn missing_tag_key_is_invalid() {
        let mut v = full_payload();
        v.as_object_mut().unwrap().remove("tag");
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Invalid("tag".to_string())]);
    }

    #[test]
    fn non_string_tag_element_is_invalid() {
        let mut v = full_payload();
        v["tag"] = json!(["ok", 7]);
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Invalid("tag".to_string())]);
    }

    #[test]
    fn list_input_element_missing_output_is_invalid() {
        let mut v = full_payload();
        v["list_input"] = json!([{"input": "a"}]);
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Invalid("list_input".to_string())]);
    }

    #[test]
    fn list_input_non_object_element_is_invalid() {
        let mut v = full_payload();
        v["list_input"] = json!(["not-an-object"]);
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.errors, vec![FieldError::Invalid("list_input".to_string())]);
    }

    #[test]
    fn all_errors_collected_in_schema_order() {
        let v = json!({
            "deadline": "2024-01-01",
            "division": "Eng",
            "domain": "Backend",
            "link": "http://x",
            "note": "n",
            "request_name": "Bob",
            "status": "Open",
            "tag": "not-an-array",
            "list_input": [],
        });
        let err = validate_payload(&v).unwrap_err();
        assert_eq!(err.field_names(), vec!["assignee", "tag"]);
    }

    #[test]
    fn non_object_payload_reports_every_field() {
        let err = validate_payload(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.errors.len(), SCALAR_FIELDS.len() + 2);
    }

    #[test]
    fn display_joins_messages() {
        let err = ValidationError {
            errors: vec![
                FieldError::Missing("assignee".into()),
                FieldError::Invalid("tag".into()),
            ],
        };
        assert_eq!(
            err.to_string(),
            "missing required field: assignee; invalid field: tag"
        );
    }
}
