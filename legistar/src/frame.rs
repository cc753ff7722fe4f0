use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{LegistarError, Result};

/// A row/column view of a JSON payload
///
/// Legistar resources come back as arrays of flat objects. `Frame` infers
/// the column set from the records themselves: columns appear in the order
/// they are first seen, starting with the first record's keys; keys that
/// only show up in later records are appended. A single top-level object is
/// treated as a one-row frame. There is no fixed schema beyond that.
///
/// # Examples
///
/// ```rust
/// use legistar::Frame;
///
/// let payload = serde_json::json!([
///     {"EventId": 1, "EventDate": "2020-01-01"},
///     {"EventId": 2, "EventDate": "2020-01-02"},
/// ]);
///
/// let frame = Frame::from_value(&payload).unwrap();
/// assert_eq!(frame.columns(), ["EventId", "EventDate"]);
/// assert_eq!(frame.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Map<String, Value>>,
}

impl Frame {
    /// Build a frame from an in-memory JSON payload
    ///
    /// Accepts an array of objects or a single object. Anything else
    /// (a scalar, an array with non-object elements) is a shape error.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(records) => {
                let mut columns: Vec<String> = Vec::new();
                let mut rows = Vec::with_capacity(records.len());

                for (index, record) in records.iter().enumerate() {
                    let object = record.as_object().ok_or_else(|| {
                        LegistarError::shape(format!(
                            "record {} is not a JSON object",
                            index
                        ))
                    })?;

                    for key in object.keys() {
                        if !columns.iter().any(|column| column == key) {
                            columns.push(key.clone());
                        }
                    }
                    rows.push(object.clone());
                }

                Ok(Self { columns, rows })
            }
            Value::Object(object) => Ok(Self {
                columns: object.keys().cloned().collect(),
                rows: vec![object.clone()],
            }),
            other => Err(LegistarError::shape(format!(
                "expected a JSON array or object, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Load a frame from a cached `<query>.txt` file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let body = std::fs::read_to_string(path)?;
        body.parse()
    }

    /// Ordered column names, exactly as inferred from the payload
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Consume the frame and return its column names
    pub fn into_columns(self) -> Vec<String> {
        self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the frame holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The underlying row objects
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    /// Value at a row/column position; `None` when the row index is out of
    /// range, `Value::Null` when the row simply lacks the column
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows
            .get(row)
            .map(|r| r.get(column).unwrap_or(&Value::Null))
    }

    /// Project a single column across all rows; `None` for unknown columns
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        if !self.columns.iter().any(|column| column == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(name).unwrap_or(&Value::Null))
                .collect(),
        )
    }
}

impl FromStr for Frame {
    type Err = LegistarError;

    fn from_str(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_follow_first_record_order() {
        let payload = json!([
            {"EventId": 1, "EventDate": "2020-01-01"},
            {"EventId": 2, "EventDate": "2020-01-02"},
        ]);

        let frame = Frame::from_value(&payload).unwrap();
        assert_eq!(frame.columns(), ["EventId", "EventDate"]);
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn test_later_only_keys_are_appended() {
        let payload = json!([
            {"BodyId": 1, "BodyName": "Council"},
            {"BodyId": 2, "BodyName": "Finance", "BodyActiveFlag": 1},
        ]);

        let frame = Frame::from_value(&payload).unwrap();
        assert_eq!(frame.columns(), ["BodyId", "BodyName", "BodyActiveFlag"]);
        // the first row lacks the appended column
        assert_eq!(frame.get(0, "BodyActiveFlag"), Some(&Value::Null));
        assert_eq!(frame.get(1, "BodyActiveFlag"), Some(&json!(1)));
    }

    #[test]
    fn test_single_object_is_one_row() {
        let payload = json!({"MatterId": 7, "MatterFile": "Int 0001-2020"});

        let frame = Frame::from_value(&payload).unwrap();
        assert_eq!(frame.columns(), ["MatterId", "MatterFile"]);
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_empty_array_has_no_columns() {
        let frame = Frame::from_value(&json!([])).unwrap();
        assert!(frame.is_empty());
        assert!(frame.columns().is_empty());
    }

    #[test]
    fn test_scalar_payload_is_shape_error() {
        let err = Frame::from_value(&json!(42)).unwrap_err();
        assert!(matches!(err, LegistarError::Shape { .. }));
    }

    #[test]
    fn test_array_of_scalars_is_shape_error() {
        let err = Frame::from_value(&json!([1, 2, 3])).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("record 0"));
    }

    #[test]
    fn test_parse_from_str() {
        let frame: Frame = r#"[{"a": 1}, {"a": 2, "b": 3}]"#.parse().unwrap();
        assert_eq!(frame.columns(), ["a", "b"]);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = "{not json".parse::<Frame>().unwrap_err();
        assert!(matches!(err, LegistarError::Json(_)));
    }

    #[test]
    fn test_column_projection() {
        let payload = json!([
            {"EventId": 1, "EventDate": "2020-01-01"},
            {"EventId": 2},
        ]);

        let frame = Frame::from_value(&payload).unwrap();
        let dates = frame.column("EventDate").unwrap();
        assert_eq!(dates, vec![&json!("2020-01-01"), &Value::Null]);
        assert!(frame.column("Nope").is_none());
    }
}
