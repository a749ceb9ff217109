//! Resource record: a flat JSON object as returned by the list endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::metadata::NaturalKey;

/// Cell text shown for null or missing values
pub const NULL_DISPLAY: &str = "NULL";

/// One row of a resource table.
///
/// The client never owns a record's lifecycle; it only keeps the last list
/// the server returned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Builds a record from a JSON value; anything but an object yields `None`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Field as editable text; `None` for null/missing values
    pub fn raw_text(&self, field: &str) -> Option<String> {
        self.value(field).map(value_to_text)
    }

    /// Field as table cell text
    pub fn text(&self, field: &str) -> String {
        self.raw_text(field)
            .unwrap_or_else(|| NULL_DISPLAY.to_string())
    }

    /// Value used to address this record for delete
    pub fn natural_key(&self, key: &NaturalKey) -> Option<String> {
        match key {
            NaturalKey::Field(name) => self.raw_text(name),
            NaturalKey::Composite { target, parts } => {
                if let Some(value) = self.raw_text(target) {
                    return Some(value);
                }
                let values = parts
                    .iter()
                    .map(|part| self.raw_text(part))
                    .collect::<Option<Vec<_>>>()?;
                Some(values.join("_"))
            }
        }
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 20.0 → "20", 12.5 → "12.5"
fn number_to_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_text_renders_null_and_numbers() {
        let r = record(json!({"name": "Urea", "price": 12.5, "whole": 20.0, "count": 3, "unit": null}));
        assert_eq!(r.text("name"), "Urea");
        assert_eq!(r.text("price"), "12.5");
        assert_eq!(r.text("whole"), "20");
        assert_eq!(r.text("count"), "3");
        assert_eq!(r.text("unit"), NULL_DISPLAY);
        assert_eq!(r.text("missing"), NULL_DISPLAY);
        assert_eq!(r.raw_text("unit"), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("x")).is_none());
    }

    #[test]
    fn test_natural_key_single_field() {
        let r = record(json!({"fertilizer_name": "DAP"}));
        assert_eq!(
            r.natural_key(&NaturalKey::Field("fertilizer_name")),
            Some("DAP".to_string())
        );
        assert_eq!(r.natural_key(&NaturalKey::Field("other")), None);
    }

    #[test]
    fn test_natural_key_composite() {
        let key = NaturalKey::Composite {
            target: "survey_year_origin",
            parts: &["survey_year", "survey_origin"],
        };

        let derived = record(json!({"survey_origin": "Uganda", "survey_year": 2023}));
        assert_eq!(derived.natural_key(&key), Some("2023_Uganda".to_string()));

        let explicit = record(json!({
            "survey_origin": "Uganda",
            "survey_year": "2023",
            "survey_year_origin": "server-side-key"
        }));
        assert_eq!(explicit.natural_key(&key), Some("server-side-key".to_string()));

        let incomplete = record(json!({"survey_origin": "Uganda", "survey_year": null}));
        assert_eq!(incomplete.natural_key(&key), None);
    }
}
