//! Draft: client-local staging copy of a record's editable fields

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use super::metadata::{FieldMetadata, FieldType, ResourceMetadata};
use super::record::Record;

/// Validation failure for one draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Editable string values keyed by field name.
///
/// Every value is kept as text exactly as typed; conversion to JSON types
/// happens only in `to_payload`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    values: BTreeMap<&'static str, String>,
}

impl Draft {
    /// All form fields empty; choice fields sit on the "choose one" sentinel
    pub fn empty(meta: &ResourceMetadata) -> Self {
        Self {
            values: meta.form_fields().map(|f| (f.name, String::new())).collect(),
        }
    }

    /// Seeded from `record`; null or missing values become empty strings
    pub fn from_record(meta: &ResourceMetadata, record: &Record) -> Self {
        Self {
            values: meta
                .form_fields()
                .map(|f| (f.name, record.raw_text(f.name).unwrap_or_default()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Sets a known field; unknown names are ignored and reported as `false`
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Checks every form field against its metadata
    pub fn validate(&self, meta: &ResourceMetadata) -> Vec<FieldError> {
        meta.form_fields()
            .filter_map(|field| {
                validate_field(field, self.get(field.name))
                    .err()
                    .map(|message| FieldError {
                        field: field.name,
                        message,
                    })
            })
            .collect()
    }

    /// JSON body for the create/update endpoints.
    ///
    /// Numbers are sent as JSON numbers, blank optional values as `null`.
    pub fn to_payload(&self, meta: &ResourceMetadata) -> Result<Value, Vec<FieldError>> {
        let errors = self.validate(meta);
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut body = Map::new();
        for field in meta.form_fields() {
            let raw = self.get(field.name).trim();
            let value = if raw.is_empty() {
                Value::Null
            } else {
                match field.field_type {
                    FieldType::Number { .. } => parse_number(raw).unwrap_or(Value::Null),
                    FieldType::Text | FieldType::Choice => Value::String(raw.to_string()),
                }
            };
            body.insert(field.name.to_string(), value);
        }
        Ok(Value::Object(body))
    }
}

fn validate_field(field: &FieldMetadata, value: &str) -> Result<(), String> {
    let label = field.ui.label;
    let trimmed = value.trim();

    match field.field_type {
        FieldType::Text => field.validation.validate_string(trimmed, label),
        FieldType::Number { .. } => {
            if trimmed.is_empty() {
                return field.validation.validate_string(trimmed, label);
            }
            let number = trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("{} must be a number", label))?;
            field.validation.validate_number(number, label)
        }
        FieldType::Choice => {
            if trimmed.is_empty() {
                return if field.validation.required {
                    Err(format!("Choose a {}", label))
                } else {
                    Ok(())
                };
            }
            let allowed = field.enum_values.unwrap_or(&[]);
            if allowed.contains(&trimmed) {
                Ok(())
            } else {
                Err(format!("{} \"{}\" is not one of the allowed values", label, trimmed))
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceKind;
    use serde_json::json;

    #[test]
    fn test_empty_draft_has_every_form_field() {
        let meta = ResourceKind::Fertilizer.metadata();
        let draft = Draft::empty(meta);
        for field in meta.form_fields() {
            assert_eq!(draft.get(field.name), "");
        }
    }

    #[test]
    fn test_from_record_substitutes_empty_for_null() {
        let meta = ResourceKind::Fertilizer.metadata();
        let record = Record::from_value(json!({
            "fertilizer_name": "Urea",
            "n_content": 0.46,
            "p_content": null,
            "f_type": "Synthetic fertilizer"
        }))
        .unwrap();

        let draft = Draft::from_record(meta, &record);
        assert_eq!(draft.get("fertilizer_name"), "Urea");
        assert_eq!(draft.get("n_content"), "0.46");
        assert_eq!(draft.get("p_content"), "");
        assert_eq!(draft.get("k_content"), "");
        assert_eq!(draft.get("f_type"), "Synthetic fertilizer");
    }

    #[test]
    fn test_set_ignores_unknown_fields() {
        let meta = ResourceKind::UnitConversion.metadata();
        let mut draft = Draft::empty(meta);
        assert!(draft.set("reported_unit_name", "bag"));
        assert!(!draft.set("nope", "x"));
        assert_eq!(draft.get("nope"), "");
    }

    #[test]
    fn test_choice_sentinel_is_rejected() {
        let meta = ResourceKind::Fertilizer.metadata();
        let mut draft = Draft::empty(meta);
        draft.set("fertilizer_name", "Urea");

        let errors = draft.validate(meta);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "f_type");
        assert_eq!(errors[0].message, "Choose a Fertilizer Type");

        draft.set("f_type", "Organic fertilizer");
        assert!(draft.validate(meta).is_empty());
    }

    #[test]
    fn test_number_fields_reject_garbage() {
        let meta = ResourceKind::UnitConversion.metadata();
        let mut draft = Draft::empty(meta);
        draft.set("reported_unit_name", "bag");
        draft.set("reported_unit_amount", "12kg");

        let errors = draft.validate(meta);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "reported_unit_amount");

        draft.set("reported_unit_amount", "-3");
        assert_eq!(draft.validate(meta)[0].message, "Reported Unit Amount must be at least 0");
    }

    #[test]
    fn test_payload_types() {
        let meta = ResourceKind::SurveyMaster.metadata();
        let mut draft = Draft::empty(meta);
        draft.set("survey_origin", " Uganda ");
        draft.set("survey_coffee_type", "Robusta");
        draft.set("survey_supply_chain", "Direct");
        draft.set("survey_year", "2023");
        draft.set("total_number_of_farmers_in_the_supply_chain", "1200");
        draft.set("number_of_survey_plots_part_of_deforestation_analysis", "45");

        let payload = draft.to_payload(meta).unwrap();
        assert_eq!(
            payload,
            json!({
                "survey_origin": "Uganda",
                "survey_coffee_type": "Robusta",
                "survey_supply_chain": "Direct",
                "survey_year": "2023",
                "total_number_of_farmers_in_the_supply_chain": 1200,
                "number_of_survey_plots_part_of_deforestation_analysis": 45
            })
        );
    }

    #[test]
    fn test_payload_refuses_invalid_draft() {
        let meta = ResourceKind::LaborCost.metadata();
        let draft = Draft::empty(meta);
        let errors = draft.to_payload(meta).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "survey_origin",
                "survey_year",
                "laborer_activity_name",
                "laborer_activity_cost_per_day"
            ]
        );
    }

    #[test]
    fn test_optional_number_is_sent_as_null() {
        let meta = ResourceKind::UnitConversion.metadata();
        let mut draft = Draft::empty(meta);
        draft.set("reported_unit_name", "bag");
        let payload = draft.to_payload(meta).unwrap();
        assert_eq!(payload["reported_unit_amount"], Value::Null);
    }

    fn sample_value(field: &FieldMetadata) -> String {
        match field.field_type {
            FieldType::Choice => field.enum_values.unwrap_or(&[])[0].to_string(),
            FieldType::Number { .. } => "12".to_string(),
            FieldType::Text => "sample".to_string(),
        }
    }

    /// Every listed field must be filled before the draft can be sent
    fn assert_all_required(kind: ResourceKind, required: &[&str]) {
        let meta = kind.metadata();
        let mut full = Draft::empty(meta);
        for field in meta.form_fields() {
            full.set(field.name, sample_value(field));
        }
        assert!(full.to_payload(meta).is_ok(), "{:?} complete draft", kind);

        for name in required {
            let mut draft = full.clone();
            assert!(draft.set(name, ""), "{:?}.{}", kind, name);
            let errors = draft.to_payload(meta).unwrap_err();
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec![*name], "{:?}", kind);
        }
    }

    #[test]
    fn test_agrochemical_requires_every_field() {
        assert_all_required(
            ResourceKind::Agrochemical,
            &[
                "agrochemical_name",
                "agrochemical_type",
                "active_ingredient_count",
                "active_ingredient_name",
                "active_ingredient_percentage",
            ],
        );
    }

    #[test]
    fn test_fertilizer_cost_requires_price_and_unit() {
        assert_all_required(
            ResourceKind::FertilizerCost,
            &["fertilizer_item_price_lc", "fertilizer_item_price_unit"],
        );
    }

    #[test]
    fn test_agrochemical_cost_requires_price_and_unit() {
        assert_all_required(
            ResourceKind::AgrochemicalCost,
            &["agrochemical_item_price_lc", "agrochemical_item_price_unit"],
        );
    }

    #[test]
    fn test_seedling_cost_requires_price() {
        assert_all_required(ResourceKind::SeedlingCost, &["seedling_item_price_lc"]);
    }

    #[test]
    fn test_labor_cost_requires_daily_cost() {
        assert_all_required(ResourceKind::LaborCost, &["laborer_activity_cost_per_day"]);
    }

    #[test]
    fn test_origin_economics_requires_every_field() {
        assert_all_required(
            ResourceKind::OriginEconomics,
            &[
                "survey_origin",
                "survey_year",
                "origin_living_income_benchmark_lc",
                "origin_currency",
                "origin_currency_to_usd",
            ],
        );
    }

    #[test]
    fn test_survey_master_requires_every_field() {
        assert_all_required(
            ResourceKind::SurveyMaster,
            &[
                "survey_origin",
                "survey_coffee_type",
                "survey_supply_chain",
                "survey_year",
                "total_number_of_farmers_in_the_supply_chain",
                "number_of_survey_plots_part_of_deforestation_analysis",
            ],
        );
    }
}
