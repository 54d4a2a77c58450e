//! Normalization of `compute-facets` replies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RefineError, Result};

/// A computed facet.
///
/// Serializes to `{columnName, name, expression, choices}` or
/// `{columnName, name, expression, error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub column_name: String,
    pub name: String,
    pub expression: String,
    #[serde(flatten)]
    pub outcome: FacetOutcome,
}

impl Facet {
    /// Choices, if the facet was computed.
    pub fn choices(&self) -> Option<&[FacetChoice]> {
        match &self.outcome {
            FacetOutcome::Choices(choices) => Some(choices),
            FacetOutcome::Error(_) => None,
        }
    }

    /// Server error message, if the facet failed.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FacetOutcome::Choices(_) => None,
            FacetOutcome::Error(message) => Some(message),
        }
    }
}

/// What the server computed for a facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetOutcome {
    Choices(Vec<FacetChoice>),
    Error(String),
}

/// One value of a facet histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetChoice {
    /// Raw cell value (string, number, boolean...).
    pub value: Value,
    /// Display label.
    pub label: String,
    /// Number of matching rows.
    pub count: u64,
    /// Whether the choice is part of the current selection.
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFacet {
    column_name: String,
    name: String,
    expression: String,
    #[serde(default)]
    choices: Option<Vec<RawChoice>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChoice {
    v: RawChoiceValue,
    c: u64,
    #[serde(default)]
    s: bool,
}

#[derive(Debug, Deserialize)]
struct RawChoiceValue {
    v: Value,
    l: String,
}

impl From<RawChoice> for FacetChoice {
    fn from(raw: RawChoice) -> Self {
        Self {
            value: raw.v.v,
            label: raw.v.l,
            count: raw.c,
            selected: raw.s,
        }
    }
}

/// Normalize every facet of a `compute-facets` reply, keeping server order.
pub fn normalize_facets(response: &Value) -> Result<Vec<Facet>> {
    let facets = response
        .get("facets")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            RefineError::UnexpectedResponse(format!(
                "compute-facets reply has no facets list: {}",
                response
            ))
        })?;

    facets.iter().map(normalize_facet).collect()
}

fn normalize_facet(raw: &Value) -> Result<Facet> {
    let raw = RawFacet::deserialize(raw)?;

    // Choices win when a facet reports both.
    let outcome = match (raw.choices, raw.error) {
        (Some(choices), _) => {
            FacetOutcome::Choices(choices.into_iter().map(FacetChoice::from).collect())
        }
        (None, Some(error)) => FacetOutcome::Error(error),
        (None, None) => {
            return Err(RefineError::UnexpectedResponse(format!(
                "facet '{}' has neither choices nor error",
                raw.name
            )));
        }
    };

    Ok(Facet {
        column_name: raw.column_name,
        name: raw.name,
        expression: raw.expression,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_choices_are_remapped() {
        let response = json!({
            "facets": [{
                "name": "city",
                "columnName": "city",
                "expression": "value",
                "invert": false,
                "choices": [
                    {"v": {"v": "Paris", "l": "Paris"}, "c": 12, "s": false},
                    {"v": {"v": 75, "l": "75"}, "c": 3, "s": true}
                ]
            }],
            "mode": "row-based"
        });

        let facets = normalize_facets(&response).unwrap();
        assert_eq!(facets.len(), 1);

        let choices = facets[0].choices().unwrap();
        assert_eq!(choices[0].value, json!("Paris"));
        assert_eq!(choices[0].label, "Paris");
        assert_eq!(choices[0].count, 12);
        assert!(!choices[0].selected);
        assert_eq!(choices[1].value, json!(75));
        assert!(choices[1].selected);

        let value = serde_json::to_value(&facets[0]).unwrap();
        assert_eq!(keys(&value), ["choices", "columnName", "expression", "name"]);
        assert_eq!(
            value["choices"][0],
            json!({"value": "Paris", "label": "Paris", "count": 12, "selected": false})
        );
    }

    #[test]
    fn test_error_passes_through() {
        let response = json!({
            "facets": [{
                "name": "ghost",
                "columnName": "ghost",
                "expression": "value",
                "error": "No column named ghost"
            }]
        });

        let facets = normalize_facets(&response).unwrap();
        assert_eq!(facets[0].error(), Some("No column named ghost"));
        assert!(facets[0].choices().is_none());

        let value = serde_json::to_value(&facets[0]).unwrap();
        assert_eq!(keys(&value), ["columnName", "error", "expression", "name"]);
    }

    #[test]
    fn test_order_follows_reply() {
        let response = json!({
            "facets": [
                {"name": "b", "columnName": "b", "expression": "value", "choices": []},
                {"name": "a", "columnName": "a", "expression": "value", "choices": []}
            ]
        });
        let names: Vec<String> = normalize_facets(&response)
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_missing_facets_list() {
        let err = normalize_facets(&json!({"code": "ok"})).unwrap_err();
        assert!(matches!(err, RefineError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_facet_without_choices_or_error() {
        let response = json!({
            "facets": [{"name": "n", "columnName": "n", "expression": "value", "min": 0}]
        });
        assert!(normalize_facets(&response).is_err());
    }
}
