//! Fact records — the unit the remote year-facts service hands back.
//!
//! A fact is immutable once received. Only the year and text are interpreted;
//! every other field of the remote schema is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A calendar year as understood by the remote service.
pub type Year = i64;

// ─── Fact ────────────────────────────────────────────────────────────────────

/// One fact about one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
  /// The remote schema calls this `number`; `year` is accepted too.
  #[serde(rename = "number", alias = "year")]
  pub year:  Year,
  pub text:  String,
  /// Remaining fields (`found`, `type`, `date`, …), passed through opaquely.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl Fact {
  pub fn new(year: Year, text: impl Into<String>) -> Self {
    Self {
      year,
      text: text.into(),
      extra: Map::new(),
    }
  }

  /// Whether the service reported a real fact rather than a filler sentence.
  /// Absent means the service did not say, which counts as found.
  pub fn found(&self) -> bool {
    self
      .extra
      .get("found")
      .and_then(Value::as_bool)
      .unwrap_or(true)
  }
}

// ─── Payload normalisation ───────────────────────────────────────────────────

/// Turn a decoded response body into an ordered fact collection.
///
/// Accepted shapes:
/// - an array of fact objects, kept in order;
/// - a single fact object (the single-year answer);
/// - an object keyed by year whose values are facts (the multi-year answer),
///   kept in document order.
pub fn collect_facts(body: Value) -> Result<Vec<Fact>> {
  match body {
    Value::Array(items) => items
      .into_iter()
      .map(|item| serde_json::from_value(item).map_err(Error::from))
      .collect(),
    Value::Object(map) if map.contains_key("text") => {
      Ok(vec![serde_json::from_value(Value::Object(map))?])
    }
    Value::Object(map) => map
      .into_iter()
      .map(|(key, item)| {
        if !item.is_object() {
          return Err(Error::UnexpectedShape(format!(
            "entry {key:?} is not a fact object"
          )));
        }
        Ok(serde_json::from_value(item)?)
      })
      .collect(),
    other => Err(Error::UnexpectedShape(format!(
      "expected an array or object, got {}",
      type_name(&other)
    ))),
  }
}

fn type_name(value: &Value) -> &'static str {
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
  use serde_json::json;

  use super::*;

  #[test]
  fn deserialises_numbers_api_object() {
    let fact: Fact = serde_json::from_value(json!({
      "text": "the Euro is introduced",
      "number": 1999,
      "found": true,
      "type": "year",
    }))
    .unwrap();
    assert_eq!(fact.year, 1999);
    assert_eq!(fact.text, "the Euro is introduced");
    assert_eq!(fact.extra.get("type"), Some(&json!("year")));
    assert!(fact.found());
  }

  #[test]
  fn accepts_year_alias() {
    let fact: Fact =
      serde_json::from_value(json!({ "year": 1066, "text": "Hastings" })).unwrap();
    assert_eq!(fact.year, 1066);
    assert!(fact.extra.is_empty());
  }

  #[test]
  fn array_keeps_order() {
    let facts = collect_facts(json!([
      { "number": 2001, "text": "b" },
      { "number": 1990, "text": "a" },
    ]))
    .unwrap();
    let years: Vec<_> = facts.iter().map(|f| f.year).collect();
    assert_eq!(years, vec![2001, 1990]);
  }

  #[test]
  fn single_object_becomes_one_fact() {
    let facts = collect_facts(json!({ "number": 42, "text": "x" })).unwrap();
    assert_eq!(facts, vec![Fact::new(42, "x")]);
  }

  #[test]
  fn keyed_object_keeps_document_order() {
    let body: Value = serde_json::from_str(
      r#"{"300": {"number": 300, "text": "c"}, "20": {"number": 20, "text": "b"}}"#,
    )
    .unwrap();
    let facts = collect_facts(body).unwrap();
    let years: Vec<_> = facts.iter().map(|f| f.year).collect();
    assert_eq!(years, vec![300, 20]);
  }

  #[test]
  fn rejects_scalars() {
    let err = collect_facts(json!("nope")).unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape(_)));
  }

  #[test]
  fn rejects_keyed_object_with_scalar_entry() {
    let err = collect_facts(json!({ "1999": 3 })).unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape(_)));
  }

  #[test]
  fn missing_text_is_a_serialization_error() {
    let err = collect_facts(json!([{ "number": 1 }])).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
  }

  #[test]
  fn found_false_is_reported() {
    let fact: Fact = serde_json::from_value(json!({
      "number": 5, "text": "5 is the year nothing remarkable happened", "found": false,
    }))
    .unwrap();
    assert!(!fact.found());
  }
}
