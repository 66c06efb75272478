use indexmap::IndexMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::finite::ensure_finite;

#[derive(Debug, thiserror::Error)]
pub enum ExtrasError {
  #[error("failed to encode extra '{key}': {inner}")]
  Encode { key: String, inner: serde_json::Error },

  #[error("failed to decode extra '{key}' at path {path}: {inner}")]
  Decode {
    key: String,
    path: String,
    inner: serde_json::Error,
  },
}

/// Ordered key-value state carried across a navigation boundary.
///
/// Values are stored as JSON so any `Serialize` type can travel through a
/// payload. Insertion order is preserved, so keys come back out in the order
/// the generated builder wrote them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras {
  values: IndexMap<String, Value>,
}

impl Extras {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Serializes `value` and stores it under `key`, replacing any previous value.
  ///
  /// Fails when `value` holds a `NaN` or infinite float anywhere inside it.
  pub fn put<T>(&mut self, key: &str, value: &T) -> Result<(), ExtrasError>
  where
    T: Serialize + ?Sized,
  {
    let encode_error = |inner| ExtrasError::Encode {
      key: key.to_string(),
      inner,
    };
    ensure_finite(value).map_err(encode_error)?;
    let value = serde_json::to_value(value).map_err(encode_error)?;
    self.values.insert(key.to_string(), value);
    Ok(())
  }

  /// Reads the value stored under `key`.
  ///
  /// Returns `Ok(None)` when the key is missing or holds `null`, and an error
  /// naming the offending path when the stored value has a different shape.
  pub fn try_get<T>(&self, key: &str) -> Result<Option<T>, ExtrasError>
  where
    T: DeserializeOwned,
  {
    let Some(value) = self.values.get(key).filter(|value| !value.is_null()) else {
      return Ok(None);
    };

    serde_path_to_error::deserialize(value)
      .map(Some)
      .map_err(|err| ExtrasError::Decode {
        key: key.to_string(),
        path: err.path().to_string(),
        inner: err.into_inner(),
      })
  }

  /// Reads the value stored under `key`, treating a missing, null or
  /// mismatched value as absent.
  #[must_use]
  pub fn get<T>(&self, key: &str) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.try_get(key).ok().flatten()
  }

  #[must_use]
  pub fn get_or<T>(&self, key: &str, default: T) -> T
  where
    T: DeserializeOwned,
  {
    self.get(key).unwrap_or(default)
  }

  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    self.values.contains_key(key)
  }

  pub fn remove(&mut self, key: &str) -> Option<Value> {
    self.values.shift_remove(key)
  }

  /// Copies every entry of `other` into `self`, overwriting shared keys.
  pub fn put_all(&mut self, other: &Extras) {
    for (key, value) in &other.values {
      self.values.insert(key.clone(), value.clone());
    }
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.values.keys().map(String::as_str)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.values.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use serde::{Deserialize, Serialize};

  use super::*;

  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  struct User {
    name: String,
    age: u32,
  }

  #[test]
  fn test_put_and_get_primitive() {
    let mut extras = Extras::new();
    extras.put("id", &42_i32).unwrap();
    assert_eq!(extras.get::<i32>("id"), Some(42));
    assert!(extras.contains_key("id"));
  }

  #[test]
  fn test_get_missing_key_is_none() {
    let extras = Extras::new();
    assert_eq!(extras.get::<String>("tag"), None);
    assert_eq!(extras.get_or("count", 7_i64), 7);
  }

  #[test]
  fn test_null_value_is_treated_as_missing() {
    let mut extras = Extras::new();
    extras.put("tag", &Option::<String>::None).unwrap();
    assert!(extras.contains_key("tag"));
    assert_eq!(extras.try_get::<String>("tag").unwrap(), None);
    assert_eq!(extras.get_or("tag", "none".to_string()), "none");
  }

  #[test]
  fn test_mismatched_value_reports_decode_error() {
    let mut extras = Extras::new();
    extras.put("id", "not a number").unwrap();

    let err = extras.try_get::<i32>("id").unwrap_err();
    assert!(matches!(err, ExtrasError::Decode { ref key, .. } if key == "id"));
    assert_eq!(extras.get::<i32>("id"), None);
    assert_eq!(extras.get_or("id", 3), 3);
  }

  #[test]
  fn test_non_finite_float_fails_to_encode() {
    let mut extras = Extras::new();
    let err = extras.put("score", &f64::INFINITY).unwrap_err();
    assert!(matches!(err, ExtrasError::Encode { ref key, .. } if key == "score"));
    assert!(!extras.contains_key("score"));

    assert!(extras.put("samples", &vec![1.0_f32, f32::NAN]).is_err());
    assert!(extras.is_empty());
  }

  #[test]
  fn test_serializable_value_round_trip() {
    let user = User {
      name: "ada".to_string(),
      age: 36,
    };
    let mut extras = Extras::new();
    extras.put("user", &user).unwrap();
    assert_eq!(extras.get::<User>("user"), Some(user));
  }

  #[test]
  fn test_keys_preserve_insertion_order() {
    let mut extras = Extras::new();
    extras.put("zeta", &1).unwrap();
    extras.put("alpha", &2).unwrap();
    extras.put("mid", &3).unwrap();
    assert_eq!(extras.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
  }

  #[test]
  fn test_put_all_overwrites_shared_keys() {
    let mut base = Extras::new();
    base.put("a", &1).unwrap();
    base.put("b", &2).unwrap();

    let mut other = Extras::new();
    other.put("b", &20).unwrap();
    other.put("c", &30).unwrap();

    base.put_all(&other);
    assert_eq!(base.len(), 3);
    assert_eq!(base.get::<i32>("b"), Some(20));
    assert_eq!(base.get::<i32>("c"), Some(30));
  }

  #[test]
  fn test_remove_keeps_remaining_order() {
    let mut extras = Extras::new();
    extras.put("a", &1).unwrap();
    extras.put("b", &2).unwrap();
    extras.put("c", &3).unwrap();
    assert!(extras.remove("b").is_some());
    assert_eq!(extras.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(extras.remove("b").is_none());
  }
}
