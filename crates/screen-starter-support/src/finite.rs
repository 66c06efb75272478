use serde::{
  Serialize,
  ser::{self, Error as _},
};

type Error = serde_json::Error;

/// Walks `value` and rejects any `NaN` or infinite float, which JSON would otherwise store as `null`.
pub(crate) fn ensure_finite<T>(value: &T) -> Result<(), Error>
where
  T: Serialize + ?Sized,
{
  value.serialize(FiniteFloats)
}

struct FiniteFloats;

fn check_float(value: f64) -> Result<(), Error> {
  if value.is_finite() {
    Ok(())
  } else {
    Err(Error::custom(format!("non-finite float {value} has no JSON representation")))
  }
}

macro_rules! accept {
  ($($method:ident($ty:ty)),* $(,)?) => {
    $(
      fn $method(self, _: $ty) -> Result<(), Error> {
        Ok(())
      }
    )*
  };
}

impl ser::Serializer for FiniteFloats {
  type Ok = ();
  type Error = Error;
  type SerializeSeq = Self;
  type SerializeTuple = Self;
  type SerializeTupleStruct = Self;
  type SerializeTupleVariant = Self;
  type SerializeMap = Self;
  type SerializeStruct = Self;
  type SerializeStructVariant = Self;

  accept!(
    serialize_bool(bool),
    serialize_i8(i8),
    serialize_i16(i16),
    serialize_i32(i32),
    serialize_i64(i64),
    serialize_i128(i128),
    serialize_u8(u8),
    serialize_u16(u16),
    serialize_u32(u32),
    serialize_u64(u64),
    serialize_u128(u128),
    serialize_char(char),
    serialize_str(&str),
    serialize_bytes(&[u8]),
    serialize_unit_struct(&'static str),
  );

  fn serialize_f32(self, value: f32) -> Result<(), Error> {
    check_float(f64::from(value))
  }

  fn serialize_f64(self, value: f64) -> Result<(), Error> {
    check_float(value)
  }

  fn serialize_none(self) -> Result<(), Error> {
    Ok(())
  }

  fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), Error> {
    value.serialize(self)
  }

  fn serialize_unit(self) -> Result<(), Error> {
    Ok(())
  }

  fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Result<(), Error> {
    Ok(())
  }

  fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> Result<(), Error> {
    value.serialize(self)
  }

  fn serialize_newtype_variant<T: Serialize + ?Sized>(
    self,
    _: &'static str,
    _: u32,
    _: &'static str,
    value: &T,
  ) -> Result<(), Error> {
    value.serialize(self)
  }

  fn serialize_seq(self, _: Option<usize>) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_tuple(self, _: usize) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_tuple_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_map(self, _: Option<usize>) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, Error> {
    Ok(self)
  }

  fn serialize_struct_variant(self, _: &'static str, _: u32, _: &'static str, _: usize) -> Result<Self, Error> {
    Ok(self)
  }
}

macro_rules! compound {
  ($($trait:ident::$method:ident),* $(,)?) => {
    $(
      impl ser::$trait for FiniteFloats {
        type Ok = ();
        type Error = Error;

        fn $method<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
          value.serialize(FiniteFloats)
        }

        fn end(self) -> Result<(), Error> {
          Ok(())
        }
      }
    )*
  };
}

compound!(
  SerializeSeq::serialize_element,
  SerializeTuple::serialize_element,
  SerializeTupleStruct::serialize_field,
  SerializeTupleVariant::serialize_field,
);

impl ser::SerializeMap for FiniteFloats {
  type Ok = ();
  type Error = Error;

  fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
    key.serialize(FiniteFloats)
  }

  fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
    value.serialize(FiniteFloats)
  }

  fn end(self) -> Result<(), Error> {
    Ok(())
  }
}

impl ser::SerializeStruct for FiniteFloats {
  type Ok = ();
  type Error = Error;

  fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Result<(), Error> {
    value.serialize(FiniteFloats)
  }

  fn end(self) -> Result<(), Error> {
    Ok(())
  }
}

impl ser::SerializeStructVariant for FiniteFloats {
  type Ok = ();
  type Error = Error;

  fn serialize_field<T: Serialize + ?Sized>(&mut self, _: &'static str, value: &T) -> Result<(), Error> {
    value.serialize(FiniteFloats)
  }

  fn end(self) -> Result<(), Error> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use super::*;

  #[derive(Serialize)]
  struct Reading {
    label: String,
    samples: Vec<f32>,
  }

  #[test]
  fn test_finite_values_pass() {
    assert!(ensure_finite(&1.5_f64).is_ok());
    assert!(ensure_finite(&Some(vec![0.0_f64, -2.0])).is_ok());
    assert!(ensure_finite("text").is_ok());
  }

  #[test]
  fn test_non_finite_floats_are_rejected() {
    assert!(ensure_finite(&f64::INFINITY).is_err());
    assert!(ensure_finite(&f64::NAN).is_err());
    assert!(ensure_finite(&Some(f32::NEG_INFINITY)).is_err());
  }

  #[test]
  fn test_nested_non_finite_floats_are_rejected() {
    let reading = Reading {
      label: "temp".to_string(),
      samples: vec![1.0, f32::NAN],
    };
    assert!(ensure_finite(&reading).is_err());

    let map = BTreeMap::from([("a", 1.0_f64), ("b", f64::INFINITY)]);
    assert!(ensure_finite(&map).is_err());
  }
}
