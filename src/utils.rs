use super::*;

/// `false`, `true` and `null` all map to `0`.
pub(crate) fn deserialize_edited<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null | Value::Bool(_)) => Ok(0),
    Some(Value::Number(number)) => seconds(&number),
    Some(Value::String(s)) => Err(de::Error::invalid_type(
      Unexpected::Str(&s),
      &"false or epoch seconds",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"false or epoch seconds",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"false or epoch seconds",
    )),
  }
}

pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<serde_json::Number>::deserialize(deserializer)? {
    Some(number) => seconds(&number),
    None => Ok(0),
  }
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds<E>(number: &serde_json::Number) -> Result<u64, E>
where
  E: de::Error,
{
  if let Some(seconds) = number.as_u64() {
    return Ok(seconds);
  }

  match number.as_f64() {
    Some(seconds) if seconds.is_finite() && seconds >= 0.0 => {
      Ok(seconds as u64)
    }
    Some(seconds) => Err(E::invalid_value(
      Unexpected::Float(seconds),
      &"non-negative epoch seconds",
    )),
    None => Err(E::custom("timestamp out of range")),
  }
}

#[cfg(test)]
mod tests {
  use {super::*, rstest::rstest};

  #[derive(Debug, Deserialize)]
  struct Edited {
    #[serde(default, deserialize_with = "deserialize_edited")]
    edited: u64,
  }

  #[derive(Debug, Deserialize)]
  struct Nullable {
    #[serde(default, deserialize_with = "null_as_empty")]
    value: String,
  }

  #[derive(Debug, Deserialize)]
  struct Timestamp {
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    created_utc: u64,
  }

  fn edited(input: &str) -> Result<u64, serde_json::Error> {
    serde_json::from_str::<Edited>(input).map(|wrapper| wrapper.edited)
  }

  #[rstest]
  #[case::never(r#"{"edited": false}"#, 0)]
  #[case::integer(r#"{"edited": 1366216653}"#, 1_366_216_653)]
  #[case::float(r#"{"edited": 1366216653.0}"#, 1_366_216_653)]
  #[case::null(r#"{"edited": null}"#, 0)]
  #[case::missing("{}", 0)]
  #[case::without_timestamp(r#"{"edited": true}"#, 0)]
  fn edited_normalizes_to_seconds(#[case] input: &str, #[case] expected: u64) {
    assert_eq!(edited(input).unwrap(), expected);
  }

  #[rstest]
  #[case::string(r#"{"edited": "yesterday"}"#)]
  #[case::negative(r#"{"edited": -5}"#)]
  #[case::array(r#"{"edited": [1]}"#)]
  fn edited_rejects_other_shapes(#[case] input: &str) {
    assert!(edited(input).is_err());
  }

  #[test]
  fn null_as_empty_maps_null_and_absence_to_empty() {
    let parse = |input| {
      serde_json::from_str::<Nullable>(input)
        .unwrap()
        .value
    };

    assert_eq!(parse(r#"{"value": null}"#), "");
    assert_eq!(parse("{}"), "");
    assert_eq!(parse(r#"{"value": "black"}"#), "black");
  }

  #[test]
  fn timestamp_truncates_fractional_seconds() {
    let parsed =
      serde_json::from_str::<Timestamp>(r#"{"created_utc": 1474325591.5}"#)
        .unwrap();

    assert_eq!(parsed.created_utc, 1_474_325_591);
  }

  #[test]
  fn timestamp_rejects_strings() {
    assert!(
      serde_json::from_str::<Timestamp>(r#"{"created_utc": "now"}"#).is_err()
    );
  }
}
