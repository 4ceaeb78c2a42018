use super::*;

/// A `{kind, data}` wrapper whose payload has not been decoded yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
  pub data: Value,
  pub kind: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
  Many(Vec<Envelope>),
  Single(Envelope),
}

impl Envelope {
  pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
      Value::Array(_) => "an array",
      Value::Bool(_) => "a boolean",
      Value::Null => "null",
      Value::Number(_) => "a number",
      Value::Object(_) => "an object",
      Value::String(_) => "a string",
    }
  }

  /// # Errors
  ///
  /// Returns [`Error::MalformedEnvelope`] when `value` is not an object, or
  /// when `kind` is missing or not a string, or when `data` is missing.
  pub fn from_value(value: Value) -> Result<Self> {
    let Value::Object(mut object) = value else {
      return Err(Error::envelope(format!(
        "expected an object, found {}",
        Self::describe(&value)
      )));
    };

    let kind = match object.remove("kind") {
      Some(Value::String(kind)) => kind,
      Some(other) => {
        return Err(Error::envelope(format!(
          "`kind` must be a string, found {}",
          Self::describe(&other)
        )));
      }
      None => return Err(Error::envelope("missing `kind`")),
    };

    let data = object
      .remove("data")
      .ok_or_else(|| Error::envelope(format!("`{kind}` envelope has no `data`")))?;

    Ok(Self { data, kind })
  }

  /// # Errors
  ///
  /// Returns [`Error::UnknownKind`] for a malformed tag.
  pub fn kind(&self) -> Result<Option<Kind>> {
    Kind::parse(&self.kind)
  }
}

impl Shape {
  /// # Errors
  ///
  /// Fails with [`Error::Json`] on invalid JSON and with
  /// [`Error::MalformedEnvelope`] when the top level is neither an object nor
  /// an array, or when any envelope lacks `kind` or `data`.
  pub fn decode(bytes: &[u8]) -> Result<Self> {
    Self::from_value(serde_json::from_slice(bytes)?)
  }

  pub(crate) fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Array(items) => Ok(Self::Many(
        items
          .into_iter()
          .map(Envelope::from_value)
          .collect::<Result<_>>()?,
      )),
      value @ Value::Object(_) => Ok(Self::Single(Envelope::from_value(value)?)),
      other => Err(Error::envelope(format!(
        "expected an object or an array at the top level, found {}",
        Envelope::describe(&other)
      ))),
    }
  }
}
