use super::*;

/// A `Listing` envelope with its children still undecoded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listing {
  pub after: Option<String>,
  pub before: Option<String>,
  pub children: Vec<Envelope>,
}

#[derive(Deserialize)]
struct ListingData {
  #[serde(default)]
  after: Option<String>,
  #[serde(default)]
  before: Option<String>,
  #[serde(default)]
  children: Vec<Value>,
}

impl Listing {
  /// # Errors
  ///
  /// Fails with [`Error::MalformedEnvelope`] when the envelope is not a
  /// `Listing` or a child is not a `{kind, data}` object, and with
  /// [`Error::Json`] when the listing data has the wrong shape.
  pub fn from_envelope(envelope: Envelope) -> Result<Self> {
    if envelope.kind()? != Some(Kind::Listing) {
      return Err(Error::envelope(format!(
        "expected a `Listing`, found `{}`",
        envelope.kind
      )));
    }

    let ListingData {
      after,
      before,
      children,
    } = serde_json::from_value(envelope.data)?;

    Ok(Self {
      after,
      before,
      children: children
        .into_iter()
        .map(Envelope::from_value)
        .collect::<Result<_>>()?,
    })
  }
}
