use super::*;

fn is_thread(value: &Value) -> bool {
  matches!(
    value,
    Value::Array(items)
      if items.len() == 2
        && items.iter().all(|item| {
          item.get("kind").and_then(Value::as_str) == Some(Kind::Listing.tag())
        })
  )
}

/// Decodes any payload this crate understands, routing on its shape:
///
/// - a two-element array of listings is a thread
/// - any other array, or an object with a `json` field, is a morechildren
///   expansion
/// - any other object is a feed listing, or a single thing
///
/// # Errors
///
/// Fails with [`Error::MalformedEnvelope`] when the top level is neither an
/// object nor an array, and otherwise as the routed entry point fails.
pub fn parse(bytes: &[u8]) -> Result<Parsed> {
  let value = serde_json::from_slice::<Value>(bytes)?;

  if is_thread(&value) {
    return Ok(Parsed::Thread(Box::new(thread(Shape::from_value(value)?)?)));
  }

  let wrapped = value.get("json").is_some();

  match value {
    Value::Object(_) if !wrapped => Ok(Parsed::Feed(Box::new(
      Harvest::from_envelope(Envelope::from_value(value)?)?,
    ))),
    value @ (Value::Array(_) | Value::Object(_)) => {
      Ok(Parsed::MoreChildren(Expansion::from_value(value)?))
    }
    other => Err(Error::envelope(format!(
      "expected an object or an array at the top level, found {}",
      Envelope::describe(&other)
    ))),
  }
}

/// Decodes a morechildren response into flat comments and further stubs.
///
/// # Errors
///
/// Fails on invalid JSON, on a top level that is neither the flat array nor
/// the `json` wrapper, on errors reported inside the wrapper, and on any
/// thing that does not decode.
pub fn parse_more_children(bytes: &[u8]) -> Result<Expansion> {
  Expansion::from_value(serde_json::from_slice(bytes)?)
}

/// Decodes a user, subreddit or inbox feed.
///
/// # Errors
///
/// Fails with [`Error::MalformedEnvelope`] unless the payload is a single
/// `{kind, data}` object, and otherwise as [`Harvest::classify`] fails.
pub fn parse_raw_listing(bytes: &[u8]) -> Result<Harvest> {
  match Shape::decode(bytes)? {
    Shape::Many(envelopes) => Err(Error::envelope(format!(
      "expected a single listing envelope, found an array of {}",
      envelopes.len()
    ))),
    Shape::Single(envelope) => Harvest::from_envelope(envelope),
  }
}

/// Decodes a thread view: the post from the first listing, with the reply
/// tree assembled from the second attached to it.
///
/// # Errors
///
/// Fails with [`Error::MalformedEnvelope`] when the top level is neither an
/// object nor an array, and with [`Error::MalformedThread`] unless it is a
/// two-element array whose first listing holds exactly one post.
pub fn parse_thread(bytes: &[u8]) -> Result<Post> {
  thread(Shape::decode(bytes)?)
}

fn thread(shape: Shape) -> Result<Post> {
  let envelopes = match shape {
    Shape::Many(envelopes) => envelopes,
    Shape::Single(envelope) => {
      return Err(Error::thread(format!(
        "expected a two-element array, found a single `{}` envelope",
        envelope.kind
      )));
    }
  };

  let [head, tail] = <[Envelope; 2]>::try_from(envelopes).map_err(|envelopes| {
    Error::thread(format!(
      "expected two listings, found {} elements",
      envelopes.len()
    ))
  })?;

  if head.kind()? != Some(Kind::Listing) {
    return Err(Error::thread(format!(
      "expected the post listing first, found `{}`",
      head.kind
    )));
  }

  let Harvest { mut posts, .. } = Harvest::classify(Listing::from_envelope(head)?)?;

  let count = posts.len();

  let (Some(mut post), 0) = (posts.pop(), posts.len()) else {
    return Err(Error::thread(format!(
      "expected exactly one post, found {count}"
    )));
  };

  let Replies { comments, more } = Replies::from_listing(Listing::from_envelope(tail)?)?;

  post.replies = comments;
  post.more = more;

  Ok(post)
}
