use super::*;

/// The closed set of kind tags this crate decodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
  Account,
  Comment,
  Listing,
  Message,
  More,
  Post,
  Subreddit,
}

impl Kind {
  fn is_well_formed(tag: &str) -> bool {
    !tag.is_empty()
      && tag
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
  }

  /// # Errors
  ///
  /// Returns [`Error::UnknownKind`] when the tag is empty or contains
  /// anything other than ASCII alphanumerics and underscores.
  pub fn parse(tag: &str) -> Result<Option<Self>> {
    if !Self::is_well_formed(tag) {
      return Err(Error::UnknownKind(tag.to_string()));
    }

    Ok(match tag {
      "Listing" => Some(Self::Listing),
      "more" => Some(Self::More),
      "t1" => Some(Self::Comment),
      "t2" => Some(Self::Account),
      "t3" => Some(Self::Post),
      "t4" => Some(Self::Message),
      "t5" => Some(Self::Subreddit),
      _ => None,
    })
  }

  pub fn tag(self) -> &'static str {
    match self {
      Self::Account => "t2",
      Self::Comment => "t1",
      Self::Listing => "Listing",
      Self::Message => "t4",
      Self::More => "more",
      Self::Post => "t3",
      Self::Subreddit => "t5",
    }
  }
}
