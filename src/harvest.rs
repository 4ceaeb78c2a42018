use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Harvest {
  pub accounts: Vec<Account>,
  pub after: Option<String>,
  pub before: Option<String>,
  pub comments: Vec<Comment>,
  pub messages: Vec<Message>,
  pub more: Option<MoreStub>,
  pub posts: Vec<Post>,
  pub subreddits: Vec<Subreddit>,
}

impl Harvest {
  /// # Errors
  ///
  /// Fails if any child has a malformed kind tag or does not decode.
  pub fn classify(listing: Listing) -> Result<Self> {
    let mut harvest = Self {
      after: listing.after,
      before: listing.before,
      ..Self::default()
    };

    for child in listing.children {
      if let Some(thing) = Thing::decode(child)? {
        harvest.push(thing);
      }
    }

    Ok(harvest)
  }

  pub(crate) fn from_envelope(envelope: Envelope) -> Result<Self> {
    if envelope.kind()? == Some(Kind::Listing) {
      return Self::classify(Listing::from_envelope(envelope)?);
    }

    let mut harvest = Self::default();

    if let Some(thing) = Thing::decode(envelope)? {
      harvest.push(thing);
    }

    Ok(harvest)
  }

  pub fn is_empty(&self) -> bool {
    self.accounts.is_empty()
      && self.comments.is_empty()
      && self.messages.is_empty()
      && self.posts.is_empty()
      && self.subreddits.is_empty()
      && self.more.is_none()
  }

  pub fn len(&self) -> usize {
    self.accounts.len()
      + self.comments.len()
      + self.messages.len()
      + self.posts.len()
      + self.subreddits.len()
  }

  fn push(&mut self, thing: Thing) {
    match thing {
      Thing::Account(account) => self.accounts.push(*account),
      Thing::Comment(comment) => self.comments.push(*comment),
      Thing::Message(message) => self.messages.push(*message),
      Thing::More(more) => {
        if let Some(previous) = self.more.replace(more) {
          debug!(previous = %previous.name, "replacing more stub");
        }
      }
      Thing::Post(post) => self.posts.push(*post),
      Thing::Subreddit(subreddit) => self.subreddits.push(*subreddit),
    }
  }
}
