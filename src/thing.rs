use super::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Thing {
  Account(Box<Account>),
  Comment(Box<Comment>),
  Message(Box<Message>),
  More(MoreStub),
  Post(Box<Post>),
  Subreddit(Box<Subreddit>),
}

impl Thing {
  /// Unrecognized kinds and nested listings yield `Ok(None)`.
  ///
  /// # Errors
  ///
  /// Fails on a malformed kind tag or when the payload does not match the
  /// shape of its kind.
  pub fn decode(envelope: Envelope) -> Result<Option<Self>> {
    let Some(kind) = envelope.kind()? else {
      debug!(kind = %envelope.kind, "skipping unrecognized kind");
      return Ok(None);
    };

    let Envelope { data, .. } = envelope;

    Ok(Some(match kind {
      Kind::Account => Self::Account(Box::new(Account::decode(data)?)),
      Kind::Comment if Message::is_inbox_reply(&data) => {
        Self::Message(Box::new(Message::decode(data)?))
      }
      Kind::Comment => Self::Comment(Box::new(Comment::decode(data)?)),
      Kind::Listing => {
        debug!("skipping listing nested among listing children");
        return Ok(None);
      }
      Kind::Message => Self::Message(Box::new(Message::decode(data)?)),
      Kind::More => Self::More(MoreStub::decode(data)?),
      Kind::Post => Self::Post(Box::new(Post::decode(data)?)),
      Kind::Subreddit => Self::Subreddit(Box::new(Subreddit::decode(data)?)),
    }))
  }

  pub fn name(&self) -> &str {
    match self {
      Self::Account(account) => &account.name,
      Self::Comment(comment) => &comment.name,
      Self::Message(message) => &message.name,
      Self::More(more) => &more.name,
      Self::Post(post) => &post.name,
      Self::Subreddit(subreddit) => &subreddit.name,
    }
  }
}
