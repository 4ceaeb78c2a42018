use super::*;

/// A `t1` thing. `replies` and `more` are filled in from the nested
/// `replies` listing when the comment is decoded.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Comment {
  #[serde(deserialize_with = "null_as_empty")]
  pub author: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub author_flair_css_class: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub author_flair_text: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub body: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub body_html: String,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_utc: u64,
  pub depth: u64,
  pub downs: i64,
  #[serde(deserialize_with = "deserialize_edited")]
  pub edited: u64,
  #[serde(deserialize_with = "null_as_empty")]
  pub id: String,
  pub likes: Option<bool>,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_author: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_id: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_title: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_url: String,
  #[serde(skip)]
  pub more: Option<MoreStub>,
  #[serde(deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub parent_id: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub permalink: String,
  #[serde(skip)]
  pub replies: Vec<Comment>,
  pub score: i64,
  #[serde(deserialize_with = "null_as_empty")]
  pub subreddit: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub subreddit_id: String,
  pub ups: i64,
}

impl Comment {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    let Value::Object(mut fields) = data else {
      return Err(Error::envelope(format!(
        "comment data must be an object, found {}",
        Envelope::describe(&data)
      )));
    };

    let Replies { comments, more } = Replies::assemble(fields.remove("replies"))?;

    let mut comment = serde_json::from_value::<Self>(Value::Object(fields))?;

    comment.replies = comments;
    comment.more = more;

    Ok(comment)
  }

  pub fn deleted(&self) -> bool {
    self.author == "[deleted]"
  }

  pub fn is_top_level(&self) -> bool {
    self.parent_id.starts_with("t3_")
  }
}
