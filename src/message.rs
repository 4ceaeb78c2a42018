use super::*;

/// An inbox item: a private message (`t4`) or a comment reply delivered to
/// the inbox (`t1` with `was_comment` set).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Message {
  #[serde(deserialize_with = "null_as_empty")]
  pub author: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub body: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub body_html: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub context: String,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_utc: u64,
  #[serde(deserialize_with = "null_as_empty")]
  pub dest: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub first_message_name: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub id: String,
  /// Title of the post a comment reply belongs to; empty for direct messages.
  #[serde(deserialize_with = "null_as_empty")]
  pub link_title: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub name: String,
  pub new: bool,
  #[serde(deserialize_with = "null_as_empty")]
  pub parent_id: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub subject: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub subreddit: String,
  pub was_comment: bool,
}

impl Message {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    Ok(serde_json::from_value(data)?)
  }

  pub(crate) fn is_inbox_reply(data: &Value) -> bool {
    data.get("was_comment").and_then(Value::as_bool) == Some(true)
  }
}
