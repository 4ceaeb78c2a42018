use super::*;

/// A `t3` thing. Only [`parse_thread`] populates `replies` and `more`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Post {
  #[serde(deserialize_with = "null_as_empty")]
  pub author: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub author_flair_css_class: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub author_flair_text: String,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_utc: u64,
  #[serde(deserialize_with = "null_as_empty")]
  pub domain: String,
  pub downs: i64,
  #[serde(deserialize_with = "deserialize_edited")]
  pub edited: u64,
  pub hidden: bool,
  #[serde(deserialize_with = "null_as_empty")]
  pub id: String,
  pub is_self: bool,
  pub likes: Option<bool>,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_flair_css_class: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub link_flair_text: String,
  pub locked: bool,
  #[serde(skip)]
  pub more: Option<MoreStub>,
  #[serde(deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(rename = "over_18")]
  pub nsfw: bool,
  pub num_comments: u64,
  #[serde(deserialize_with = "null_as_empty")]
  pub permalink: String,
  #[serde(skip)]
  pub replies: Vec<Comment>,
  pub score: i64,
  #[serde(rename = "selftext", deserialize_with = "null_as_empty")]
  pub self_text: String,
  #[serde(rename = "selftext_html", deserialize_with = "null_as_empty")]
  pub self_text_html: String,
  pub stickied: bool,
  #[serde(deserialize_with = "null_as_empty")]
  pub subreddit: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub subreddit_id: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub title: String,
  pub ups: i64,
  #[serde(deserialize_with = "null_as_empty")]
  pub url: String,
}

impl Post {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    Ok(serde_json::from_value(data)?)
  }

  pub fn deleted(&self) -> bool {
    self.author == "[deleted]"
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  #[test]
  fn decode_maps_wire_names() {
    let post = Post::decode(json!({
      "name": "t3_552rz1",
      "title": "Weekly thread",
      "selftext": "",
      "over_18": true,
      "score": -3,
      "link_flair_css_class": null,
      "created_utc": 1_474_325_591.0,
      "edited": false,
      "some_future_field": {"nested": true}
    }))
    .unwrap();

    assert_eq!(post.name, "t3_552rz1");
    assert_eq!(post.self_text, "");
    assert!(post.nsfw);
    assert_eq!(post.score, -3);
    assert_eq!(post.link_flair_css_class, "");
    assert_eq!(post.created_utc, 1_474_325_591);
    assert!(post.replies.is_empty());
  }

  #[test]
  fn decode_ignores_replies_field() {
    let post = Post::decode(json!({"name": "t3_x", "replies": "junk"})).unwrap();

    assert!(post.replies.is_empty());
    assert!(post.more.is_none());
  }
}
