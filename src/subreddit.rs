use super::*;

/// A `t5` thing. Fields beyond the few named here are kept in `extra`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Subreddit {
  #[serde(default, deserialize_with = "deserialize_timestamp")]
  pub created_utc: u64,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub display_name: String,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub public_description: String,
  #[serde(default)]
  pub subscribers: Option<u64>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub title: String,
}

impl Subreddit {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    Ok(serde_json::from_value(data)?)
  }
}
