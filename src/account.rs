use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Account {
  #[serde(default)]
  pub comment_karma: i64,
  #[serde(default, deserialize_with = "deserialize_timestamp")]
  pub created_utc: u64,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub id: String,
  #[serde(default)]
  pub link_karma: i64,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub name: String,
}

impl Account {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    Ok(serde_json::from_value(data)?)
  }
}
