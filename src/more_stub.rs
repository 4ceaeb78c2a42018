use super::*;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct MoreStub {
  pub children: Vec<String>,
  pub count: u64,
  pub depth: u64,
  #[serde(deserialize_with = "null_as_empty")]
  pub id: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub name: String,
  #[serde(deserialize_with = "null_as_empty")]
  pub parent_id: String,
}

impl MoreStub {
  pub(crate) fn decode(data: Value) -> Result<Self> {
    Ok(serde_json::from_value(data)?)
  }

  /// "continue this thread" marker.
  pub fn is_continuation(&self) -> bool {
    self.children.is_empty()
  }
}
