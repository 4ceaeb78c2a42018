use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expansion {
  pub comments: Vec<Comment>,
  pub mores: Vec<MoreStub>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ExpansionData {
  things: Vec<Value>,
}

#[derive(Deserialize)]
struct ExpansionResponse {
  #[serde(default)]
  data: Option<ExpansionData>,
  #[serde(default)]
  errors: Vec<Value>,
}

impl Expansion {
  fn describe_error(error: Value) -> String {
    match error {
      Value::Array(parts) => parts
        .into_iter()
        .filter_map(|part| match part {
          Value::Null => None,
          Value::String(part) => Some(part),
          other => Some(other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(": "),
      Value::String(error) => error,
      other => other.to_string(),
    }
  }

  fn from_things(things: Vec<Value>) -> Result<Self> {
    let mut expansion = Self::default();

    for value in things {
      match Thing::decode(Envelope::from_value(value)?)? {
        Some(Thing::Comment(comment)) => expansion.comments.push(*comment),
        Some(Thing::More(more)) => expansion.mores.push(more),
        Some(other) => {
          debug!(name = other.name(), "skipping non-comment thing in expansion");
        }
        None => {}
      }
    }

    Ok(expansion)
  }

  /// Accepts either a bare array of things or the
  /// `{"json": {"errors": [..], "data": {"things": [..]}}}` wrapper.
  pub(crate) fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Array(things) => Self::from_things(things),
      Value::Object(mut object) => {
        let Some(wrapper) = object.remove("json") else {
          return Err(Error::envelope(
            "expected a morechildren response with a `json` field",
          ));
        };

        let ExpansionResponse { data, errors } = serde_json::from_value(wrapper)?;

        if !errors.is_empty() {
          return Err(Error::Api(
            errors.into_iter().map(Self::describe_error).collect(),
          ));
        }

        Self::from_things(data.unwrap_or_default().things)
      }
      other => Err(Error::envelope(format!(
        "expected an object or an array at the top level, found {}",
        Envelope::describe(&other)
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn things() -> Value {
    json!([
      {"kind": "t1", "data": {"name": "t1_a", "parent_id": "t3_x", "replies": ""}},
      {"kind": "more", "data": {"name": "t1_m1", "children": ["b", "c"]}},
      {"kind": "t1", "data": {"name": "t1_d", "parent_id": "t1_a", "replies": ""}},
      {"kind": "t1", "data": {"name": "t1_e", "parent_id": "t1_d", "replies": ""}},
      {"kind": "more", "data": {"name": "t1_m2", "children": ["f"]}}
    ])
  }

  #[test]
  fn from_value_reads_flat_array() {
    let expansion = Expansion::from_value(things()).unwrap();

    let names = expansion
      .comments
      .iter()
      .map(|comment| comment.name.as_str())
      .collect::<Vec<_>>();

    assert_eq!(names, ["t1_a", "t1_d", "t1_e"]);
    assert_eq!(expansion.mores.len(), 2);
    assert!(expansion.comments.iter().all(|c| c.replies.is_empty()));
  }

  #[test]
  fn from_value_unwraps_api_response() {
    let wrapped = json!({"json": {"errors": [], "data": {"things": things()}}});

    assert_eq!(
      Expansion::from_value(wrapped).unwrap(),
      Expansion::from_value(things()).unwrap()
    );
  }

  #[test]
  fn from_value_reports_api_errors() {
    let wrapped = json!({
      "json": {
        "errors": [["RATELIMIT", "you are doing that too much", null]]
      }
    });

    let Err(Error::Api(errors)) = Expansion::from_value(wrapped) else {
      panic!("expected an api error");
    };

    assert_eq!(errors, ["RATELIMIT: you are doing that too much"]);
  }

  #[test]
  fn from_value_rejects_other_objects() {
    assert!(matches!(
      Expansion::from_value(json!({"kind": "Listing", "data": {}})),
      Err(Error::MalformedEnvelope(_))
    ));

    assert!(matches!(
      Expansion::from_value(json!(7)),
      Err(Error::MalformedEnvelope(_))
    ));
  }
}
