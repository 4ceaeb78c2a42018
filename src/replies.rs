use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Replies {
  pub comments: Vec<Comment>,
  pub more: Option<MoreStub>,
}

impl Replies {
  /// `""` and anything else that is not an object means no replies.
  ///
  /// # Errors
  ///
  /// Fails on a malformed nested listing or comment.
  pub fn assemble(replies: Option<Value>) -> Result<Self> {
    match replies {
      Some(value @ Value::Object(_)) => {
        Self::from_listing(Listing::from_envelope(Envelope::from_value(value)?)?)
      }
      _ => Ok(Self::default()),
    }
  }

  /// The last stub on a level wins.
  ///
  /// # Errors
  ///
  /// See [`Replies::assemble`].
  pub fn from_listing(listing: Listing) -> Result<Self> {
    let mut replies = Self::default();

    for child in listing.children {
      match child.kind()? {
        Some(Kind::Comment) => replies.comments.push(Comment::decode(child.data)?),
        Some(Kind::More) => {
          let more = MoreStub::decode(child.data)?;

          if let Some(previous) = replies.more.replace(more) {
            debug!(previous = %previous.name, "replacing more stub");
          }
        }
        Some(kind) => {
          debug!(kind = kind.tag(), "skipping non-comment reply");
        }
        None => {
          debug!(kind = %child.kind, "skipping unrecognized kind");
        }
      }
    }

    Ok(replies)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn comment(name: &str, replies: Value) -> Value {
    json!({
      "kind": "t1",
      "data": {
        "name": name,
        "author": format!("author_of_{name}"),
        "edited": false,
        "replies": replies
      }
    })
  }

  fn listing(children: Vec<Value>) -> Value {
    json!({
      "kind": "Listing",
      "data": {"after": null, "before": null, "children": children}
    })
  }

  fn more(name: &str, children: &[&str]) -> Value {
    json!({
      "kind": "more",
      "data": {"name": name, "count": children.len(), "children": children}
    })
  }

  fn depth_is_consistent(comments: &[Comment], depth: u64) -> bool {
    comments.iter().all(|comment| {
      comment.depth == depth
        && comment.more.as_ref().is_none_or(|more| more.depth == depth + 1)
        && depth_is_consistent(&comment.replies, depth + 1)
    })
  }

  #[test]
  fn assemble_treats_empty_string_as_no_replies() {
    assert_eq!(
      Replies::assemble(Some(json!(""))).unwrap(),
      Replies::default()
    );
    assert_eq!(Replies::assemble(None).unwrap(), Replies::default());
    assert_eq!(
      Replies::assemble(Some(Value::Null)).unwrap(),
      Replies::default()
    );
  }

  #[test]
  fn assemble_builds_nested_tree_in_wire_order() {
    let tree = listing(vec![
      comment(
        "t1_a",
        listing(vec![
          comment("t1_a1", json!("")),
          comment("t1_a2", listing(vec![comment("t1_a2x", json!(""))])),
        ]),
      ),
      comment("t1_b", json!("")),
    ]);

    let replies = Replies::assemble(Some(tree)).unwrap();

    let names = replies
      .comments
      .iter()
      .map(|comment| comment.name.as_str())
      .collect::<Vec<_>>();

    assert_eq!(names, ["t1_a", "t1_b"]);
    assert_eq!(replies.comments[0].replies[0].name, "t1_a1");
    assert_eq!(replies.comments[0].replies[1].name, "t1_a2");
    assert_eq!(replies.comments[0].replies[1].replies[0].name, "t1_a2x");
    assert!(replies.comments[1].replies.is_empty());
    assert!(replies.more.is_none());
  }

  #[test]
  fn assemble_keeps_children_and_more_on_the_same_comment() {
    let tree = listing(vec![comment(
      "t1_a",
      listing(vec![
        comment("t1_a1", json!("")),
        more("t1_hidden", &["hidden1", "hidden2"]),
      ]),
    )]);

    let replies = Replies::assemble(Some(tree)).unwrap();

    let parent = &replies.comments[0];

    assert_eq!(parent.replies.len(), 1);
    assert_eq!(
      parent.more.as_ref().map(|more| more.children.clone()),
      Some(vec!["hidden1".to_string(), "hidden2".to_string()])
    );
    assert!(replies.more.is_none());
  }

  #[test]
  fn assemble_keeps_the_last_more_stub() {
    let tree = listing(vec![
      more("t1_first", &["x"]),
      comment("t1_a", json!("")),
      more("t1_second", &["y", "z"]),
    ]);

    let replies = Replies::assemble(Some(tree)).unwrap();

    assert_eq!(replies.comments.len(), 1);
    assert_eq!(replies.more.unwrap().name, "t1_second");
  }

  #[test]
  fn assemble_with_only_a_stub() {
    let replies =
      Replies::assemble(Some(listing(vec![more("t1_only", &["a"])]))).unwrap();

    assert!(replies.comments.is_empty());
    assert_eq!(replies.more.unwrap().name, "t1_only");
  }

  #[test]
  fn assemble_skips_unrecognized_kinds() {
    let tree = listing(vec![
      comment("t1_a", json!("")),
      json!({"kind": "t9", "data": {"name": "t9_future"}}),
      comment("t1_b", json!("")),
    ]);

    let replies = Replies::assemble(Some(tree)).unwrap();

    assert_eq!(replies.comments.len(), 2);
  }

  #[test]
  fn assemble_places_stubs_at_their_own_depth() {
    let mut nested = listing(vec![json!({
      "kind": "more",
      "data": {"name": "t1_deep", "depth": 3, "children": ["deep"]}
    })]);

    for (depth, name) in [(2, "t1_c"), (1, "t1_b"), (0, "t1_a")] {
      nested = listing(vec![json!({
        "kind": "t1",
        "data": {"name": name, "depth": depth, "replies": nested}
      })]);
    }

    let replies = Replies::assemble(Some(nested)).unwrap();

    assert!(depth_is_consistent(&replies.comments, 0));
    assert_eq!(
      replies.comments[0].replies[0].replies[0]
        .more
        .as_ref()
        .map(|more| more.name.as_str()),
      Some("t1_deep")
    );
  }

  #[test]
  fn assemble_rejects_malformed_nested_listing() {
    assert!(matches!(
      Replies::assemble(Some(json!({"kind": "Listing"}))),
      Err(Error::MalformedEnvelope(_))
    ));

    assert!(matches!(
      Replies::assemble(Some(listing(vec![json!({"kind": "", "data": {}})]))),
      Err(Error::UnknownKind(_))
    ));
  }
}
