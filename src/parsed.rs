use super::*;

/// What [`parse`] found, by payload shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
  Feed(Box<Harvest>),
  MoreChildren(Expansion),
  Thread(Box<Post>),
}
