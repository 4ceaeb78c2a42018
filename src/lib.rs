//! Typed decoding of reddit listings, threads and morechildren payloads.

use {
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::{Map, Value},
  tracing::debug,
  utils::{deserialize_edited, deserialize_timestamp, null_as_empty},
};

pub use {
  account::Account,
  client::Client,
  comment::Comment,
  envelope::{Envelope, Shape},
  error::Error,
  expansion::Expansion,
  harvest::Harvest,
  kind::Kind,
  listing::Listing,
  message::Message,
  more_stub::MoreStub,
  parsed::Parsed,
  parser::{parse, parse_more_children, parse_raw_listing, parse_thread},
  post::Post,
  replies::Replies,
  subreddit::Subreddit,
  thing::Thing,
};

mod account;
mod client;
mod comment;
mod envelope;
mod error;
mod expansion;
mod harvest;
mod kind;
mod listing;
mod message;
mod more_stub;
mod parsed;
mod parser;
mod post;
mod replies;
mod subreddit;
mod thing;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
