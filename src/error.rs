#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("api reported errors: {}", .0.join("; "))]
  Api(Vec<String>),

  #[error("failed to decode payload")]
  Json(#[from] serde_json::Error),

  #[error("malformed envelope: {0}")]
  MalformedEnvelope(String),

  #[error("malformed thread: {0}")]
  MalformedThread(String),

  #[error("request failed")]
  Request(#[from] reqwest::Error),

  #[error("unexpected status {status} from {url}")]
  Status { status: u16, url: String },

  #[error("invalid kind tag {0:?}")]
  UnknownKind(String),
}

impl Error {
  pub(crate) fn envelope(message: impl Into<String>) -> Self {
    Self::MalformedEnvelope(message.into())
  }

  pub(crate) fn thread(message: impl Into<String>) -> Self {
    Self::MalformedThread(message.into())
  }
}
