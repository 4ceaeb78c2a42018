use {
  super::*,
  futures::stream::{self, StreamExt, TryStreamExt},
  reqwest::StatusCode,
};

/// One plain GET per call: no authentication, retry or rate limiting.
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub const API_BASE_URL: &str = "https://www.reddit.com";

  const CONCURRENT_EXPANSIONS: usize = 4;

  const MAX_CHILDREN_PER_REQUEST: usize = 100;

  const MORE_CHILDREN_PATH: &str = "/api/morechildren";

  fn endpoint(&self, path: &str) -> String {
    let path = path.trim_end_matches('/');

    let separator = if path.starts_with('/') { "" } else { "/" };

    format!(
      "{}{separator}{path}.json",
      self.base_url.trim_end_matches('/')
    )
  }

  /// Results come back in batch order.
  ///
  /// # Errors
  ///
  /// Fails if any batch fails; see [`Client::more_children`].
  pub async fn expand(&self, link: &str, more: &MoreStub) -> Result<Expansion> {
    let expansions = stream::iter(more.children.chunks(Self::MAX_CHILDREN_PER_REQUEST))
      .map(|children| self.more_children(link, children))
      .buffered(Self::CONCURRENT_EXPANSIONS)
      .try_collect::<Vec<_>>()
      .await?;

    Ok(expansions.into_iter().fold(
      Expansion::default(),
      |mut merged, expansion| {
        merged.comments.extend(expansion.comments);
        merged.mores.extend(expansion.mores);
        merged
      },
    ))
  }

  async fn fetch(&self, url: String, query: &[(&str, &str)]) -> Result<Vec<u8>> {
    debug!(%url, "sending request");

    let response = self
      .client
      .get(&url)
      .query(&[("raw_json", "1")])
      .query(query)
      .send()
      .await?;

    let status = response.status();

    if status != StatusCode::OK {
      return Err(Error::Status {
        status: status.as_u16(),
        url,
      });
    }

    Ok(response.bytes().await?.to_vec())
  }

  /// Fetches a user, subreddit or inbox feed, e.g. `/r/rust/new`.
  ///
  /// # Errors
  ///
  /// Fails on transport errors, on any status other than 200, and as
  /// [`parse_raw_listing`] fails.
  pub async fn listing(&self, path: &str) -> Result<Harvest> {
    parse_raw_listing(&self.fetch(self.endpoint(path), &[]).await?)
  }

  /// Fetches one morechildren batch for the post named `link`.
  ///
  /// # Errors
  ///
  /// Fails on transport errors, on any status other than 200, and as
  /// [`parse_more_children`] fails.
  pub async fn more_children(
    &self,
    link: &str,
    children: &[String],
  ) -> Result<Expansion> {
    let children = children.join(",");

    parse_more_children(
      &self
        .fetch(
          self.endpoint(Self::MORE_CHILDREN_PATH),
          &[
            ("api_type", "json"),
            ("children", children.as_str()),
            ("link_id", link),
          ],
        )
        .await?,
    )
  }

  /// # Errors
  ///
  /// Fails if the underlying HTTP client cannot be built.
  pub fn new(user_agent: &str) -> Result<Self> {
    Ok(Self {
      base_url: Self::API_BASE_URL.to_string(),
      client: reqwest::Client::builder().user_agent(user_agent).build()?,
    })
  }

  /// Fetches a thread by permalink, e.g. `/r/rust/comments/1c2f3s/title/`.
  ///
  /// # Errors
  ///
  /// Fails on transport errors, on any status other than 200, and as
  /// [`parse_thread`] fails.
  pub async fn thread(&self, permalink: &str) -> Result<Post> {
    parse_thread(&self.fetch(self.endpoint(permalink), &[]).await?)
  }

  #[must_use]
  pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      ..self
    }
  }
}
