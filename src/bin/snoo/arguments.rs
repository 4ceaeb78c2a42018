use {super::*, clap::Subcommand};

#[derive(Debug, Parser)]
#[command(name = "snoo")]
#[command(about = "Fetch and print reddit threads, feeds and morechildren expansions", long_about = None)]
pub(crate) struct Arguments {
  /// API host to query
  #[arg(long, env = "SNOO_BASE_URL", default_value = Client::API_BASE_URL)]
  pub(crate) base_url: String,

  #[command(subcommand)]
  pub(crate) command: Command,

  /// User agent sent with every request
  #[arg(long, env = "SNOO_USER_AGENT", default_value = concat!("snoo/", env!("CARGO_PKG_VERSION")))]
  pub(crate) user_agent: String,

  /// Wrap text at this many columns
  #[arg(long, default_value_t = 100)]
  pub(crate) width: usize,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
  /// Fetch a feed listing such as /r/rust/new or /user/spez/comments
  Feed {
    /// Listing path
    path: String,
  },

  /// Parse a saved JSON payload of any supported shape
  File {
    /// Path to the payload
    path: PathBuf,
  },

  /// Fetch a thread and print its comment tree
  Thread {
    /// Also fetch the replies truncated at the top level
    #[arg(long)]
    expand: bool,

    /// Thread permalink, e.g. /r/rust/comments/1c2f3s/some_title/
    permalink: String,
  },
}

impl Arguments {
  pub(crate) fn client(&self) -> Result<Client> {
    Ok(Client::new(&self.user_agent)?.with_base_url(self.base_url.clone()))
  }
}
