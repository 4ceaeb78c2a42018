use {
  anyhow::Context,
  arguments::{Arguments, Command},
  clap::Parser,
  crossterm::style::Stylize,
  render::Renderer,
  snoo::{Client, Comment, Expansion, Harvest, MoreStub, Parsed, Post},
  std::{
    backtrace::BacktraceStatus,
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process,
  },
  tracing_subscriber::EnvFilter,
  utils::{format_points, truncate, unescape, wrap_text},
};

mod arguments;
mod render;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging();

  let renderer = Renderer::new(arguments.width);

  let lines = match &arguments.command {
    Command::Feed { path } => renderer.harvest(
      &arguments
        .client()?
        .listing(path)
        .await
        .with_context(|| format!("failed to load feed {path}"))?,
    ),
    Command::File { path } => {
      let bytes = fs::read(path)
        .with_context(|| format!("could not read {}", path.display()))?;

      renderer.parsed(
        &snoo::parse(&bytes)
          .with_context(|| format!("could not parse {}", path.display()))?,
      )
    }
    Command::Thread { expand, permalink } => {
      let client = arguments.client()?;

      let post = client
        .thread(permalink)
        .await
        .with_context(|| format!("failed to load thread {permalink}"))?;

      let mut lines = renderer.thread(&post);

      if *expand && let Some(more) = &post.more {
        let expansion = client
          .expand(&post.name, more)
          .await
          .context("failed to expand truncated replies")?;

        lines.extend(renderer.expansion(&expansion));
      }

      lines
    }
  };

  let mut stdout = io::stdout().lock();

  for line in lines {
    writeln!(stdout, "{line}")?;
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
