use super::*;

const INDENT: &str = "  ";

const MIN_BODY_WIDTH: usize = 20;

const SNIPPET_CHARS: usize = 80;

pub(crate) struct Renderer {
  width: usize,
}

impl Renderer {
  fn comment(&self, comment: &Comment, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);

    let mut header = format!(
      "{indent}{} · {}",
      comment.author,
      format_points(comment.score)
    );

    if comment.edited != 0 {
      header.push_str(" · edited");
    }

    lines.push(header);

    let width = self
      .width
      .saturating_sub(indent.len())
      .max(MIN_BODY_WIDTH);

    for line in wrap_text(&unescape(&comment.body), width) {
      lines.push(format!("{indent}{line}"));
    }

    for reply in &comment.replies {
      self.comment(reply, depth + 1, lines);
    }

    if let Some(more) = &comment.more {
      Self::more(more, depth + 1, lines);
    }
  }

  pub(crate) fn expansion(&self, expansion: &Expansion) -> Vec<String> {
    let mut lines = Vec::new();

    for comment in &expansion.comments {
      self.comment(comment, 0, &mut lines);
    }

    for more in &expansion.mores {
      Self::more(more, 0, &mut lines);
    }

    lines
  }

  pub(crate) fn harvest(&self, harvest: &Harvest) -> Vec<String> {
    let mut lines = Vec::new();

    for post in &harvest.posts {
      lines.push(format!(
        "{} ({} by {})",
        truncate(&unescape(&post.title), self.width),
        format_points(post.score),
        post.author
      ));
    }

    for comment in &harvest.comments {
      lines.push(format!(
        "{} on {:?}: {}",
        comment.author,
        unescape(&comment.link_title),
        truncate(&unescape(&comment.body), SNIPPET_CHARS)
      ));
    }

    for message in &harvest.messages {
      lines.push(format!(
        "from {}: {}",
        message.author,
        truncate(&unescape(&message.subject), SNIPPET_CHARS)
      ));
    }

    for subreddit in &harvest.subreddits {
      lines.push(format!(
        "r/{}: {}",
        subreddit.display_name,
        unescape(&subreddit.title)
      ));
    }

    for account in &harvest.accounts {
      lines.push(format!("u/{}", account.name));
    }

    if let Some(more) = &harvest.more {
      Self::more(more, 0, &mut lines);
    }

    if let Some(after) = &harvest.after {
      lines.push(format!("next page: {after}"));
    }

    lines
  }

  fn more(more: &MoreStub, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);

    if more.is_continuation() {
      lines.push(format!("{indent}[continue this thread]"));
    } else {
      lines.push(format!("{indent}[+{} more]", more.children.len()));
    }
  }

  pub(crate) fn new(width: usize) -> Self {
    Self { width }
  }

  pub(crate) fn parsed(&self, parsed: &Parsed) -> Vec<String> {
    match parsed {
      Parsed::Feed(harvest) => self.harvest(harvest),
      Parsed::MoreChildren(expansion) => self.expansion(expansion),
      Parsed::Thread(post) => self.thread(post),
    }
  }

  pub(crate) fn thread(&self, post: &Post) -> Vec<String> {
    let mut lines = vec![
      unescape(&post.title),
      format!("{} by {}", format_points(post.score), post.author),
    ];

    for line in wrap_text(&unescape(&post.self_text), self.width) {
      lines.push(line);
    }

    lines.push(String::new());

    for comment in &post.replies {
      self.comment(comment, 0, &mut lines);
    }

    if let Some(more) = &post.more {
      Self::more(more, 0, &mut lines);
    }

    lines
  }
}
