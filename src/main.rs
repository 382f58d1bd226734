use mimalloc::MiMalloc;
use platform::HeadlessPlatform;
use sidebar::{
    ClickOutcome, ClickTarget, Platform, ScrollBlock, ScrollOffset, ScrollRestore, SidebarConfig,
    SidebarController, SidebarError,
};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const LOG_ENV: &str = "SCROLLBOX_LOG";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Location {
        location: String,
        source: url::ParseError,
    },
    Sidebar(SidebarError),
    UnknownLink(String),
    OffSite(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            CliError::Location { location, source } => {
                write!(f, "invalid page URL {location:?}: {source}")
            }
            CliError::Sidebar(err) => write!(f, "{err}"),
            CliError::UnknownLink(href) => write!(f, "no sidebar link points at {href:?}"),
            CliError::OffSite(url) => write!(f, "{url} is outside the book"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Location { source, .. } => Some(source),
            CliError::Sidebar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SidebarError> for CliError {
    fn from(value: SidebarError) -> Self {
        Self::Sidebar(value)
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

fn usage() -> String {
    "scrollbox\n\
\n\
USAGE:\n\
  scrollbox <toc.html> <page-url> [--root <prefix>] [--scroll <offset>] [--scroll-key <key>]\n\
            [--index <document>] [--block start|center|end|nearest] [--no-index-alias]\n\
            [--click <href>]...\n\
\n\
NOTES:\n\
  - <page-url> must be absolute; --root is the page's path back to the book root, e.g. ../\n\
  - --scroll seeds the offset a previous page would have persisted.\n\
  - each --click follows a sidebar link and re-attaches on the destination page.\n\
  - set SCROLLBOX_LOG=error|warn|info|debug|trace for diagnostics on stderr.\n"
        .to_string()
}

#[derive(Debug, Default)]
struct Args {
    toc: PathBuf,
    page: String,
    root: String,
    scroll: Option<String>,
    scroll_key: Option<String>,
    index_document: Option<String>,
    block: ScrollBlock,
    no_index_alias: bool,
    clicks: Vec<String>,
}

impl Args {
    fn config(&self, root_path: &str) -> SidebarConfig {
        let mut config = SidebarConfig::new(root_path)
            .with_scroll_block(self.block)
            .with_index_alias(!self.no_index_alias);
        if let Some(key) = &self.scroll_key {
            config = config.with_scroll_key(key.as_str());
        }
        if let Some(document) = &self.index_document {
            config = config.with_index_document(document.as_str());
        }
        config
    }
}

fn parse_block(value: &str) -> Option<ScrollBlock> {
    match value.trim().to_ascii_lowercase().as_str() {
        "start" => Some(ScrollBlock::Start),
        "center" => Some(ScrollBlock::Center),
        "end" => Some(ScrollBlock::End),
        "nearest" => Some(ScrollBlock::Nearest),
        _ => None,
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut positional = Vec::new();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let mut value = |flag: &str| {
            it.next()
                .cloned()
                .ok_or_else(|| CliError::Usage(format!("{flag} needs a value\n\n{}", usage())))
        };
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--root" => args.root = value("--root")?,
            "--scroll" => args.scroll = Some(value("--scroll")?),
            "--scroll-key" => args.scroll_key = Some(value("--scroll-key")?),
            "--index" => args.index_document = Some(value("--index")?),
            "--block" => {
                let raw = value("--block")?;
                args.block = parse_block(&raw).ok_or_else(|| {
                    CliError::Usage(format!("unknown --block {raw:?}\n\n{}", usage()))
                })?;
            }
            "--no-index-alias" => args.no_index_alias = true,
            "--click" => args.clicks.push(value("--click")?),
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown flag {flag}\n\n{}", usage())));
            }
            _ => positional.push(a.clone()),
        }
    }

    let [toc, page] = <[String; 2]>::try_from(positional)
        .map_err(|_| CliError::Usage(usage()))?;
    args.toc = PathBuf::from(toc);
    args.page = page;
    Ok(args)
}

/// Directory the root prefix of `page` points at.
fn book_root(page: &str, root_path: &str) -> Result<Url, CliError> {
    let location = |source| CliError::Location {
        location: page.to_string(),
        source,
    };
    let url = Url::parse(page).map_err(location)?;
    let prefix = if root_path.is_empty() { "./" } else { root_path };
    url.join(prefix).map_err(location)
}

/// Root prefix for a page inside the book, one `../` per directory below `root`.
fn root_prefix(root: &Url, page: &str) -> Option<String> {
    let page = Url::parse(page).ok()?;
    if page.origin() != root.origin() {
        return None;
    }
    let rest = page.path().strip_prefix(root.path())?;
    Some("../".repeat(rest.matches('/').count()))
}

#[derive(Debug)]
struct Report {
    markup: String,
    location: String,
    active: Option<String>,
    scroll: ScrollOffset,
    restore: ScrollRestore,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.markup)?;
        let restore = match self.restore {
            ScrollRestore::Restored(_) => "restored",
            ScrollRestore::IntoView(_) => "into-view",
            ScrollRestore::Untouched => "untouched",
        };
        write!(
            f,
            "location={} active={} scroll={} restore={restore}",
            self.location,
            self.active.as_deref().unwrap_or("-"),
            self.scroll
        )
    }
}

fn run(args: &Args) -> Result<Report, CliError> {
    let markup = fs::read_to_string(&args.toc).map_err(|source| CliError::Io {
        path: args.toc.clone(),
        source,
    })?;
    let root = book_root(&args.page, &args.root)?;

    let config = args.config(&args.root);
    let mut platform = HeadlessPlatform::new(args.page.as_str());
    if let Some(offset) = &args.scroll {
        platform.storage_mut().set(&config.scroll_key, offset.clone());
    }
    let mut controller = SidebarController::connect(&markup, config, &mut platform)?;

    for href in &args.clicks {
        let target = controller.target_for_href(href);
        if !matches!(target, ClickTarget::Link(_)) {
            return Err(CliError::UnknownLink(href.clone()));
        }
        let ClickOutcome::Navigate { destination, .. } =
            controller.handle_click(target, &mut platform)
        else {
            return Err(CliError::UnknownLink(href.clone()));
        };
        let prefix =
            root_prefix(&root, &destination).ok_or_else(|| CliError::OffSite(destination.clone()))?;
        info!(target: "scrollbox", "following {href} to {destination}");

        platform.navigate(destination);
        controller = SidebarController::connect(&markup, args.config(&prefix), &mut platform)?;
    }

    let active = controller
        .active()
        .and_then(|id| controller.tree().entry(id))
        .and_then(|entry| entry.destination())
        .map(str::to_string);
    Ok(Report {
        markup: platform.content().to_string(),
        location: platform.location(),
        active,
        scroll: platform.scroll_top(),
        restore: controller.scroll_restore(),
    })
}

/// Diagnostics go to stderr so stdout stays the rendered sidebar. Records from the `log`
/// facade used by the library crates are bridged in by the subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    match run(&args) {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
