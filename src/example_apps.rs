//! Reusable demo runners shared by the `demos/` wrappers.
//!
//! Each runner owns its CLI parsing and printing so the wrappers stay thin.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::config::FeedbackConfig;
use crate::context::PageContext;
use crate::feedback::{compose_feedback, Rating};
use crate::frame::{plan_frame_load, FrameSnapshot, LayoutAction};
use crate::rewrite::{apply_rewrites, LinkRecord, RewriteAction};
use crate::widget::feedback_panel;

#[derive(Debug, Parser)]
#[command(
    name = "compose_feedback_demo",
    disable_help_subcommand = true,
    about = "Compose a feedback mail link from page context",
    long_about = "Build the feedback subject, body, and mailto link the viewer would hand to the browser for a given document title, URL, and rating."
)]
struct ComposeFeedbackCli {
    #[arg(long, default_value = "", help = "Document title of the current topic")]
    title: String,
    #[arg(
        long,
        default_value = "http://localhost/help/en/topic.htm",
        help = "Navigation URL of the current topic"
    )]
    url: String,
    #[arg(long, default_value_t = 0, help = "Rating code (1-4, 0 for unset)")]
    rating: u8,
    #[arg(long, help = "Also print the rendered feedback panel markup")]
    panel: bool,
    #[arg(long, value_name = "PATH", help = "JSON configuration override file")]
    config: Option<PathBuf>,
}

pub fn run_compose_feedback_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();

    let Some(cli) = parse_cli::<ComposeFeedbackCli, _>(
        std::iter::once("compose_feedback_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = load_config(cli.config)?;
    let ctx = PageContext::new(cli.title, cli.url);
    let email = compose_feedback(&config, &ctx, Rating::from_code(cli.rating));

    println!("subject: {}", email.subject);
    println!("body:    {}", email.body);
    println!("mailto:  {}", email.mailto);
    if cli.panel {
        println!();
        println!("{}", feedback_panel(&config, &email));
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "rewrite_links_demo",
    disable_help_subcommand = true,
    about = "Plan a content-frame load for a set of links",
    long_about = "Classify anchor hrefs the way the frame-load handler does, print the resulting layout and rewrite actions, then apply them and print the patched records.",
    after_help = "Hrefs given with --href come first, in order, followed by lines of --links-file."
)]
struct RewriteLinksCli {
    #[arg(
        long,
        default_value = "/main.aspx?lang=en-us",
        help = "Host page URL carrying the lang query parameter"
    )]
    page_url: String,
    #[arg(
        long = "href",
        value_name = "HREF",
        help = "Anchor href to classify, repeat as needed in document order"
    )]
    hrefs: Vec<String>,
    #[arg(long, value_name = "PATH", help = "File with one href per line")]
    links_file: Option<PathBuf>,
    #[arg(long, default_value_t = 800, help = "Embedded body scroll height")]
    height: u32,
    #[arg(long, default_value_t = 600, help = "Embedded body scroll width")]
    width: u32,
}

pub fn run_rewrite_links_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    init_tracing();

    let Some(cli) = parse_cli::<RewriteLinksCli, _>(
        std::iter::once("rewrite_links_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut hrefs = cli.hrefs;
    if let Some(path) = cli.links_file {
        let raw = fs::read_to_string(&path)?;
        hrefs.extend(raw.lines().filter(|line| !line.is_empty()).map(String::from));
    }

    let snapshot = FrameSnapshot {
        body_scroll_height: cli.height,
        body_scroll_width: cli.width,
        links: hrefs.iter().cloned().map(LinkRecord::with_href).collect(),
        ..FrameSnapshot::default()
    };
    let host = PageContext::new(String::new(), cli.page_url);
    let plan = plan_frame_load(&snapshot, &host);

    println!("layout:");
    for action in &plan.layout {
        println!("  {}", describe_layout(action));
    }
    println!("links:");
    let mut links = snapshot.links.clone();
    apply_rewrites(&mut links, &plan.link_actions);
    for ((href, action), patched) in hrefs.iter().zip(&plan.link_actions).zip(&links) {
        println!("  {href}");
        println!("    -> {}", describe_rewrite(action));
        if !matches!(action, RewriteAction::NoOp) {
            println!(
                "    href={} target={}",
                patched.href.as_deref().unwrap_or("-"),
                patched.target.as_deref().unwrap_or("-")
            );
        }
    }
    Ok(())
}

fn describe_layout(action: &LayoutAction) -> String {
    match action {
        LayoutAction::InjectStylesheet { href } => format!("inject stylesheet {href}"),
        LayoutAction::ZeroBodyLeftMargin => "zero body left margin".to_string(),
        LayoutAction::ResizeFrame { height, width } => {
            format!("resize frame to {width}x{height}")
        }
    }
}

fn describe_rewrite(action: &RewriteAction) -> String {
    match action {
        RewriteAction::NoOp => "no-op".to_string(),
        RewriteAction::RewriteInternal { href, target } => {
            format!("internal: route to {href} (target {target})")
        }
        RewriteAction::RewriteExternal { target } => {
            format!("external: retarget to {target}")
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<FeedbackConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(FeedbackConfig::from_json_file(path)?),
        None => Ok(FeedbackConfig::default()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
