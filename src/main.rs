//! `tunefeed` - drive the feed engine against the fixture source.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use tunefeed::config::Config;
use tunefeed::detail::PostDetailState;
use tunefeed::format::format_count;
use tunefeed::model::{Notification, NotificationKind, Post};
use tunefeed::notifications::{like_preview, NotificationFilter};
use tunefeed::{Action, Engine};

#[derive(Parser, Debug)]
#[command(name = "tunefeed")]
#[command(about = "Feed and notification state engine, driven from the command line")]
struct Args {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the simulated source latency
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the home feed and print it
    Posts,

    /// Load notification pages and print one tab
    Notifications {
        /// all, mentions or releases
        #[arg(long, default_value_t = NotificationFilter::All)]
        filter: NotificationFilter,

        /// Number of pages to request (refresh + load more)
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Open the post detail screen from a serialized post
    Detail {
        /// File holding the JSON post payload
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,
    },

    /// Dispatch a JSON array of actions and print the final snapshot
    Replay {
        /// File holding the JSON action list
        #[arg(value_name = "ACTIONS")]
        actions: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(latency_ms) = args.latency_ms {
        config.source.latency_ms = latency_ms;
    }

    tunefeed::logging::init_tracing(&config.logging.filter);
    info!(
        latency_ms = config.source.latency_ms,
        page_count = config.source.page_count,
        "Starting tunefeed"
    );

    let engine = Engine::from_config(&config);

    match args.command {
        Command::Posts => {
            engine.load_initial_posts().await?;
            for post in engine.posts().get_all() {
                print_post(&post);
            }
        }

        Command::Notifications { filter, pages } => {
            engine.dispatch(Action::Refresh).await?;
            for _ in 1..pages {
                engine.dispatch(Action::LoadMore).await?;
            }
            print_tab(&engine, filter);
        }

        Command::Detail { payload } => {
            let payload = std::fs::read_to_string(&payload)
                .with_context(|| format!("Failed to read {}", payload.display()))?;
            let screen = engine.open_post(&payload).await;
            match screen.state() {
                PostDetailState::Ready { post, replies, .. } => {
                    print_post(post);
                    for reply in replies {
                        println!("    {}: {}", reply.author.display_name, reply.body);
                    }
                }
                PostDetailState::Failed { reason } => {
                    println!("Could not open this post.");
                    println!("  {}", reason);
                }
                PostDetailState::Closed => {}
            }
        }

        Command::Replay { actions } => {
            let content = std::fs::read_to_string(&actions)
                .with_context(|| format!("Failed to read {}", actions.display()))?;
            let actions: Vec<Action> =
                serde_json::from_str(&content).context("Failed to parse action list")?;

            engine.load_initial_posts().await?;
            for action in actions {
                if let Err(err) = engine.dispatch(action).await {
                    warn!(kind = err.kind(), error = %err, "Action failed");
                }
            }
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }

    Ok(())
}

fn print_post(post: &Post) {
    let handle = post
        .author
        .handle
        .as_deref()
        .map(|h| format!(" @{}", h))
        .unwrap_or_default();
    println!("[{}] {}{}", post.id, post.author.display_name, handle);
    println!("  {}", post.body);
    println!(
        "  {} - {} ({}/5)",
        post.review_meta.album_name,
        post.review_meta.song_name.as_deref().unwrap_or("-"),
        post.review_meta.rating
    );
    println!(
        "  replies {}  reposts {}{}  likes {}{}",
        format_count(post.reply_count),
        format_count(post.repost_count),
        if post.reposted { "*" } else { "" },
        format_count(post.like_count),
        if post.liked { "*" } else { "" },
    );
}

fn print_tab(engine: &Engine, filter: NotificationFilter) {
    let items = engine.view(filter);
    let state = engine.pagination();
    println!(
        "== {} ({}) page {} {}",
        filter.title(),
        items.len(),
        state.page,
        if state.has_more { "more available" } else { "end of feed" }
    );

    if items.is_empty() {
        println!("No notifications to show");
        println!("{}", filter.empty_message());
        return;
    }
    for notification in &items {
        print_notification(notification);
    }
}

fn print_notification(notification: &Notification) {
    let marker = if notification.is_read { " " } else { "*" };
    println!("{} [{}] {}", marker, notification.id, notification.message);

    match &notification.kind {
        NotificationKind::Like(group) => {
            let preview = like_preview(group);
            let names: Vec<&str> = preview
                .shown
                .iter()
                .map(|u| u.display_name.as_str())
                .collect();
            let overflow = preview
                .overflow
                .map(|n| format!(" +{}", n))
                .unwrap_or_default();
            println!("    {}{}", names.join(", "), overflow);
            println!("    \"{}\"", group.liked_post_content);
        }
        NotificationKind::Reply(reply) => {
            println!(
                "    {}: {}",
                reply.reply_author.display_name, reply.quoted_content
            );
        }
        NotificationKind::Release(release) => {
            println!(
                "    {} - {} ({})",
                release.artist_name, release.album_name, release.release_date
            );
        }
        NotificationKind::Quote => {}
    }
}
