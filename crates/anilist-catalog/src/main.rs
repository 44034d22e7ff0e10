//! AniList catalog CLI application.

use anilist_catalog::AnilistClient;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{AnimeSummary, Config};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "anilist-catalog")]
#[command(about = "Browse anime metadata from AniList")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Currently airing anime of the running season
    Recent {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Trending ranking
    Trending {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Most popular anime of the running season
    Popular {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Search the catalog by keyword
    Search {
        term: String,
    },
    /// Full details for one title
    Details {
        id: u32,
    },
}

fn print_listing(entries: &[AnimeSummary]) {
    if entries.is_empty() {
        println!("No anime found");
        return;
    }

    for entry in entries {
        let score = entry
            .average_score
            .map(|score| format!("{:>3}", score))
            .unwrap_or_else(|| "  -".to_string());
        let episodes = entry
            .episodes
            .map(|count| format!("{} eps", count))
            .unwrap_or_else(|| "? eps".to_string());

        println!(
            "{:>7}  {}  {:<50} {:<8} {}",
            entry.id,
            score,
            entry.display_title(),
            entry.format.as_deref().unwrap_or("-"),
            episodes
        );

        if let Some(next) = &entry.next_airing {
            println!("{:>7}  next: episode {}", "", next.episode);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "anilist-catalog".to_string(),
        default_level: log_level,
        console: true,
        file: true,
        json_format: false,
    })?;

    info!(config_file = %args.config.display(), "AniList catalog starting");

    let client = AnilistClient::new(&config.anilist).context("Failed to create AniList client")?;
    let page_size = config.anilist.page_size;

    match args.command {
        Command::Recent { page } => {
            let entries = client.recent_episodes(page, page_size).await?;
            print_listing(&entries);
        }
        Command::Trending { page } => {
            let entries = client.trending(page, config.anilist.trending_size).await?;
            print_listing(&entries);
        }
        Command::Popular { page } => {
            let entries = client.popular_this_season(page, page_size).await?;
            print_listing(&entries);
        }
        Command::Search { term } => {
            let entries = client.search(&term, 20).await?;
            print_listing(&entries);
        }
        Command::Details { id } => {
            let details = client.details(id).await?;

            println!("{}", details.display_title());
            if let Some(native) = &details.title_native {
                println!("{}", native);
            }
            println!();

            if let Some(score) = details.average_score {
                println!("Score:    {}/100", score);
            }
            println!("Format:   {}", details.format.as_deref().unwrap_or("N/A"));
            println!(
                "Episodes: {}",
                details
                    .episodes
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "Unknown".to_string())
            );
            if let Some(duration) = details.duration {
                println!("Duration: {} min", duration);
            }
            println!("Status:   {}", details.status.as_deref().unwrap_or("N/A"));
            if let (Some(season), Some(year)) = (&details.season, details.season_year) {
                println!("Season:   {} {}", season, year);
            }
            if let Some(start) = details.start_date {
                println!("Aired:    {}", start);
            }
            if !details.studios.is_empty() {
                println!("Studios:  {}", details.studios.join(", "));
            }
            if !details.genres.is_empty() {
                println!("Genres:   {}", details.genres.join(", "));
            }

            if let Some(description) = details.plain_description() {
                println!();
                println!("{}", description);
            }

            if !details.characters.is_empty() {
                println!();
                println!("Characters:");
                for credit in &details.characters {
                    let role = credit.role.as_deref().unwrap_or("-");
                    match &credit.voice_actor {
                        Some(actor) => println!("  {:<28} {:<10} CV: {}", credit.name, role, actor),
                        None => println!("  {:<28} {}", credit.name, role),
                    }
                }
            }

            if !details.recommendations.is_empty() {
                println!();
                println!("You might also like:");
                for rec in &details.recommendations {
                    let title = rec.title_english.as_deref().unwrap_or(&rec.title_romaji);
                    println!("  {:>7}  {}", rec.id, title);
                }
            }
        }
    }

    Ok(())
}
