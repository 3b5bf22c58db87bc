use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use catalog::{genres, MemoryStore, Movie};
use social::{Discovery, FriendGraph};
use std::path::PathBuf;
use std::time::Instant;
use taste::Recommendation;

/// ReelBlend - taste profiles, compatibility and recommendations
#[derive(Parser)]
#[command(name = "reel-blend")]
#[command(about = "Taste compatibility and recommendations over a movie library", long_about = None)]
struct Cli {
    /// Path to the library snapshot JSON
    #[arg(short, long, default_value = "library.json")]
    library: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's taste profile
    Profile {
        /// User id to profile
        #[arg(long)]
        user: String,
    },

    /// Compatibility between two users
    Compat {
        /// Subject user id
        #[arg(long)]
        user: String,

        /// User to compare against
        #[arg(long)]
        other: String,
    },

    /// Accepted friends with compatibility scores, plus pending requests
    Friends {
        /// Subject user id
        #[arg(long)]
        user: String,
    },

    /// Movies to watch together with a friend
    Blend {
        /// Subject user id
        #[arg(long)]
        user: String,

        /// Friend to blend with
        #[arg(long)]
        friend: String,
    },

    /// Personalized recommendations from everyone else's playlists
    ForYou {
        /// Subject user id
        #[arg(long)]
        user: String,

        /// Emit JSON instead of the table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = catalog::load_snapshot(&cli.library)
        .with_context(|| format!("Failed to load library {}", cli.library.display()))?;
    let (users, entries, edges) = store.counts();
    println!(
        "{} Loaded {} users, {} playlist entries, {} friendships in {:?}",
        "✓".green(),
        users,
        entries,
        edges,
        start.elapsed()
    );

    match cli.command {
        Commands::Profile { user } => handle_profile(&store, &user)?,
        Commands::Compat { user, other } => handle_compat(&store, &user, &other)?,
        Commands::Friends { user } => handle_friends(&store, &user)?,
        Commands::Blend { user, friend } => handle_blend(&store, &user, &friend)?,
        Commands::ForYou { user, json } => handle_for_you(&store, &user, json)?,
    }

    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(store: &MemoryStore, user_id: &str) -> Result<()> {
    let discovery = Discovery::new(store);
    let profile = discovery.taste_profile(user_id)?;

    println!("{}", format!("Taste profile for {}:", user_id).bold().blue());
    if profile.is_empty() {
        println!("  (no genre-bearing movies yet)");
        return Ok(());
    }

    for genre in profile.top_genres(profile.len()) {
        let share = profile.share(genre);
        let bar = "█".repeat((share as usize).div_ceil(5).max(1));
        println!("  {:<16} {:>3}%  {}", genre, share, bar.cyan());
    }
    Ok(())
}

/// Handle the 'compat' command
fn handle_compat(store: &MemoryStore, user_id: &str, other_id: &str) -> Result<()> {
    let discovery = Discovery::new(store);
    let compat = discovery.compatibility(user_id, other_id)?;

    println!(
        "{}",
        format!("Compatibility: {} × {}", user_id, other_id).bold().blue()
    );
    println!("{}Movie overlap: {}", "• ".green(), render_score(compat.movie_overlap));
    println!("{}Genre match:   {}", "• ".green(), render_score(compat.genre_match));
    println!("{}Blend:         {}", "• ".cyan(), render_score(compat.blend));
    Ok(())
}

/// Handle the 'friends' command
fn handle_friends(store: &MemoryStore, user_id: &str) -> Result<()> {
    let discovery = Discovery::new(store);
    let graph = FriendGraph::from_edges(store.friendships().to_vec());

    let matches = discovery.friend_matches(user_id, &graph)?;
    println!("{}", format!("Friends of {}:", user_id).bold().blue());
    if matches.is_empty() {
        println!("  (no accepted friends yet)");
    }
    for m in &matches {
        println!("  {:<20} {}", m.user.username, render_score(m.compatibility));
    }

    let requests = discovery.friend_requests(user_id, &graph)?;
    if !requests.is_empty() {
        println!("{}", "Pending requests:".bold());
        for request in &requests {
            println!("  {} ({})", request.user.username, request.friendship_id.dimmed());
        }
    }
    Ok(())
}

/// Handle the 'blend' command
fn handle_blend(store: &MemoryStore, user_id: &str, friend_id: &str) -> Result<()> {
    let discovery = Discovery::new(store);
    let recs = discovery.shared_recommendations(user_id, friend_id)?;

    println!(
        "{}",
        format!("To watch with {}:", friend_id).bold().blue()
    );
    if recs.is_empty() {
        println!("  (nothing new to share yet)");
        return Ok(());
    }
    for movie in &recs {
        println!("  {}", render_movie(movie));
    }
    Ok(())
}

/// Handle the 'for-you' command
fn handle_for_you(store: &MemoryStore, user_id: &str, json: bool) -> Result<()> {
    let discovery = Discovery::new(store);
    let recs = discovery.personalized_recommendations(user_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
        return Ok(());
    }

    println!("{}", format!("Picked for {}:", user_id).bold().blue());
    if recs.is_empty() {
        println!("  (add some movies to your playlists first)");
        return Ok(());
    }
    for Recommendation { movie, score } in &recs {
        println!("  {:>5.2}  {}", score, render_movie(movie));
    }
    Ok(())
}

/// Color a percentage score by how good it is
fn render_score(score: u32) -> String {
    let text = format!("{}%", score);
    match score {
        75..=100 => text.green().to_string(),
        40..=74 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

/// One-line movie rendering: title, year, genres, rating
fn render_movie(movie: &Movie) -> String {
    let year = movie
        .release_date
        .as_deref()
        .and_then(|date| date.get(..4))
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();

    let genre_names: Vec<&str> = movie
        .resolved_genre_ids()
        .into_iter()
        .filter_map(genres::name_of)
        .collect();

    let rating = match movie.vote_average {
        Some(avg) if avg > 0.0 => format!("avg {:.1}", avg),
        _ => "unrated".to_string(),
    };

    format!(
        "{}{} [{}] {}",
        movie.title.bold(),
        year,
        genre_names.join(", "),
        rating.dimmed()
    )
}
