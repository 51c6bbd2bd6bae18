use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use moviehub::commands::{
    config_info_command, init_command, is_favorite_command, list_favorites_command,
    movie_command, remove_favorite_command, resolve_route_command, run_shell, search_command,
    toggle_favorite_command,
};
use moviehub_core::catalog::MediaKind;
use moviehub_core::favorites::FavoriteItem;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `moviehub_core=debug`).
const LOG_ENV: &str = "MOVIEHUB_LOG";

/// Movie discovery CLI.
///
/// This CLI is a thin wrapper around `moviehub-core` (exposed in code as `moviehub_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(name = "moviehub", version, about = "Search movies and keep favorites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a MovieHub data directory at the given root.
    ///
    /// This will:
    /// - Create a `.moviehub` metadata directory.
    /// - Write `.moviehub/config.json`.
    /// - Create the storage database.
    Init {
        /// Data directory root. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,

        /// OMDb API key to store in the config.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show the configuration of an initialized root.
    ConfigInfo {
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show which view a path renders and the parameters it binds.
    ResolveRoute {
        /// Path to resolve, e.g. `/movie/tt0111161`.
        #[arg(long)]
        path: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List saved favorites.
    ListFavorites {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Add a favorite, or remove it if its id is already saved.
    ToggleFavorite {
        #[arg(long, default_value = ".")]
        root: String,

        /// Unique id (IMDb id, e.g. `tt0111161`).
        #[arg(long)]
        id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        year: String,

        #[arg(long, default_value = "")]
        poster: String,

        /// Kind (movie, series, episode). Defaults to movie.
        #[arg(long, default_value = "movie")]
        kind: String,
    },

    /// Remove a favorite by id.
    RemoveFavorite {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        id: String,
    },

    /// Print whether an id is saved as a favorite.
    IsFavorite {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        id: String,
    },

    /// Search the remote catalog.
    Search {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        query: String,

        /// all, movie, series, or episode.
        #[arg(long = "type", default_value = "all")]
        kind: MediaKind,

        #[arg(long)]
        year: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show details for one title.
    Movie {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        id: String,

        #[arg(long, default_value_t = false)]
        json: bool,

        /// Toggle this title as a favorite before printing.
        #[arg(long, default_value_t = false)]
        toggle_favorite: bool,
    },

    /// Navigate the application's pages interactively (reads commands from stdin).
    Shell {
        #[arg(long, default_value = ".")]
        root: String,

        /// Path the session starts at.
        #[arg(long, default_value = "/")]
        start: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Command::Init { root, name, api_key } => init_command(&root, name, api_key)?,
        Command::ConfigInfo { root, json } => config_info_command(&root, json)?,
        Command::ResolveRoute { path, json } => resolve_route_command(&path, json)?,
        Command::ListFavorites { root, json } => list_favorites_command(&root, json)?,
        Command::ToggleFavorite { root, id, title, year, poster, kind } => {
            let item = FavoriteItem::new(id, title, year).with_poster(poster).with_kind(kind);
            toggle_favorite_command(&root, item)?
        }
        Command::RemoveFavorite { root, id } => remove_favorite_command(&root, &id)?,
        Command::IsFavorite { root, id } => is_favorite_command(&root, &id)?,
        Command::Search { root, query, kind, year, page, json } => {
            search_command(&root, &query, kind, year, page, json)?
        }
        Command::Movie { root, id, json, toggle_favorite } => {
            movie_command(&root, &id, json, toggle_favorite)?
        }
        Command::Shell { root, start } => {
            let stdin = io::stdin();
            run_shell(&root, &start, stdin.lock(), io::stdout().lock())?
        }
    }

    Ok(())
}
