//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::theme::ThemeAction;
use folio::content::ContentKind;
use folio::filter::SortKey;
use folio::prefs::Theme;
use folio::presenter::Format;
use folio::view::{Selection, ViewState};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Browse a site's blog posts and poems", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or poems
    #[command(alias = "ls")]
    List {
        /// Collection to list (blog, poems)
        #[arg(short, long, default_value = "blog")]
        kind: ContentKind,

        /// Only items in this category
        #[arg(short, long, conflicts_with = "featured")]
        category: Option<String>,

        /// Only featured items
        #[arg(long)]
        featured: bool,

        /// Case-insensitive search over title, excerpt, body, category and author
        #[arg(short, long, default_value = "")]
        search: String,

        /// Ordering (date-desc, date-asc, title)
        #[arg(long, default_value = "date-desc")]
        sort: SortKey,

        /// Output format (text, json, html)
        #[arg(short, long, default_value = "text")]
        format: Format,
    },

    /// Show one item by id or share link
    Show {
        /// Item id, or a link such as blog.html?post=<id>
        target: String,

        /// Collection the item belongs to (blog, poems)
        #[arg(short, long, default_value = "blog")]
        kind: ContentKind,

        /// Output format (text, json, html)
        #[arg(short, long, default_value = "text")]
        format: Format,
    },

    /// List categories with item counts
    Categories {
        /// Collection to inspect (blog, poems)
        #[arg(short, long, default_value = "blog")]
        kind: ContentKind,
    },

    /// Item counts and reading time per collection
    Stats,

    /// Show or change the theme preference
    Theme {
        /// Switch between light and dark
        #[arg(short, long, conflicts_with = "set")]
        toggle: bool,

        /// Set a specific theme (light, dark)
        #[arg(long)]
        set: Option<Theme>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List {
            kind,
            category,
            featured,
            search,
            sort,
            format,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let selection = match (featured, category) {
                (true, _) => Selection::Featured,
                (false, Some(category)) => Selection::category(&category),
                (false, None) => Selection::All,
            };
            let view = ViewState::default()
                .with_selection(selection)
                .with_search(search)
                .with_sort(sort);
            folio::commands::list::run(&site, kind, &view, format, stdout).await?;
        }

        Commands::Show {
            target,
            kind,
            format,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::show::run(&site, kind, &target, format, stdout).await?;
        }

        Commands::Categories { kind } => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::stats::categories(&site, kind, stdout).await?;
        }

        Commands::Stats => {
            let site = folio::Folio::new(&base_dir)?;
            folio::commands::stats::run(&site, stdout).await?;
        }

        Commands::Theme { toggle, set } => {
            let site = folio::Folio::new(&base_dir)?;
            let action = match (toggle, set) {
                (true, _) => ThemeAction::Toggle,
                (false, Some(theme)) => ThemeAction::Set(theme),
                (false, None) => ThemeAction::Show,
            };
            folio::commands::theme::run(&site, action, stdout)?;
        }

        Commands::Version => {
            writeln!(stdout, "folio version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
