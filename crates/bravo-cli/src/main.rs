mod report;
mod snapshot;

use bravo_core::{ProductKey, Store};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bravo")]
#[command(about = "Grocery specials: buy now or wait")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the buy/wait verdict for one product
    Verdict {
        /// Product key as <store>:<product_id>, e.g. coles:3391234
        key: ProductKey,
    },
    /// Search current specials and sale history by product name
    Search {
        query: String,

        /// Restrict results to one store (woolworths or coles)
        #[arg(long)]
        store: Option<Store>,
    },
    /// Show watched items split into on sale and waiting
    Watching,
    /// List the best current specials
    Deals {
        #[command(subcommand)]
        command: DealsCommands,
    },
    /// List current specials, optionally narrowed to a store or category
    Browse {
        #[arg(long)]
        store: Option<Store>,

        /// Category name as printed by `bravo categories`
        #[arg(long)]
        category: Option<String>,

        #[arg(long, default_value_t = 30)]
        limit: usize,
    },
    /// List the categories present in the current specials
    Categories,
}

#[derive(Debug, Subcommand)]
enum DealsCommands {
    /// Deepest discounts first
    Top {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Items that rarely go on special and are on special now
    Rare {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bravo_core::load_app_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Verdict { key }) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            report::print_verdict(&snapshot, &key);
        }
        Some(Commands::Search { query, store }) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            let options = bravo_intel::SearchOptions::from_config(&config).with_store(store);
            report::print_search(&snapshot, &query, &options);
        }
        Some(Commands::Watching) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            let watchlist = bravo_core::load_watchlist(&config.watchlist_path)?;
            report::print_watching(&snapshot, &watchlist.items);
        }
        Some(Commands::Deals { command }) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            match command {
                DealsCommands::Top { limit } => report::print_top_deals(&snapshot, limit),
                DealsCommands::Rare { limit } => report::print_rare_deals(&snapshot, limit),
            }
        }
        Some(Commands::Browse {
            store,
            category,
            limit,
        }) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            report::print_browse(&snapshot, store, category.as_deref(), limit);
        }
        Some(Commands::Categories) => {
            let snapshot = snapshot::Snapshot::load(&config)?;
            report::print_categories(&snapshot);
        }
        None => println!("bravo: run `bravo --help` for commands"),
    }

    Ok(())
}
