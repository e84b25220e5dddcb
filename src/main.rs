//! Artistly - artist booking catalog
//!
//! Browse and search the artist listing, keep a shortlist, manage the
//! onboarded roster and validate onboarding submissions. `serve` hosts the
//! static catalog documents the web views fetch.

#![allow(dead_code)]

mod api;
mod config;
mod core;
mod models;
mod serializers;
mod stores;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::{Paths, Settings};
use crate::core::roster::ALL_CATEGORIES;
use crate::core::{BrowseSession, OnboardingWizard, ReviewDecision, Roster, RosterFilter};
use crate::models::{QueryParams, SortKey, Submission};
use crate::serializers::{ArtistCard, ArtistDetail, ListingResponse, RosterRow};
use crate::stores::{CatalogStore, ShortlistStore};

/// Artistly - artist booking catalog
#[derive(Parser, Debug)]
#[command(name = "artistly")]
#[command(version = "0.1.0")]
#[command(about = "Search, shortlist and manage bookable artists")]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the static data directory
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search and sort the artist listing
    Artists {
        /// Case-insensitive term matched against name, category and location
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        price_range: Option<String>,
        /// name, rating, price or popularity
        #[arg(long)]
        sort: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the filter options of the listing
    Filters,

    /// Print the shortlisted artists in listing order
    Shortlist {
        /// Artist ids to shortlist
        ids: Vec<i64>,
    },

    /// Show the onboarded roster table
    Roster {
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Show roster statistics
    Stats,

    /// Show one roster artist
    Show {
        id: i64,
        /// Accept or reject the artist
        #[arg(long, value_parser = ["accept", "reject"])]
        review: Option<String>,
    },

    /// Validate an onboarding submission (JSON file)
    Onboard { file: PathBuf },

    /// Serve the static data documents over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!(
        "{},actix_server=warn,reqwest=warn,hyper=warn",
        log_level
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let paths = Paths::init(args.config, args.data)?;
    tracing::debug!("Config directory: {:?}", paths.config_dir());
    tracing::debug!("Data directory: {:?}", paths.data_dir());

    let settings = Settings::global().read().clone();

    match args.command {
        Command::Artists {
            search,
            category,
            location,
            price_range,
            sort,
            json,
        } => {
            let params = QueryParams {
                search,
                category,
                location,
                price_range,
                sort: sort
                    .as_deref()
                    .map(SortKey::parse)
                    .unwrap_or(settings.default_sort),
            };
            load_listing(&paths, &settings).await;
            print_listing(params, json)
        }
        Command::Filters => {
            load_listing(&paths, &settings).await;
            print_filters()
        }
        Command::Shortlist { ids } => {
            load_listing(&paths, &settings).await;
            print_shortlist(&ids);
            Ok(())
        }
        Command::Roster { search, category } => {
            load_roster(&paths, &settings).await;
            print_roster(&RosterFilter { search, category });
            Ok(())
        }
        Command::Stats => {
            load_roster(&paths, &settings).await;
            print_stats()
        }
        Command::Show { id, review } => {
            load_roster(&paths, &settings).await;
            show_artist(id, review.as_deref())
        }
        Command::Onboard { file } => {
            load_roster(&paths, &settings).await;
            onboard(&file)
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or(settings.host);
            let port = port.unwrap_or(settings.port);
            serve(paths.data_dir().to_path_buf(), host, port).await
        }
    }
}

async fn load_listing(paths: &Paths, settings: &Settings) {
    let source = paths.resolve_source(&settings.artists_source);
    let timeout = Duration::from_secs(settings.fetch_timeout_secs);
    let count = CatalogStore::listing().load_from_source(&source, timeout).await;
    info!("Loaded {} artists from {}", count, source);
}

async fn load_roster(paths: &Paths, settings: &Settings) {
    let source = paths.resolve_source(&settings.roster_source);
    let timeout = Duration::from_secs(settings.fetch_timeout_secs);
    let count = CatalogStore::roster().load_from_source(&source, timeout).await;
    info!("Loaded {} roster artists from {}", count, source);
}

fn print_listing(params: QueryParams, json: bool) -> Result<()> {
    let session = BrowseSession::with_params(CatalogStore::listing().get_all(), params);
    let shortlist = ShortlistStore::get();

    let cards: Vec<ArtistCard> = session
        .results()
        .iter()
        .map(|r| ArtistCard::new(r, shortlist.contains(r.id)))
        .collect();

    if json {
        let response = ListingResponse {
            items: cards,
            total: session.records().len(),
            active_filters: session.active_filter_count(),
            sort: session.params().sort,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No artists found");
        println!("Try adjusting your filters or search terms.");
        return Ok(());
    }

    println!(
        "{} Artist{} Found ({})",
        cards.len(),
        if cards.len() == 1 { "" } else { "s" },
        session.params().sort.label()
    );
    for card in &cards {
        println!("{}", card.line());
    }
    println!("{}", session.summary());
    Ok(())
}

fn print_filters() -> Result<()> {
    let session = BrowseSession::new(CatalogStore::listing().get_all());
    let options = session.filter_options();

    println!("Categories:");
    for count in session.category_counts() {
        println!("  {} ({} artists)", count.category, count.count);
    }
    println!("Locations:    {}", options.locations.join(", "));
    println!("Price ranges: {}", options.price_ranges.join(", "));
    Ok(())
}

fn print_shortlist(ids: &[i64]) {
    let records = CatalogStore::listing().get_all();
    let shortlist = ShortlistStore::get();
    for &id in ids {
        shortlist.add(id);
    }

    let selected = shortlist.select(&records);
    if selected.len() < shortlist.len() {
        tracing::warn!(
            "{} shortlisted id(s) not in the catalog",
            shortlist.len() - selected.len()
        );
    }
    for record in selected {
        println!("{}", ArtistCard::new(record, true).line());
    }
}

fn print_roster(filter: &RosterFilter) {
    let records = CatalogStore::roster().get_all();
    let roster = Roster::new(&records);
    let rows = roster.filter(filter);

    if rows.is_empty() {
        if filter.search.is_empty() {
            println!("No artists found. Start by adding your first artist to the roster.");
        } else {
            println!("No artists match \"{}\"", filter.search);
        }
        return;
    }

    println!("{:<5} {:<24} {:<24} {:<16} {}", "ID", "Name", "Category", "City", "Fee");
    for record in &rows {
        println!("{}", RosterRow::from(*record).line());
    }
    println!("Showing {} of {} artists", rows.len(), records.len());
}

fn print_stats() -> Result<()> {
    let records = CatalogStore::roster().get_all();
    let stats = Roster::new(&records).stats();

    println!("Total Artists: {}", stats.total);
    println!("Categories:    {}", stats.categories.len());
    println!("Cities:        {}", stats.cities.len());
    println!("Avg Fee:       {}", stats.avg_fee_display());
    Ok(())
}

fn show_artist(id: i64, review: Option<&str>) -> Result<()> {
    let records = CatalogStore::roster().get_all();
    let roster = Roster::new(&records);

    let artist = roster
        .find(id)
        .with_context(|| format!("Artist {} not found", id))?;

    for line in ArtistDetail::from(artist).lines() {
        println!("{}", line);
    }

    let decision = match review {
        Some("accept") => Some(ReviewDecision::Accept),
        Some("reject") => Some(ReviewDecision::Reject),
        _ => None,
    };
    if let Some(message) = decision.and_then(|d| roster.review(id, d)) {
        println!();
        println!("{}", message);
    }
    Ok(())
}

fn onboard(file: &std::path::Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let submission: Submission =
        serde_json::from_str(&content).context("Failed to parse submission")?;

    let store = CatalogStore::roster();
    let id = crate::core::onboarding::next_id(&store.get_all());

    let mut wizard = OnboardingWizard::new(submission);
    match wizard.submit(id) {
        Ok(record) => {
            store.add(record.clone());
            println!("Welcome to Artistly! Your profile has been submitted successfully.");
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                println!("- {}", error);
            }
            anyhow::bail!("Submission rejected with {} error(s)", errors.len())
        }
    }
}

async fn serve(data_dir: PathBuf, host: String, port: u16) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let addr = format!("{}:{}", host, port);
    info!("Serving {:?} on http://{}/data", data_dir, addr);

    let data = web::Data::new(api::data::DataDir(data_dir));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(data.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(&addr)
    .with_context(|| format!("Failed to bind {}", addr))?
    .run()
    .await?;

    Ok(())
}
