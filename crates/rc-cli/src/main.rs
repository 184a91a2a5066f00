//! ReColl CLI
//!
//! Tool for classifying resource URLs and inspecting collection exports.

use std::fs;

use clap::{Parser, Subcommand};

use rc_core::{
    classify, extract_instagram_reel_id, extract_youtube_id, favicon_url, Category, Collection,
    FilterCriteria,
};

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "ReColl resource classification and collection tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify resource URLs
    Classify {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,

        /// Also print extracted platform ids and the favicon URL
        #[arg(short, long)]
        verbose: bool,
    },

    /// Filter a collection export
    Filter {
        /// Collection JSON file
        #[arg(short, long)]
        input: String,

        /// Free-text query matched against titles and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Required tag (repeatable; every tag must be present)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Category filter: video, document, or web
        #[arg(short, long)]
        category: Option<Category>,

        /// Pretty-print the surviving records
        #[arg(short, long)]
        pretty: bool,
    },

    /// List distinct tags with usage counts
    Tags {
        /// Collection JSON file
        #[arg(short, long)]
        input: String,
    },

    /// Summarize a collection export
    Info {
        /// Collection JSON file
        #[arg(short, long)]
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify { urls, verbose } => cmd_classify(&urls, verbose),
        Commands::Filter {
            input,
            query,
            tags,
            category,
            pretty,
        } => cmd_filter(&input, query, tags, category, pretty),
        Commands::Tags { input } => cmd_tags(&input),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_collection(path: &str) -> Result<Collection, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    Collection::from_json(&json).map_err(|e| format!("Failed to load '{}': {}", path, e))
}

fn cmd_classify(urls: &[String], verbose: bool) -> Result<(), String> {
    for url in urls {
        println!("{} -> {}", url, classify(url));

        if verbose {
            if let Some(id) = extract_youtube_id(url) {
                println!("  youtube id: {id}");
            }
            if let Some(id) = extract_instagram_reel_id(url) {
                println!("  reel id:    {id}");
            }
            let favicon = favicon_url(url);
            if !favicon.is_empty() {
                println!("  favicon:    {favicon}");
            }
        }
    }

    Ok(())
}

fn cmd_filter(
    input: &str,
    query: String,
    tags: Vec<String>,
    category: Option<Category>,
    pretty: bool,
) -> Result<(), String> {
    let collection = load_collection(input)?;

    let criteria = FilterCriteria { query, tags, category };
    let survivors = criteria.apply(&collection.resources);

    let json = if pretty {
        serde_json::to_string_pretty(&survivors)
    } else {
        serde_json::to_string(&survivors)
    }
    .map_err(|e| format!("Failed to serialize results: {}", e))?;

    println!("{json}");
    Ok(())
}

fn cmd_tags(input: &str) -> Result<(), String> {
    let collection = load_collection(input)?;

    for tag in collection.all_tags() {
        let count = collection
            .resources
            .iter()
            .filter(|resource| resource.tags.iter().any(|t| t == &tag))
            .count();
        println!("{tag} ({count})");
    }

    Ok(())
}

fn cmd_info(input: &str) -> Result<(), String> {
    let collection = load_collection(input)?;

    let files = collection
        .resources
        .iter()
        .filter(|resource| resource.kind == rc_core::ResourceKind::File)
        .count();

    println!("Collection '{}'", input);
    println!("  Resources: {}", collection.len());
    println!("  Files:     {}", files);
    println!("  Links:     {}", collection.len() - files);

    for category in Category::ALL {
        let count = collection
            .resources
            .iter()
            .filter(|resource| {
                resource
                    .url
                    .as_deref()
                    .is_some_and(|url| !url.is_empty() && classify(url) == category)
            })
            .count();
        println!("  {:<10} {}", format!("{}:", category.label()), count);
    }

    println!("  Tags:      {}", collection.all_tags().len());
    Ok(())
}
