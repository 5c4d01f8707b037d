//! CLI command implementations.

pub mod config;
pub mod product;
pub mod products;
pub mod resolve;
pub mod search;
pub mod seo;
pub mod suggest;

use clap::{Args, Subcommand};

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Host as sent in the Host header (default: configured default host).
    pub host: Option<String>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Tenant host.
    #[arg(long)]
    pub host: Option<String>,

    /// Category slug (e.g. `audio`, `smart-home`).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price in dollars.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price in dollars.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum rating.
    #[arg(short, long)]
    pub rating: Option<f64>,

    /// Required tag; repeat for several.
    #[arg(short, long)]
    pub tag: Vec<String>,

    /// Text filter over name, description and tags.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort order (`price-asc`, `price-desc`, `rating`, `newest`, `popular`).
    #[arg(short, long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,

    /// Tenant host.
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// Only match products visible on this host (articles are shared).
    #[arg(long)]
    pub host: Option<String>,

    /// Maximum number of results.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only search products.
    #[arg(long, conflicts_with = "articles_only")]
    pub products_only: bool,

    /// Only search articles.
    #[arg(long)]
    pub articles_only: bool,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial query.
    pub partial: String,

    /// Maximum number of suggestions.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the seo command.
#[derive(Args)]
pub struct SeoArgs {
    #[command(subcommand)]
    pub command: SeoCommand,
}

#[derive(Subcommand)]
pub enum SeoCommand {
    /// Print sitemap.xml
    Sitemap,

    /// Print robots.txt
    Robots,

    /// Print JSON-LD for a product or article slug
    Jsonld {
        /// Product or article slug.
        slug: String,
    },

    /// Print the rendered head tags for a product or article slug
    Head {
        /// Product or article slug.
        slug: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Public base URL of the site
        #[arg(long, default_value = "https://producthub.example.com")]
        base_url: String,
    },

    /// Validate configuration and data files
    Validate,
}
