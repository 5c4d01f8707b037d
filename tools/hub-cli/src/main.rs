//! Hub CLI - Command line tool for ProductHub.
//!
//! Commands:
//! - `hub resolve` - Show the domain config a host resolves to
//! - `hub products` - List a domain's products with filters
//! - `hub product` - Show one product page
//! - `hub search` - Search products and articles
//! - `hub suggest` - Autocomplete suggestions
//! - `hub seo` - Sitemap, robots.txt and JSON-LD output
//! - `hub config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hub_observability::{init_tracing, LogFormat, LogLevel};

use commands::{
    ConfigArgs, ProductArgs, ProductsArgs, ResolveArgs, SearchArgs, SeoArgs, SuggestArgs,
};

/// Hub CLI - Inspect ProductHub tenants, catalog and SEO output
#[derive(Parser)]
#[command(name = "hub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the domain configuration for a host
    Resolve(ResolveArgs),

    /// List products visible on a domain
    Products(ProductsArgs),

    /// Show a product by slug
    Product(ProductArgs),

    /// Search products and articles
    Search(SearchArgs),

    /// Autocomplete suggestions for a partial query
    Suggest(SuggestArgs),

    /// Print SEO output
    Seo(SeoArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    init_logging(&ctx, cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, &ctx),
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Seo(args) => commands::seo::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `--verbose` forces debug level.
fn init_logging(ctx: &context::Context, verbose: bool) {
    let logging = &ctx.config.site.logging;
    let format = logging.format.parse().unwrap_or(LogFormat::Human);
    let level = if verbose {
        LogLevel::Debug
    } else {
        logging.level.parse().unwrap_or(LogLevel::Warn)
    };

    if !init_tracing(format, level) {
        ctx.output.debug("tracing subscriber already installed");
    }
}
