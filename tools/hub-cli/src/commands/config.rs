//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, base_url } => init_config(force, &base_url, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let site = &ctx.config.site;
    ctx.output.info("");
    ctx.output.info("[site]");
    ctx.output.kv("name", &site.name);
    ctx.output.kv("base_url", &site.base_url);
    ctx.output.kv("default_host", &site.default_host);

    ctx.output.info("");
    ctx.output.info("[site.search]");
    ctx.output
        .kv("default_limit", &site.search.default_limit.to_string());
    ctx.output.kv("page_limit", &site.search.page_limit.to_string());
    ctx.output
        .kv("suggestion_limit", &site.search.suggestion_limit.to_string());

    ctx.output.info("");
    ctx.output.info("[site.logging]");
    ctx.output.kv("format", &site.logging.format);
    ctx.output.kv("level", &site.logging.level);

    let data = &ctx.config.data;
    ctx.output.info("");
    ctx.output.info("[data]");
    let bundled = "(bundled)".to_string();
    ctx.output.kv(
        "catalog_dir",
        &data
            .catalog_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| bundled.clone()),
    );
    ctx.output.kv(
        "domains_file",
        &data
            .domains_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or(bundled),
    );

    Ok(())
}

fn init_config(force: bool, base_url: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(base_url))?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating Configuration");

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = ctx.config.site.validate() {
        errors.push(e.to_string());
    }
    if ctx.config.site.logging.format.parse::<hub_observability::LogFormat>().is_err() {
        errors.push(format!("Unknown log format '{}'", ctx.config.site.logging.format));
    }
    if ctx.config.site.logging.level.parse::<hub_observability::LogLevel>().is_err() {
        errors.push(format!("Unknown log level '{}'", ctx.config.site.logging.level));
    }

    if errors.is_empty() {
        match ctx.storefront() {
            Ok(store) => {
                let sites = store.sites();
                let catalog = store.catalog();
                for domain in sites.domains() {
                    for id in &domain.products {
                        if catalog.product_by_id(id.as_str()).is_none() {
                            warnings.push(format!(
                                "{} lists unknown product '{}'",
                                domain.host, id
                            ));
                        }
                    }
                }
                ctx.output.kv("products", &catalog.products().len().to_string());
                ctx.output.kv("articles", &catalog.articles().len().to_string());
                ctx.output.kv("domains", &sites.domains().len().to_string());
            }
            Err(e) => errors.push(format!("{:#}", e)),
        }
    }

    for warning in &warnings {
        ctx.output.warn(warning);
    }

    if !errors.is_empty() {
        for error in &errors {
            ctx.output.error(error);
        }
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}
