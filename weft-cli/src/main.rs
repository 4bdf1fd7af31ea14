//! Weft CLI: resolve utility tokens into CSS selectors
//!
//! Run with: cargo run --bin weft -- group-hover:underline
//!
//! - weft TOKEN...               # Print selector, body and sort rank
//! - weft --config weft.json ... # Apply preset options and transform rules
//! - weft --autocomplete         # Print every variant's suggestion pattern

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use weft_common::Config;
use weft_common::config::load;
use weft_variants::{MatchContext, Resolution, VariantSet};

/// Weft: pseudo-class and relation variants for utility-first CSS
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve a relation variant
    weft group-hover:underline

    # Several tokens at once
    weft 'peer-not-checked:hidden' 'part-[tab]:before:p-2'

    # Render relation bases as attributes
    weft --attributify group-focus:group-hover:x

    # Restore encoded class names before matching
    weft --config weft.json hover-c-text-red
"#)]
struct Cli {
    /// Utility tokens to resolve
    #[arg(value_name = "TOKEN")]
    tokens: Vec<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render relation bases as `[group=""]` instead of `.group`
    #[arg(long)]
    attributify: bool,

    /// Print autocomplete patterns instead of resolving tokens
    #[arg(long)]
    autocomplete: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    config.options.attributify_pseudo |= cli.attributify;

    let variants = VariantSet::new(&config.options);

    if cli.autocomplete {
        print_autocomplete(&variants);
        return Ok(());
    }

    if cli.tokens.is_empty() {
        anyhow::bail!("no tokens given; see `weft --help`");
    }

    let ctx = MatchContext::from(config.theme);
    for token in &cli.tokens {
        print_resolution(token, &variants.resolve(token, &ctx));
    }
    Ok(())
}

fn print_autocomplete(variants: &VariantSet) {
    println!("{}", "=== Autocomplete ===".bold());
    for (name, pattern) in variants.autocomplete() {
        println!("{:<18} {pattern}", name.cyan());
    }
}

fn print_resolution(token: &str, resolved: &Resolution) {
    println!("{}", format!("=== {token} ===").bold());
    if resolved.variants.is_empty() {
        println!("  {}", "no variant matched".dimmed());
    }
    for found in &resolved.variants {
        let label = if found.label.is_empty() {
            String::new()
        } else {
            format!(" label={}", found.label)
        };
        println!("  {}{label}", found.variant.cyan());
    }
    println!("  selector  {}", resolved.selector().green());
    println!("  body      {}", resolved.body);
    match resolved.rule.sort {
        Some(rank) => println!("  sort      {rank}"),
        None => println!("  sort      {}", "-".dimmed()),
    }
    if resolved.rule.no_merge {
        println!("  {}", "no-merge".yellow());
    }
}
