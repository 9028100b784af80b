/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * md2adf: convert Markdown to Atlassian Document Format JSON.
 */

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use adf_types::{MediaLayout, TableLayout};
use anyhow::{Context, Result, bail};
use clap::Parser;
use comrak_to_adf::{Config, Converter};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "md2adf", version)]
#[command(about = "Convert Markdown to Atlassian Document Format (ADF) JSON")]
struct Args {
    /// Markdown file to convert (reads stdin when absent or "-")
    input: Option<PathBuf>,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
    /// autolinks, task lists, superscript)
    #[arg(long)]
    gfm: bool,

    /// Render images as external media nodes instead of links
    #[arg(long)]
    external_media: bool,

    /// Table layout: default, center, wide or full-width
    #[arg(long, value_name = "LAYOUT")]
    table_layout: Option<TableLayout>,

    /// Layout of external media: center, wide, full-width, wrap-left,
    /// wrap-right, align-start or align-end
    #[arg(long, value_name = "LAYOUT")]
    image_layout: Option<MediaLayout>,

    /// Read converter options from a TOML file. Command-line flags take
    /// precedence over the file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Validate the generated document and fail if it is not valid ADF
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the JSON on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "md2adf=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config = resolve_config(&args)?;
    debug!(?config, gfm = args.gfm, "Resolved configuration");
    let converter = if args.gfm {
        Converter::with_gfm(config)
    } else {
        Converter::new(config)
    };

    let markdown = read_input(args.input.as_deref())?;
    let document = converter
        .to_document(&markdown)
        .context("Failed to convert document")?;
    let json = if args.pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };

    write_output(args.output.as_deref(), &json)?;
    info!(blocks = document.content.len(), "Wrote ADF document");

    if args.validate {
        if let Err(errors) = adf_schema::validate_str(&json) {
            for error in errors.iter() {
                eprintln!("{}", error);
            }
            bail!("Generated document is not valid ADF ({} errors)", errors.len());
        }
        debug!("Generated document is valid ADF");
    }

    Ok(())
}

/// Layer the config file (if any) and the command-line flags over the
/// defaults.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = &args.config {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        config = config
            .merge_toml_str(&source)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
    }

    if args.external_media {
        config = config.with_external_media(true);
    }
    if let Some(layout) = args.table_layout {
        config = config.with_table_layout(layout);
    }
    if let Some(layout) = args.image_layout {
        config = config.with_image_layout(layout);
    }
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read from stdin")?;
            Ok(markdown)
        }
    }
}

fn write_output(output: Option<&Path>, json: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
