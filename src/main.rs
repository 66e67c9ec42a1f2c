use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use folio::{
    bind::{update_footer, Binder},
    error::{IOError, RenderError, RenderErrorKind, Result},
    markup::FormatConfig,
    utils::{parse_content, parse_template, read_file, render_html_with, write_file},
};

/// Embedded decorative assets (cosmetic scroll/cursor behavior and styling)
const SITE_JS: &str = include_str!("../assets/site.js");
const SITE_CSS: &str = include_str!("../assets/site.css");

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Content document path (JSON)
    #[arg(short, long)]
    content: String,

    /// Template path (HTML)
    #[arg(short, long)]
    template: String,

    /// Output file path (stdout when absent)
    #[arg(short, long)]
    output: Option<String>,

    /// Emit indented HTML instead of compact
    #[arg(long)]
    indent: bool,

    /// Directory to copy the static assets (site.js, site.css) into
    #[arg(long)]
    assets: Option<PathBuf>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Reading content document: {}", args.content);
    let doc = parse_content(&read_file(&args.content)?)?;

    info!("Reading template: {}", args.template);
    let mut page = parse_template(&read_file(&args.template)?)?;

    Binder::new(&doc).bind(&mut page);
    update_footer(&mut page, &doc, chrono::Local::now().year());

    let config = FormatConfig {
        indent: args.indent,
        ..FormatConfig::default()
    };
    let html = render_html_with(&page, &config)?;

    if let Some(output_path) = args.output {
        write_file(&output_path, &html)?;
    } else {
        println!("{}", html);
    }

    if let Some(assets_dir) = args.assets {
        std::fs::create_dir_all(&assets_dir).map_err(|e| {
            RenderError::new(RenderErrorKind::IO(IOError::WriteError(e.to_string())))
        })?;
        write_file(&assets_dir.join("site.js").to_string_lossy(), SITE_JS)?;
        write_file(&assets_dir.join("site.css").to_string_lossy(), SITE_CSS)?;
        info!("Assets written to {}", assets_dir.display());
    }

    Ok(())
}
