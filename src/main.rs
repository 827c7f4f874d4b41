//! datasheet: generate a print-ready HTML datasheet from a module README.
//!
//! Reads the README front-matter and well-known sections, classifies the
//! images under the hardware-resources directory, writes one self-contained
//! HTML page into the build directory, copies the referenced assets next to
//! it, and optionally prints it to PDF with a headless browser:
//!
//! `datasheet -i README.md -r ../../hardware/resources -o build`

mod assets;
mod error;
mod inline;
mod loader;
mod model;
mod parser;
mod pdf;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use render::Renderer;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(
    name = "datasheet",
    about = "Generate a professional HTML/PDF datasheet from a hardware module README"
)]
struct Cli {
    /// Markdown README describing the module
    #[arg(short = 'i', long, default_value = "README.md")]
    input: PathBuf,

    /// Hardware resources directory scanned for images and schematic PDFs
    #[arg(short = 'r', long, default_value = "../../hardware/resources")]
    hardware: PathBuf,

    /// Build directory for the HTML, PDF and copied assets
    #[arg(short = 'o', long, default_value = "build")]
    output: PathBuf,

    /// Output file name without extension
    #[arg(short = 'n', long, default_value = "datasheet_professional")]
    name: String,

    /// Company logo copied into <output>/images/
    #[arg(long, default_value = "images/logo_unit.png")]
    logo: PathBuf,

    /// Company name shown in the header and footer
    #[arg(long, default_value = "UNIT Electronics México")]
    company: String,

    /// Skip PDF rendering
    #[arg(long)]
    no_pdf: bool,

    /// Browser executable for PDF rendering (default: first Chrome/Chromium on PATH)
    #[arg(long)]
    browser: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(html_path) => {
            println!("{}", html_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("datasheet generation failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Full pipeline. Returns the path of the written HTML.
fn run(cli: &Cli) -> Result<PathBuf> {
    info!("reading {}", cli.input.display());
    let doc = loader::load(&cli.input)?;

    let catalog = assets::scan(&cli.hardware);
    let logo_name = cli
        .logo
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "logo.png".to_string());
    let branding = model::Branding {
        company: cli.company.clone(),
        logo: format!("{}/{}", assets::materialize::IMAGES_DIR, logo_name),
    };
    let sheet = parser::build(&doc, catalog, branding);

    let renderer = render::html::HtmlRenderer;
    let html = renderer.render(&sheet);

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory: {}", cli.output.display()))?;
    let html_path = cli
        .output
        .join(format!("{}.{}", cli.name, renderer.file_extension()));
    fs::write(&html_path, &html)
        .with_context(|| format!("failed to write {}", html_path.display()))?;
    info!("wrote {}", html_path.display());

    assets::materialize(&sheet.assets, &cli.hardware, &cli.output, Some(&cli.logo))?;

    if !cli.no_pdf {
        print_pdf(cli, &html_path);
    }

    Ok(html_path)
}

/// PDF output is best effort: the HTML is already on disk.
fn print_pdf(cli: &Cli, html_path: &Path) {
    let Some(browser) = cli.browser.clone().or_else(pdf::find_browser) else {
        warn!("no Chrome/Chromium browser found; PDF not generated, HTML is available");
        return;
    };
    let pdf_path = html_path.with_extension("pdf");
    match pdf::render_pdf(&browser, html_path, &pdf_path) {
        Ok(()) => info!("wrote {}", pdf_path.display()),
        Err(e) => warn!("PDF generation failed: {:#}; HTML is still available", e),
    }
}
