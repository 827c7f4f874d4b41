//! Print the generated HTML to PDF with a headless Chrome/Chromium.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Browser executables tried in order when none is given explicitly.
pub const BROWSER_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium-browser",
    "chromium",
];

/// First candidate browser found as an executable on `PATH`.
pub fn find_browser() -> Option<PathBuf> {
    BROWSER_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// Arguments passed to the browser for a print-to-PDF run.
pub fn print_args(html: &Path, pdf: &Path) -> Vec<String> {
    vec![
        "--headless".to_string(),
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        format!("--print-to-pdf={}", pdf.display()),
        html.display().to_string(),
    ]
}

/// Run `browser` synchronously to print `html` into `pdf`.
pub fn render_pdf(browser: &Path, html: &Path, pdf: &Path) -> Result<()> {
    let args = print_args(html, pdf);
    debug!("running {} {}", browser.display(), args.join(" "));

    let output = Command::new(browser)
        .args(&args)
        .output()
        .with_context(|| format!("failed to launch {}", browser.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} exited with {}: {}",
            browser.display(),
            output.status,
            stderr.trim()
        );
    }
    Ok(())
}
