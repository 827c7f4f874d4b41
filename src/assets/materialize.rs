//! Copy referenced assets next to the generated HTML so relative links resolve.

use crate::model::AssetCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Subdirectory of the output that holds the logo.
pub const IMAGES_DIR: &str = "images";

/// Copy the logo, every slot image, extra image and schematic PDF.
///
/// Missing sources are skipped. Returns the destination paths written.
pub fn materialize(
    catalog: &AssetCatalog,
    hardware_dir: &Path,
    output_dir: &Path,
    logo: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut written = Vec::new();

    if let Some(logo) = logo {
        if let Some(name) = logo.file_name().filter(|_| logo.is_file()) {
            let dest_dir = output_dir.join(IMAGES_DIR);
            fs::create_dir_all(&dest_dir)
                .with_context(|| format!("failed to create {}", dest_dir.display()))?;
            let dest = dest_dir.join(name);
            copy(logo, &dest)?;
            written.push(dest);
        } else {
            debug!("logo not found at {}; skipping", logo.display());
        }
    }

    let files = catalog
        .slots
        .filled()
        .map(|(_, f)| f)
        .chain(catalog.extras.iter().map(|e| e.filename.as_str()))
        .chain(catalog.schematic_pdfs.iter().map(String::as_str));

    for name in files {
        let source = hardware_dir.join(name);
        if !source.is_file() {
            debug!("asset vanished since scan: {}", source.display());
            continue;
        }
        let dest = output_dir.join(name);
        copy(&source, &dest)?;
        written.push(dest);
    }

    info!("copied {} asset(s) to {}", written.len(), output_dir.display());
    Ok(written)
}

fn copy(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).with_context(|| {
        format!("failed to copy {} to {}", source.display(), dest.display())
    })?;
    debug!("copied {}", dest.display());
    Ok(())
}
