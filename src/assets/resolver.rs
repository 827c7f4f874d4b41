//! Filename heuristics that map hardware images to datasheet slots.
//!
//! Classification is a pure function of the filename; [`AssetSlots::offer`]
//! is the only place slot state changes, so the rules can be tested without
//! touching the filesystem. The order of the checks in [`classify`] decides
//! which slot wins when a name matches several keyword sets.

use crate::model::{AssetCatalog, AssetSlot, AssetSlots, ExtraImage, ExtraKind};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp"];
const EXTRA_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Names already covered by a main slot, never shown as extra images.
const EXTRA_SKIP_MAIN: &[&str] = &["pinout", "dimension", "top", "btm", "bottom", "topology"];
/// Branding and template artwork.
const EXTRA_SKIP_DECOR: &[&str] = &["icon", "logo", "watermark", "template"];

const EXTRA_RULES: &[(&[&str], ExtraKind)] = &[
    (&["sch", "schematic", "circuit"], ExtraKind::Schematic),
    (&["pcb", "board", "layout"], ExtraKind::PcbLayout),
    (&["assembly", "mounting", "install"], ExtraKind::Assembly),
    (&["connection", "wire", "cable"], ExtraKind::Connection),
    (&["size", "scale", "comparison"], ExtraKind::SizeReference),
    (&["detail", "close", "zoom"], ExtraKind::Detail),
    (&["package", "box", "kit"], ExtraKind::Packaging),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn has_extension(lower: &str, exts: &[&str]) -> bool {
    exts.iter().any(|e| lower.ends_with(e))
}

/// Slot for an image filename, or `None` for non-images and unmatched names.
pub fn classify(filename: &str) -> Option<AssetSlot> {
    let lower = filename.to_lowercase();
    if !has_extension(&lower, IMAGE_EXTENSIONS) {
        return None;
    }

    if contains_any(&lower, &["topology", "block_diagram", "system"]) {
        Some(AssetSlot::Topology)
    } else if contains_any(&lower, &["_top", "top_view", "topview"]) && !lower.contains("topology") {
        Some(AssetSlot::Top)
    } else if contains_any(&lower, &["_btm", "_bottom", "bottom_view", "bottomview"]) {
        Some(AssetSlot::Bottom)
    } else if contains_any(&lower, &["pinout", "pin_out", "pins", "pinmap"]) {
        Some(AssetSlot::Pinout)
    } else if contains_any(&lower, &["dimension", "dimensions", "size", "mechanical"]) {
        Some(AssetSlot::Dimensions)
    } else if contains_any(&lower, &["sch", "schematic", "circuit"]) && !lower.contains(".pdf") {
        Some(AssetSlot::Schematic)
    } else {
        None
    }
}

/// Whether a new pinout candidate replaces the current occupant.
///
/// Yields PNG over JPG, English over Spanish, first seen otherwise.
pub fn prefer_pinout(candidate: &str, current: Option<&str>) -> bool {
    let Some(current) = current else {
        return true;
    };
    let cand = candidate.to_lowercase();
    let cur = current.to_lowercase();
    let cand_png = cand.ends_with(".png");

    (cand_png && cur.ends_with(".jpg"))
        || (cand.contains("en") && cur.contains("es"))
        || (cand_png && cur.ends_with(".png") && cand.contains("en"))
}

impl AssetSlots {
    /// Offer one filename to the slots. Returns the slot it now occupies.
    pub fn offer(&mut self, filename: &str) -> Option<AssetSlot> {
        let slot = classify(filename)?;
        if slot == AssetSlot::Pinout && !prefer_pinout(filename, self.get(AssetSlot::Pinout)) {
            debug!(file = filename, kept = ?self.pinout, "pinout candidate not preferred");
            return None;
        }
        self.set(slot, filename);
        Some(slot)
    }
}

/// Schematic PDF download candidates.
pub fn is_schematic_pdf(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.contains("sch") && lower.ends_with(".pdf")
}

/// Category for an image that no main slot claims, or `None` if skipped.
pub fn classify_extra(filename: &str) -> Option<ExtraKind> {
    let lower = filename.to_lowercase();
    if !has_extension(&lower, EXTRA_EXTENSIONS)
        || contains_any(&lower, EXTRA_SKIP_MAIN)
        || contains_any(&lower, EXTRA_SKIP_DECOR)
    {
        return None;
    }
    let kind = EXTRA_RULES
        .iter()
        .find(|(keys, _)| contains_any(&lower, keys))
        .map(|(_, kind)| *kind)
        .unwrap_or(ExtraKind::TechnicalReference);
    Some(kind)
}

/// Build a catalog from a flat list of filenames.
///
/// Names are sorted first so the result does not depend on listing order.
pub fn catalog_from_names<S: AsRef<str>>(names: &[S]) -> AssetCatalog {
    let mut names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();
    names.dedup();

    let mut catalog = AssetCatalog::default();
    for name in &names {
        catalog.slots.offer(name);
        if is_schematic_pdf(name) {
            catalog.schematic_pdfs.push(name.to_string());
        }
    }
    catalog.schematic_pdf = catalog.schematic_pdfs.first().cloned();

    for name in &names {
        if catalog.slots.contains_file(name) {
            continue;
        }
        if let Some(kind) = classify_extra(name) {
            catalog.extras.push(ExtraImage {
                filename: name.to_string(),
                kind,
            });
        }
    }
    catalog
}

fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)?.flatten() {
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("skipping non UTF-8 file name: {:?}", name),
        }
    }
    Ok(names)
}

/// Scan a hardware-resources directory (non-recursive).
///
/// A missing or unreadable directory yields an empty catalog.
pub fn scan(dir: &Path) -> AssetCatalog {
    match list_files(dir) {
        Ok(names) => {
            let catalog = catalog_from_names(&names);
            for (slot, file) in catalog.slots.filled() {
                debug!(slot = slot.name(), file, "resolved asset");
            }
            catalog
        }
        Err(e) => {
            warn!("hardware resources unavailable at {}: {}", dir.display(), e);
            AssetCatalog::default()
        }
    }
}
