//! Parser module: section lookup plus one field parser per section.

pub mod features;
pub mod intro;
pub mod section;
pub mod specs;
pub mod table;

use crate::inline;
use crate::model::{AssetCatalog, Branding, Datasheet, Document};
use section::extract_section;
use tracing::debug;

pub const USAGE_SECTION: &str = "Usage";
pub const DOWNLOADS_SECTION: &str = "Downloads";

/// Extract every datasheet field from a loaded document.
pub fn build(doc: &Document, assets: AssetCatalog, branding: Branding) -> Datasheet {
    let body = doc.body.as_str();
    let features_text = extract_section(features::FEATURES_SECTION, body);

    let sheet = Datasheet {
        title: doc.title(),
        subtitle: doc.subtitle(),
        version: doc.version(),
        date: doc.date.clone(),
        branding,
        introduction: intro::parse(&extract_section(intro::SECTION, body)),
        electrical: specs::parse(&extract_section(specs::SECTION, body)),
        key_features: features::parse_key_features(&features_text),
        pin_table: table::parse(&extract_section(table::PINOUT_SECTION, body)),
        interface_table: table::parse(&extract_section(table::INTERFACE_SECTION, body)),
        features: features::parse_features(&features_text),
        applications: features::parse_applications(&extract_section(
            features::APPLICATIONS_SECTION,
            body,
        )),
        usage: inline::process(&extract_section(USAGE_SECTION, body)),
        downloads: inline::process(&extract_section(DOWNLOADS_SECTION, body)),
        assets,
    };

    debug!(
        specs = sheet.electrical.specs.len(),
        features = sheet.features.len(),
        applications = sheet.applications.len(),
        pin_table = sheet.pin_table.is_some(),
        interface_table = sheet.interface_table.is_some(),
        "extracted datasheet fields"
    );
    sheet
}
