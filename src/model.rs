//! Format-agnostic model of a module datasheet and its hardware assets.

use serde_yaml::{Mapping, Value};

pub const DEFAULT_TITLE: &str = "Electronic Module";
pub const DEFAULT_SUBTITLE: &str = "Professional sensor module";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_INTERFACES: &str = "I²C, SPI";
pub const DEFAULT_CONNECTOR: &str = "Qwiic + Pin Headers";

/// Source README after comment removal and front-matter split.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub front_matter: Mapping,
    pub body: String,
    /// `YYYY-MM-DD`, local time at load.
    pub date: String,
}

impl Document {
    /// Read a scalar front-matter field as text.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.front_matter.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        self.field("title").unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn subtitle(&self) -> String {
        self.field("subtitle")
            .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string())
    }

    pub fn version(&self) -> String {
        self.field("version")
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }
}

/// One `label: value` specification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

/// Insertion-ordered label → value list.
///
/// Re-inserting a label overwrites its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecTable {
    entries: Vec<SpecEntry>,
}

impl SpecTable {
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.value = value,
            None => self.entries.push(SpecEntry { label, value }),
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpecEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Interface/connector description pulled out of the electrical section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    pub interfaces: Option<String>,
    pub connector: Option<String>,
}

impl Connectivity {
    pub fn interfaces_or_default(&self) -> &str {
        self.interfaces.as_deref().unwrap_or(DEFAULT_INTERFACES)
    }

    pub fn connector_or_default(&self) -> &str {
        self.connector.as_deref().unwrap_or(DEFAULT_CONNECTOR)
    }
}

/// Words that put a spec label in the power group.
const POWER_KEYWORDS: &[&str] = &["power", "supply", "consumption", "current", "voltage"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectricalSpecs {
    pub specs: SpecTable,
    pub connectivity: Connectivity,
}

impl ElectricalSpecs {
    pub fn is_power_label(label: &str) -> bool {
        let lower = label.to_lowercase();
        POWER_KEYWORDS.iter().any(|k| lower.contains(k))
    }

    /// Specs whose label matches a power keyword.
    pub fn power(&self) -> Vec<&SpecEntry> {
        self.specs
            .iter()
            .filter(|e| Self::is_power_label(&e.label))
            .collect()
    }

    /// Everything not in [`power`](Self::power).
    pub fn general(&self) -> Vec<&SpecEntry> {
        self.specs
            .iter()
            .filter(|e| !Self::is_power_label(&e.label))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    /// Empty when the bullet had no `:`.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub title: Option<String>,
    pub description: String,
}

/// A markdown table. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Semantic role of a hardware image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    Top,
    Bottom,
    Pinout,
    Dimensions,
    Topology,
    Schematic,
}

impl AssetSlot {
    pub const ALL: [AssetSlot; 6] = [
        AssetSlot::Top,
        AssetSlot::Bottom,
        AssetSlot::Pinout,
        AssetSlot::Dimensions,
        AssetSlot::Topology,
        AssetSlot::Schematic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AssetSlot::Top => "top",
            AssetSlot::Bottom => "bottom",
            AssetSlot::Pinout => "pinout",
            AssetSlot::Dimensions => "dimensions",
            AssetSlot::Topology => "topology",
            AssetSlot::Schematic => "schematic",
        }
    }
}

/// At most one filename per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSlots {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub pinout: Option<String>,
    pub dimensions: Option<String>,
    pub topology: Option<String>,
    pub schematic: Option<String>,
}

impl AssetSlots {
    pub fn get(&self, slot: AssetSlot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    pub fn set(&mut self, slot: AssetSlot, filename: impl Into<String>) {
        *self.slot_mut(slot) = Some(filename.into());
    }

    /// Filled slots in [`AssetSlot::ALL`] order.
    pub fn filled(&self) -> impl Iterator<Item = (AssetSlot, &str)> {
        AssetSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|f| (slot, f)))
    }

    pub fn contains_file(&self, filename: &str) -> bool {
        self.filled().any(|(_, f)| f == filename)
    }

    fn slot_ref(&self, slot: AssetSlot) -> &Option<String> {
        match slot {
            AssetSlot::Top => &self.top,
            AssetSlot::Bottom => &self.bottom,
            AssetSlot::Pinout => &self.pinout,
            AssetSlot::Dimensions => &self.dimensions,
            AssetSlot::Topology => &self.topology,
            AssetSlot::Schematic => &self.schematic,
        }
    }

    fn slot_mut(&mut self, slot: AssetSlot) -> &mut Option<String> {
        match slot {
            AssetSlot::Top => &mut self.top,
            AssetSlot::Bottom => &mut self.bottom,
            AssetSlot::Pinout => &mut self.pinout,
            AssetSlot::Dimensions => &mut self.dimensions,
            AssetSlot::Topology => &mut self.topology,
            AssetSlot::Schematic => &mut self.schematic,
        }
    }
}

/// Category assigned to a hardware image that fills no slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKind {
    Schematic,
    PcbLayout,
    Assembly,
    Connection,
    SizeReference,
    Detail,
    Packaging,
    TechnicalReference,
}

impl ExtraKind {
    pub fn title(self) -> &'static str {
        match self {
            ExtraKind::Schematic => "CIRCUIT SCHEMATIC",
            ExtraKind::PcbLayout => "PCB LAYOUT",
            ExtraKind::Assembly => "ASSEMBLY GUIDE",
            ExtraKind::Connection => "CONNECTION DIAGRAM",
            ExtraKind::SizeReference => "SIZE REFERENCE",
            ExtraKind::Detail => "DETAIL VIEW",
            ExtraKind::Packaging => "PACKAGING",
            ExtraKind::TechnicalReference => "TECHNICAL REFERENCE",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            ExtraKind::Schematic => "Detailed circuit diagram and component layout",
            ExtraKind::PcbLayout => "Printed circuit board design and routing",
            ExtraKind::Assembly => "Installation and mounting instructions",
            ExtraKind::Connection => "Wiring and connection examples",
            ExtraKind::SizeReference => "Physical size comparison and scale",
            ExtraKind::Detail => "Close-up component details",
            ExtraKind::Packaging => "Product packaging and contents",
            ExtraKind::TechnicalReference => "Additional product documentation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraImage {
    pub filename: String,
    pub kind: ExtraKind,
}

/// Everything found in the hardware-resources directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCatalog {
    pub slots: AssetSlots,
    /// First schematic PDF by name; used for the download link.
    pub schematic_pdf: Option<String>,
    /// Every schematic PDF, all of which get copied.
    pub schematic_pdfs: Vec<String>,
    pub extras: Vec<ExtraImage>,
}

/// Company name and logo shown in the header and footer.
#[derive(Debug, Clone)]
pub struct Branding {
    pub company: String,
    /// Logo path relative to the output HTML.
    pub logo: String,
}

/// Fully extracted content, ready to render.
#[derive(Debug, Clone)]
pub struct Datasheet {
    pub title: String,
    pub subtitle: String,
    pub version: String,
    pub date: String,
    pub branding: Branding,
    pub introduction: Vec<String>,
    pub electrical: ElectricalSpecs,
    pub key_features: SpecTable,
    pub pin_table: Option<TableBlock>,
    pub interface_table: Option<TableBlock>,
    pub features: Vec<Feature>,
    pub applications: Vec<Application>,
    /// Inline-processed HTML of the Usage section.
    pub usage: String,
    /// Inline-processed HTML of the Downloads section.
    pub downloads: String,
    pub assets: AssetCatalog,
}
