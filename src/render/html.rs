//! HTML renderer producing one self-contained, print-ready datasheet page.
//!
//! The page is an ordered list of optional blocks. A block producer returns
//! `None` when its data is empty, so no empty container is ever emitted.

use crate::model::*;
use crate::parser::table::{classify_pin_cell, PinCell};
use crate::render::style::STYLESHEET;
use crate::render::{html_escape, js_escape, product_code, Renderer};

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, sheet: &Datasheet) -> String {
        render(sheet)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

pub fn render(sheet: &Datasheet) -> String {
    let code = product_code(&sheet.title);
    let blocks = [
        Some(header(sheet, &code)),
        introduction(sheet),
        product_views(&sheet.assets.slots),
        key_specs(sheet),
        table_section("PIN CONFIGURATION", sheet.pin_table.as_ref(), true),
        table_section("COMMUNICATION INTERFACES", sheet.interface_table.as_ref(), false),
        features(&sheet.features),
        applications(&sheet.applications),
        visual_documentation(&sheet.assets),
        usage_downloads(sheet),
        pinout_page(&sheet.assets.slots),
        Some(footer(sheet, &code)),
    ];

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"en\" data-product=\"{}\">\n<head>\n",
        html_escape(&code)
    ));
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!(
        "<title>{} - Professional Technical Datasheet</title>\n",
        html_escape(&sheet.title)
    ));
    out.push_str("<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(
        "<a href=\"#\" class=\"download-button no-print\" onclick=\"window.print()\">Download PDF</a>\n",
    );
    out.push_str("<div class=\"container\">\n");

    for block in blocks.into_iter().flatten() {
        out.push_str(&block);
    }

    out.push_str("</div>\n");
    out.push_str(&script(sheet));
    out.push_str("</body>\n</html>\n");
    out
}

fn header(sheet: &Datasheet, code: &str) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"header\">\n<div class=\"header-grid\">\n");
    out.push_str(&format!(
        "<div class=\"logo-section\"><img src=\"{}\" alt=\"{}\" class=\"company-logo\"></div>\n",
        html_escape(&sheet.branding.logo),
        html_escape(&sheet.branding.company)
    ));
    out.push_str("<div class=\"product-title-section\">\n");
    out.push_str(&format!("<div class=\"product-code\">{}</div>\n", html_escape(code)));
    out.push_str(&format!("<h1 class=\"product-title\">{}</h1>\n", html_escape(&sheet.title)));
    out.push_str(&format!(
        "<p class=\"product-subtitle\">{}</p>\n",
        html_escape(&sheet.subtitle)
    ));
    out.push_str("</div>\n<div class=\"version-section\">\n");
    out.push_str(&format!(
        "<div class=\"version-badge\">v{}</div>\n",
        html_escape(&sheet.version)
    ));
    out.push_str(&format!("<div class=\"generation-date\">{}</div>\n", sheet.date));
    out.push_str("<div>Rev. A</div>\n");
    out.push_str("</div>\n</div>\n</div>\n");
    out
}

fn introduction(sheet: &Datasheet) -> Option<String> {
    if sheet.introduction.is_empty() {
        return None;
    }
    let mut out = String::new();
    out.push_str("<div class=\"introduction-section\">\n");
    out.push_str("<h2 class=\"section-title\">Product Overview</h2>\n");
    out.push_str("<div class=\"introduction-content\">\n");
    for paragraph in &sheet.introduction {
        out.push_str(paragraph);
        out.push('\n');
    }
    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn product_views(slots: &AssetSlots) -> Option<String> {
    let views = [
        (slots.top.as_deref(), "TOP VIEW", "Top View", "Component placement and connectors"),
        (slots.bottom.as_deref(), "BOTTOM VIEW", "Bottom View", "Underside components and connections"),
    ];
    if views.iter().all(|(file, ..)| file.is_none()) {
        return None;
    }

    let mut out = String::new();
    out.push_str("<div class=\"product-views-section\">\n");
    out.push_str("<h2 class=\"section-title\">Product Views</h2>\n");
    out.push_str("<div class=\"product-views-grid\">\n");
    for (file, title, alt, caption) in views {
        let Some(file) = file else { continue };
        out.push_str("<div class=\"view-card\">\n");
        out.push_str(&format!("<div class=\"view-title\">{}</div>\n", title));
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"product-view-image\">\n",
            html_escape(file),
            alt
        ));
        out.push_str(&format!("<div class=\"view-caption\">{}</div>\n", caption));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn spec_group<'a>(title: &str, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"spec-group\">\n<h4>{}</h4>\n", title));
    for (label, value) in entries {
        out.push_str(&format!(
            "<div class=\"spec-item\"><span class=\"spec-label\">{}:</span> <span class=\"spec-value\">{}</span></div>\n",
            html_escape(label),
            html_escape(value)
        ));
    }
    out.push_str("</div>\n");
    out
}

fn key_specs(sheet: &Datasheet) -> Option<String> {
    let electrical = &sheet.electrical;
    let connectivity = &electrical.connectivity;
    if electrical.specs.is_empty()
        && sheet.key_features.is_empty()
        && connectivity.interfaces.is_none()
        && connectivity.connector.is_none()
    {
        return None;
    }

    let mut out = String::new();
    out.push_str("<div class=\"key-specs\">\n");
    out.push_str("<div class=\"specs-title\">KEY TECHNICAL<br>SPECIFICATIONS</div>\n");
    out.push_str("<div class=\"specs-grid\">\n");

    let power = electrical.power();
    if !power.is_empty() {
        out.push_str(&spec_group(
            "POWER SUPPLY",
            power.iter().map(|e| (e.label.as_str(), e.value.as_str())),
        ));
    }
    if !sheet.key_features.is_empty() {
        out.push_str(&spec_group(
            "SENSING",
            sheet.key_features.iter().map(|e| (e.label.as_str(), e.value.as_str())),
        ));
    }
    let general = electrical.general();
    if !general.is_empty() {
        out.push_str(&spec_group(
            "GENERAL",
            general.iter().map(|e| (e.label.as_str(), e.value.as_str())),
        ));
    }
    out.push_str(&spec_group(
        "CONNECTIVITY",
        [
            ("Interfaces", connectivity.interfaces_or_default()),
            ("Connector", connectivity.connector_or_default()),
        ],
    ));

    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn render_table(table: &TableBlock, pinout: bool) -> String {
    let class = if pinout {
        "professional-table pinout-table"
    } else {
        "professional-table"
    };

    let mut out = String::new();
    out.push_str(&format!("<table class=\"{}\">\n<thead>\n<tr>\n", class));
    for header in &table.headers {
        out.push_str(&format!("<th>{}</th>\n", html_escape(header)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        out.push_str("<tr>\n");
        for (j, cell) in row.iter().enumerate() {
            let cell_html = html_escape(cell);
            if !pinout {
                out.push_str(&format!("<td>{}</td>\n", cell_html));
                continue;
            }
            match classify_pin_cell(j, cell, &table.headers[j]) {
                PinCell::Number => {
                    out.push_str(&format!("<td><div class=\"pin-number\">{}</div></td>\n", cell_html))
                }
                PinCell::Name => out.push_str(&format!("<td class=\"pin-name\">{}</td>\n", cell_html)),
                PinCell::Function => {
                    out.push_str(&format!("<td class=\"pin-function\">{}</td>\n", cell_html))
                }
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn table_section(title: &str, table: Option<&TableBlock>, pinout: bool) -> Option<String> {
    let table = table?;
    let mut out = String::new();
    out.push_str("<div class=\"table-section\">\n");
    out.push_str(&format!("<h2 class=\"section-title\">{}</h2>\n", title));
    out.push_str(&render_table(table, pinout));
    out.push_str("</div>\n");
    Some(out)
}

fn features(items: &[Feature]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let mut out = String::new();
    out.push_str("<div class=\"features-section\">\n");
    out.push_str("<h2 class=\"section-title\">Technical Features</h2>\n");
    out.push_str("<div class=\"features-grid\">\n");
    for feature in items {
        out.push_str("<div class=\"feature-card\">\n");
        out.push_str(&format!("<div class=\"feature-title\">{}</div>\n", feature.title));
        if !feature.description.is_empty() {
            out.push_str(&format!("<div class=\"feature-desc\">{}</div>\n", feature.description));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn applications(apps: &[Application]) -> Option<String> {
    if apps.is_empty() {
        return None;
    }
    let mut out = String::new();
    out.push_str("<div class=\"applications-section\">\n");
    out.push_str("<h2 class=\"section-title\">Typical Applications</h2>\n");
    out.push_str("<div class=\"applications-grid\">\n");
    for app in apps {
        out.push_str("<div class=\"app-card\">\n");
        if let Some(ref title) = app.title {
            out.push_str(&format!("<div class=\"app-title\">{}</div>\n", html_escape(title)));
        }
        out.push_str(&format!("<div>{}</div>\n", html_escape(&app.description)));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn doc_card(file: &str, title: &str, caption: &str, pdf: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"doc-card\">\n");
    out.push_str(&format!("<div class=\"doc-title\">{}</div>\n", title.to_uppercase()));
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"topology-image\">\n",
        html_escape(file),
        title
    ));
    out.push_str(&format!("<div class=\"doc-caption\">{}</div>\n", caption));
    if let Some(pdf) = pdf {
        out.push_str(&format!(
            "<div class=\"doc-link\"><a href=\"{}\" target=\"_blank\" class=\"schematic-link\">View Complete Schematic PDF</a></div>\n",
            html_escape(pdf)
        ));
    }
    out.push_str("</div>\n");
    out
}

fn visual_documentation(assets: &AssetCatalog) -> Option<String> {
    let slots = &assets.slots;
    if slots.dimensions.is_none()
        && slots.topology.is_none()
        && slots.schematic.is_none()
        && assets.extras.is_empty()
    {
        return None;
    }

    let mut out = String::new();
    out.push_str("<div class=\"visual-content\">\n");
    out.push_str("<div class=\"section-title-major\">VISUAL DOCUMENTATION</div>\n");
    out.push_str("<div class=\"images-section\">\n");

    if let Some(ref file) = slots.dimensions {
        out.push_str("<div class=\"dimensions-section\">\n");
        out.push_str("<div class=\"section-header\">MECHANICAL DIMENSIONS</div>\n");
        out.push_str("<div class=\"dimensions-container\">\n");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Dimensions\" class=\"dimensions-image-large\">\n",
            html_escape(file)
        ));
        out.push_str("<div class=\"dimensions-caption\">Physical dimensions and mounting specifications (measurements in millimeters)</div>\n");
        out.push_str("</div>\n</div>\n");
    }

    if slots.topology.is_some() || slots.schematic.is_some() {
        out.push_str("<div class=\"additional-docs-section\">\n");
        out.push_str("<div class=\"section-header\">SUPPLEMENTARY TECHNICAL DOCUMENTATION</div>\n");
        out.push_str("<div class=\"additional-docs-grid\">\n");
        if let Some(ref file) = slots.topology {
            out.push_str(&doc_card(
                file,
                "System Topology",
                "Connection topology and system integration",
                None,
            ));
        }
        if let Some(ref file) = slots.schematic {
            out.push_str(&doc_card(
                file,
                "Circuit Schematic",
                "Detailed circuit schematic diagram",
                assets.schematic_pdf.as_deref(),
            ));
        }
        out.push_str("</div>\n</div>\n");
    }

    if !assets.extras.is_empty() {
        out.push_str("<div class=\"product-details-section\">\n");
        out.push_str("<div class=\"section-header\">ADDITIONAL PRODUCT DOCUMENTATION</div>\n");
        out.push_str("<div class=\"product-details-grid\">\n");
        for extra in &assets.extras {
            out.push_str("<div class=\"detail-card\">\n");
            out.push_str(&format!("<div class=\"detail-title\">{}</div>\n", extra.kind.title()));
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"detail-image\">\n",
                html_escape(&extra.filename),
                extra.kind.title()
            ));
            out.push_str(&format!("<div class=\"detail-caption\">{}</div>\n", extra.kind.caption()));
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n</div>\n");
    }

    out.push_str("</div>\n</div>\n");
    Some(out)
}

fn usage_downloads(sheet: &Datasheet) -> Option<String> {
    if sheet.usage.is_empty() && sheet.downloads.is_empty() {
        return None;
    }
    let mut out = String::new();
    out.push_str("<div class=\"additional-sections\">\n");
    for (title, body) in [("Usage", &sheet.usage), ("Downloads", &sheet.downloads)] {
        if body.is_empty() {
            continue;
        }
        out.push_str("<div class=\"section\">\n");
        out.push_str(&format!("<h2 class=\"section-title\">{}</h2>\n", title));
        out.push_str("<div class=\"section-content\">\n");
        out.push_str(body);
        out.push_str("\n</div>\n</div>\n");
    }
    out.push_str("</div>\n");
    Some(out)
}

fn pinout_page(slots: &AssetSlots) -> Option<String> {
    let file = slots.pinout.as_deref()?;
    let mut out = String::new();
    out.push_str("<div class=\"pinout-page\">\n");
    out.push_str("<div class=\"pinout-page-title\">PIN CONFIGURATION &amp; LAYOUT</div>\n");
    out.push_str("<div class=\"pinout-page-subtitle\">Detailed pin assignment and connector layout</div>\n");
    out.push_str("<div class=\"pinout-page-container\">\n");
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"Pin Configuration\" class=\"pinout-page-image\">\n",
        html_escape(file)
    ));
    out.push_str("</div>\n");
    out.push_str("<div class=\"pinout-page-caption\">Complete pin configuration diagram showing all connectors, pin assignments, and electrical connections for proper integration</div>\n");
    out.push_str("</div>\n");
    Some(out)
}

fn footer(sheet: &Datasheet, code: &str) -> String {
    let year = sheet.date.get(..4).unwrap_or(&sheet.date);
    let mut out = String::new();
    out.push_str("<div class=\"footer\">\n<div class=\"footer-grid\">\n");
    out.push_str(&format!(
        "<div class=\"footer-left\"><div>&copy; {} {}</div><div>Technical document automatically generated</div></div>\n",
        year,
        html_escape(&sheet.branding.company)
    ));
    out.push_str(&format!(
        "<div class=\"footer-center\"><div>{} v{}</div><div>Professional Technical Datasheet</div></div>\n",
        html_escape(code),
        html_escape(&sheet.version)
    ));
    out.push_str(&format!(
        "<div class=\"footer-right\"><div>Date: {}</div><div>For commercial distribution</div></div>\n",
        sheet.date
    ));
    out.push_str("</div>\n</div>\n");
    out
}

fn script(sheet: &Datasheet) -> String {
    let doc_title = format!(
        "{}_Professional_Datasheet_v{}_{}",
        sheet.title, sheet.version, sheet.date
    );
    let mut out = String::new();
    out.push_str("<script>\n");
    out.push_str(&format!("document.title = '{}';\n", js_escape(&doc_title)));
    out.push_str("window.addEventListener('beforeprint', () => document.body.classList.add('printing'));\n");
    out.push_str("window.addEventListener('afterprint', () => document.body.classList.remove('printing'));\n");
    out.push_str("</script>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::resolver::catalog_from_names;
    use crate::parser;

    const README: &str = "---
title: ICP-10111 Barometric Sensor
subtitle: High precision pressure module
version: 1.2
---

## Introduction
The UNIT ICP-10111 module measures barometric pressure.

It talks I²C.

## Features
- Pressure range: 30 to 110 kPa
- Qwiic connector

## Electrical Characteristics & Signal Overview
- Power supply: 3.3V to 5V
- Communication interface: I²C
- Resolution: < 1 Pa

## Pin & Connector Layout
| Pin | Name | Description |
|-----|------|-------------|
| 1 | VCC | Supply |
| 2 | GND |
| 3 | SDA | I²C data |

## Interface Overview
| A | B |
|---|---|
| x | y |

## Applications
- Weather: local forecasting
- Drones

## Usage
- Connect over Qwiic
- Run the example

## Downloads
- [Schematic](unit_sch.pdf)
";

    fn branding() -> Branding {
        Branding {
            company: "UNIT Electronics".into(),
            logo: "images/logo_unit.png".into(),
        }
    }

    fn sheet_from(readme: &str, files: &[&str]) -> Datasheet {
        let doc = Document::parse(readme, "2025-06-01".to_string());
        parser::build(&doc, catalog_from_names(files), branding())
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn header_escapes_markup_in_front_matter() {
        let readme = "---\ntitle: \"Temp & <Pressure> Board\"\nsubtitle: \"A < B\"\nversion: \"2.0\"\n---\n";
        let html = render(&sheet_from(readme, &[]));
        assert!(html.contains(
            "<h1 class=\"product-title\">Temp &amp; &lt;Pressure&gt; Board</h1>"
        ));
        assert!(html.contains("<p class=\"product-subtitle\">A &lt; B</p>"));
        assert!(html.contains("<title>Temp &amp; &lt;Pressure&gt; Board - Professional Technical Datasheet</title>"));
        assert!(!html.contains("<h1 class=\"product-title\">Temp & <"));
    }

    #[test]
    fn header_contains_front_matter() {
        let html = render(&sheet_from(README, &[]));
        assert!(html.contains("<h1 class=\"product-title\">ICP-10111 Barometric Sensor</h1>"));
        assert!(html.contains("High precision pressure module"));
        assert!(html.contains("<div class=\"version-badge\">v1.2</div>"));
        assert!(html.contains("<div class=\"product-code\">ICP</div>"));
        assert!(html.contains(STYLESHEET));
    }

    #[test]
    fn interface_table_single_row() {
        let sheet = sheet_from(README, &[]);
        let table = sheet.interface_table.as_ref().unwrap();
        let html = render_table(table, false);
        assert_eq!(count(&html, "<tr>"), 2);
        assert!(html.contains("<td>x</td>\n<td>y</td>"));
    }

    #[test]
    fn pin_table_drops_short_rows_and_classifies() {
        let html = render(&sheet_from(README, &[]));
        assert!(html.contains("PIN CONFIGURATION"));
        assert!(html.contains("<div class=\"pin-number\">1</div>"));
        assert!(html.contains("<td class=\"pin-name\">SDA</td>"));
        assert!(html.contains("<td class=\"pin-function\">I²C data</td>"));
        assert!(!html.contains(">GND<"));
    }

    #[test]
    fn key_specs_grouping_and_escaping() {
        let html = render(&sheet_from(README, &[]));
        let power = html.find("POWER SUPPLY").unwrap();
        let general = html.find("GENERAL").unwrap();
        let supply = html.find("3.3V to 5V").unwrap();
        assert!(power < supply && supply < general);
        assert!(html.contains("&lt; 1 Pa"));
        assert!(html.contains("<span class=\"spec-value\">I²C</span>"));
        assert!(html.contains("Qwiic + Pin Headers"));
        assert!(html.contains("<span class=\"spec-label\">Pressure:</span>"));
    }

    #[test]
    fn empty_blocks_omitted() {
        let html = render(&sheet_from("---\ntitle: Bare\n---\n## Features\nNo bullets here.\n", &[]));
        for absent in [
            "features-section",
            "introduction-section",
            "product-views-section",
            "key-specs",
            "table-section",
            "applications-section",
            "visual-content",
            "additional-sections",
            "pinout-page",
        ] {
            assert!(!html.contains(&format!("class=\"{}\"", absent)), "{} should be omitted", absent);
        }
        assert!(html.contains("class=\"footer\""));
    }

    #[test]
    fn block_order_is_fixed() {
        let files = [
            "unit_top.png",
            "unit_dimensions.png",
            "unit_sch.png",
            "unit_sch.pdf",
            "pinout_en.png",
        ];
        let html = render(&sheet_from(README, &files));
        let order = [
            "class=\"header\"",
            "class=\"introduction-section\"",
            "class=\"product-views-section\"",
            "class=\"key-specs\"",
            "PIN CONFIGURATION</h2>",
            "COMMUNICATION INTERFACES",
            "class=\"features-section\"",
            "class=\"applications-section\"",
            "class=\"visual-content\"",
            "class=\"additional-sections\"",
            "class=\"pinout-page\"",
            "class=\"footer\"",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {}", m)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn visual_documentation_content() {
        let files = ["unit_dimensions.png", "unit_sch.png", "unit_sch.pdf", "pcb_render.jpg"];
        let html = render(&sheet_from(README, &files));
        assert!(html.contains("MECHANICAL DIMENSIONS"));
        assert!(html.contains("<a href=\"unit_sch.pdf\" target=\"_blank\" class=\"schematic-link\">"));
        assert!(html.contains("PCB LAYOUT"));
        assert!(html.contains("src=\"pcb_render.jpg\""));
    }

    #[test]
    fn top_view_only_has_no_visual_documentation() {
        let html = render(&sheet_from(README, &["unit_top.png"]));
        assert!(html.contains("TOP VIEW"));
        assert!(!html.contains("BOTTOM VIEW"));
        assert!(!html.contains("class=\"visual-content\""));
    }

    #[test]
    fn usage_and_downloads_processed() {
        let html = render(&sheet_from(README, &[]));
        assert!(html.contains("<ul>\n<li>Connect over Qwiic</li>\n<li>Run the example</li>\n</ul>"));
        assert!(html.contains("<a href=\"unit_sch.pdf\" target=\"_blank\" class=\"inline-link\">Schematic</a>"));
    }

    #[test]
    fn footer_and_script() {
        let html = render(&sheet_from(README, &[]));
        assert!(html.contains("&copy; 2025 UNIT Electronics"));
        assert!(html.contains("<div>ICP v1.2</div>"));
        assert!(html.contains(
            "document.title = 'ICP-10111 Barometric Sensor_Professional_Datasheet_v1.2_2025-06-01';"
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        let files = ["pinout_es.jpg", "pinout_en.png", "unit_top.png", "photo.png"];
        let a = render(&sheet_from(README, &files));
        let mut reversed = files;
        reversed.reverse();
        let b = render(&sheet_from(README, &reversed));
        assert_eq!(a, b);
    }

    #[test]
    fn renderer_trait() {
        let r = HtmlRenderer;
        assert_eq!(r.file_extension(), "html");
        assert!(r.render(&sheet_from(README, &[])).starts_with("<!DOCTYPE html>"));
    }
}
