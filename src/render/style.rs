//! Embedded stylesheet for the datasheet page: A4 layout and print pagination.

pub const STYLESHEET: &str = r#"
@page {
    size: A4;
    margin: 20mm 15mm;
    @bottom-center {
        content: "Page " counter(page) " of " counter(pages);
        font-size: 9pt;
        color: #999;
    }
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: 'Roboto', 'Segoe UI', 'Arial', sans-serif;
    line-height: 1.6;
    color: #1a1a1a;
    font-size: 11pt;
    background: white;
}

.container { max-width: 210mm; margin: 0 auto; }

/* header */
.header { padding: 20px 30px; color: #374151; border-bottom: 3px solid #1f2937; }
.header-grid { display: grid; grid-template-columns: auto 1fr auto; align-items: center; gap: 20px; }
.company-logo { width: 120px; height: 75px; object-fit: contain; }
.product-title-section { text-align: center; }
.product-code {
    display: inline-block;
    font-size: 14pt;
    font-weight: bold;
    color: #1f2937;
    padding: 4px 12px;
    border: 2px solid #1f2937;
    border-radius: 15px;
    margin-bottom: 8px;
}
.product-title { font-size: 22pt; font-weight: 700; color: #111827; }
.product-subtitle { font-size: 12pt; color: #4b5563; }
.version-section { text-align: right; font-size: 9pt; color: #4b5563; }
.version-badge {
    display: inline-block;
    background: #1f2937;
    color: white;
    padding: 2px 10px;
    border-radius: 10px;
    font-weight: bold;
}

.section-title {
    font-size: 14pt;
    font-weight: 700;
    color: #1f2937;
    text-transform: uppercase;
    border-left: 4px solid #1f2937;
    padding-left: 10px;
    margin: 24px 0 12px;
    page-break-after: avoid;
}
.section-title-major {
    font-size: 18pt;
    font-weight: 800;
    text-align: center;
    color: #111827;
    margin: 30px 0 20px;
}
.section-header { font-size: 12pt; font-weight: 700; color: #374151; margin: 18px 0 10px; }

/* introduction */
.introduction-section { padding: 0 30px; }
.introduction-content p { margin: 8px 0; text-align: justify; }

/* product views */
.product-views-section { padding: 0 30px; page-break-inside: avoid; }
.product-views-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; }
.view-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; text-align: center; }
.view-title { font-weight: 700; font-size: 10pt; color: #374151; margin-bottom: 8px; }
.product-view-image { max-width: 100%; max-height: 220px; object-fit: contain; }
.view-caption { font-size: 9pt; color: #6b7280; margin-top: 6px; }

/* key specifications */
.key-specs {
    margin: 20px 30px;
    padding: 16px 20px;
    background: #f9fafb;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    page-break-inside: avoid;
}
.specs-title { font-weight: 800; font-size: 12pt; color: #1f2937; margin-bottom: 12px; }
.specs-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.spec-group h4 { font-size: 10pt; color: #374151; border-bottom: 1px solid #d1d5db; margin-bottom: 6px; }
.spec-item { display: flex; justify-content: space-between; gap: 8px; font-size: 10pt; padding: 2px 0; }
.spec-label { color: #4b5563; }
.spec-value { font-weight: 600; text-align: right; }

/* tables */
.table-section { padding: 0 30px; page-break-inside: avoid; }
.professional-table { width: 100%; border-collapse: collapse; font-size: 10pt; }
.professional-table th {
    background: #1f2937;
    color: white;
    text-align: left;
    padding: 8px 10px;
}
.professional-table td { padding: 6px 10px; border-bottom: 1px solid #e5e7eb; }
.professional-table tr:nth-child(even) td { background: #f9fafb; }
.professional-table tr { page-break-inside: avoid; }
.pin-number {
    display: inline-block;
    min-width: 28px;
    text-align: center;
    background: #374151;
    color: white;
    border-radius: 12px;
    padding: 1px 8px;
    font-weight: bold;
}
.pin-name { font-family: 'Courier New', monospace; font-weight: bold; color: #111827; }
.pin-function { color: #374151; }

/* features and applications */
.features-section, .applications-section { padding: 0 30px; }
.features-grid, .applications-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.feature-card, .app-card {
    border: 1px solid #e5e7eb;
    border-left: 3px solid #374151;
    border-radius: 6px;
    padding: 10px 12px;
    page-break-inside: avoid;
}
.feature-title, .app-title { font-weight: 700; color: #1f2937; }
.feature-desc { font-size: 10pt; color: #4b5563; }

/* visual documentation */
.visual-content { padding: 0 30px; page-break-before: always; }
.dimensions-section { page-break-inside: avoid; }
.dimensions-container { text-align: center; }
.dimensions-image-large { max-width: 100%; max-height: 180mm; object-fit: contain; }
.dimensions-caption, .doc-caption, .detail-caption { font-size: 9pt; color: #6b7280; margin-top: 6px; }
.additional-docs-grid, .product-details-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.doc-card, .detail-card {
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 12px;
    text-align: center;
    page-break-inside: avoid;
}
.doc-title, .detail-title { font-weight: 700; font-size: 10pt; margin-bottom: 8px; }
.topology-image, .detail-image { max-width: 100%; max-height: 120mm; object-fit: contain; }
.doc-link { margin-top: 10px; }
.schematic-link {
    display: inline-block;
    padding: 6px 14px;
    background: #374151;
    color: white;
    text-decoration: none;
    border-radius: 6px;
    font-size: 9pt;
}
.schematic-link:hover { background: white; color: #374151; box-shadow: 0 2px 8px rgba(0,0,0,0.15); }

/* usage and downloads */
.additional-sections { padding: 0 30px; }
.section-content p { margin: 8px 0; color: #374151; }
.section-content ul { margin: 8px 0; padding-left: 20px; }
.section-content li { color: #374151; font-size: 11pt; }
.inline-link { color: #374151; text-decoration: underline; }

/* standalone pinout page */
.pinout-page { page-break-before: always; page-break-inside: avoid; padding: 20px 30px; text-align: center; }
.pinout-page-title { font-size: 18pt; font-weight: 800; color: #111827; }
.pinout-page-subtitle { font-size: 11pt; color: #4b5563; margin-bottom: 16px; }
.pinout-page-image { max-width: 100%; max-height: 220mm; object-fit: contain; }
.pinout-page-caption { font-size: 9pt; color: #6b7280; margin-top: 10px; }

/* footer */
.footer { margin-top: 30px; padding: 14px 30px; border-top: 2px solid #1f2937; font-size: 8pt; color: #6b7280; }
.footer-grid { display: grid; grid-template-columns: 1fr 1fr 1fr; }
.footer-center { text-align: center; }
.footer-right { text-align: right; }

.download-button {
    position: fixed;
    top: 20px;
    right: 20px;
    background: #1f2937;
    color: white;
    padding: 10px 18px;
    border-radius: 6px;
    text-decoration: none;
    font-weight: bold;
    z-index: 10;
}

@media print {
    .no-print { display: none !important; }
    body { font-size: 10pt; }
    .header { page-break-after: avoid; }
    .key-specs, .table-section, .feature-card, .app-card { page-break-inside: avoid; }
    .features-section { page-break-before: auto; }
}
"#;
