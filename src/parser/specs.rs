//! Electrical characteristics: `- Label: value` bullets plus a couple of
//! free-text fallbacks for supply range and consumption lines.

use crate::model::ElectricalSpecs;
use regex::Regex;
use std::sync::LazyLock;

pub const SECTION: &str = "Electrical Characteristics & Signal Overview";

static RE_SUPPLY_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9.]+V?\s*to\s*[0-9.]+V?)").unwrap());

/// Parse the electrical section text. Lines that fit no rule are ignored.
pub fn parse(section: &str) -> ElectricalSpecs {
    let mut out = ElectricalSpecs::default();

    for line in section.lines() {
        let line = line.trim();
        let lower = line.to_lowercase();

        if let Some((label, value)) = line
            .strip_prefix("- ")
            .and_then(|rest| rest.split_once(':'))
        {
            let label = label.trim();
            let value = value.trim();
            let label_lower = label.to_lowercase();
            if label_lower.contains("interface") || label_lower.contains("communication") {
                out.connectivity.interfaces = Some(value.to_string());
            } else if label_lower.contains("connector") {
                out.connectivity.connector = Some(value.to_string());
            } else {
                out.specs.insert(label, value);
            }
        } else if lower.contains("power supply") {
            if let Some(m) = RE_SUPPLY_RANGE.captures(line).and_then(|c| c.get(1)) {
                out.specs.insert("Power supply", m.as_str());
            }
        } else if lower.contains("consumption") || lower.contains("current") {
            let value = match line.split_once(':') {
                Some((_, after)) => after.trim(),
                None => line.trim_matches(|c| c == '-' || c == ' '),
            };
            out.specs.insert("Low power consumption", value);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_supply_bullet() {
        let specs = parse("- Power supply: 3.3V to 5V");
        let entries: Vec<_> = specs.specs.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Power supply");
        assert_eq!(entries[0].value, "3.3V to 5V");
        assert_eq!(specs.power().len(), 1);
        assert!(specs.general().is_empty());
    }

    #[test]
    fn routes_connectivity() {
        let specs = parse(
            "- Communication Interface: I²C (0x63)\n- Connector: Qwiic JST-SH\n- Resolution: 1 Pa",
        );
        assert_eq!(specs.connectivity.interfaces.as_deref(), Some("I²C (0x63)"));
        assert_eq!(specs.connectivity.connector.as_deref(), Some("Qwiic JST-SH"));
        assert_eq!(specs.specs.len(), 1);
        assert_eq!(specs.specs.get("Resolution"), Some("1 Pa"));
    }

    #[test]
    fn free_text_supply_range() {
        let specs = parse("Power supply from 1.8V to 3.6V regulated");
        assert_eq!(specs.specs.get("Power supply"), Some("1.8V to 3.6V"));
    }

    #[test]
    fn free_text_supply_without_range_ignored() {
        assert!(parse("Power supply is regulated").specs.is_empty());
    }

    #[test]
    fn consumption_lines() {
        let specs = parse("Current draw: 1.3 µA");
        assert_eq!(specs.specs.get("Low power consumption"), Some("1.3 µA"));

        let specs = parse("- Ultra low consumption in standby -");
        assert_eq!(
            specs.specs.get("Low power consumption"),
            Some("Ultra low consumption in standby")
        );
    }

    #[test]
    fn split_on_first_colon_only() {
        let specs = parse("- I2C address: 0x63: fixed");
        assert_eq!(specs.specs.get("I2C address"), Some("0x63: fixed"));
    }

    #[test]
    fn lines_without_rule_ignored() {
        let specs = parse("Some prose.\n- bullet without colon\n");
        assert!(specs.specs.is_empty());
        assert_eq!(specs.connectivity, Default::default());
    }
}
