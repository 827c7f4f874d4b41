//! Bullet-list sections: Features, key sensing features, Applications.

use crate::inline;
use crate::model::{Application, Feature, SpecTable};

pub const FEATURES_SECTION: &str = "Features";
pub const APPLICATIONS_SECTION: &str = "Applications";

/// Labels that describe connectivity or packaging, not sensing.
const KEY_FEATURE_EXCLUDES: &[&str] = &["interface", "connector", "form", "factor"];

pub fn parse_features(section: &str) -> Vec<Feature> {
    section
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|rest| {
            let cleaned = inline::strip_emoji(rest);
            let cleaned = cleaned.trim();
            match cleaned.split_once(':') {
                Some((title, desc)) => Feature {
                    title: inline::convert_links(title.trim()),
                    description: inline::convert_links(desc.trim()),
                },
                None => Feature {
                    title: inline::convert_links(cleaned),
                    description: String::new(),
                },
            }
        })
        .collect()
}

/// Compact summary of the sensing dimensions named in the Features section.
pub fn parse_key_features(section: &str) -> SpecTable {
    let mut out = SpecTable::default();

    for line in section.lines() {
        let Some((label, value)) = line
            .trim()
            .strip_prefix("- ")
            .and_then(|rest| rest.split_once(':'))
        else {
            continue;
        };
        let label = label.trim().to_lowercase();
        let value = value.trim();

        if KEY_FEATURE_EXCLUDES.iter().any(|w| label.contains(w)) {
            continue;
        }

        let key = if label.contains("temperature") {
            "Temperature"
        } else if label.contains("humidity") {
            "Humidity"
        } else if label.contains("pressure") || label.contains("barometric") {
            "Pressure"
        } else if label.contains("voc") || label.contains("gas") || label.contains("air quality") {
            "Gas Detection"
        } else {
            continue;
        };
        out.insert(key, value);
    }

    out
}

pub fn parse_applications(section: &str) -> Vec<Application> {
    section
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|app| {
            let app = app.trim();
            match app.split_once(':') {
                Some((title, desc)) => Application {
                    title: Some(title.trim().to_string()),
                    description: desc.trim().to_string(),
                },
                None => Application {
                    title: None,
                    description: app.to_string(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_with_and_without_description() {
        let features = parse_features("- 🌡️ High accuracy: ±1 Pa\n- Qwiic compatible\nnot a bullet");
        assert_eq!(
            features,
            vec![
                Feature {
                    title: "High accuracy".into(),
                    description: "±1 Pa".into()
                },
                Feature {
                    title: "Qwiic compatible".into(),
                    description: String::new()
                },
            ]
        );
    }

    #[test]
    fn no_bullets_no_features() {
        assert!(parse_features("Just prose about the board.").is_empty());
        assert!(parse_features("").is_empty());
    }

    #[test]
    fn feature_links_become_anchors() {
        let f = parse_features("- Docs: see [guide](guide.html)");
        assert_eq!(f[0].title, "Docs");
        assert!(f[0].description.contains(r#"<a href="guide.html""#));
    }

    #[test]
    fn key_features_map_known_dimensions() {
        let kf = parse_key_features(
            "- Barometric pressure range: 30 to 110 kPa\n\
             - Temperature accuracy: ±0.4 °C\n\
             - Relative humidity: 0-100 %RH\n\
             - VOC index: 1-500\n\
             - Interface pressure port: none\n\
             - Form factor: 25x25 mm\n\
             - Low noise: 0.4 Pa",
        );
        let pairs: Vec<_> = kf.iter().map(|e| (e.label.as_str(), e.value.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("Pressure", "30 to 110 kPa"),
                ("Temperature", "±0.4 °C"),
                ("Humidity", "0-100 %RH"),
                ("Gas Detection", "1-500"),
            ]
        );
    }

    #[test]
    fn applications_title_optional() {
        let apps = parse_applications("- Weather stations: local forecasting\n- Drones\n-Altimeter");
        assert_eq!(apps[0].title.as_deref(), Some("Weather stations"));
        assert_eq!(apps[0].description, "local forecasting");
        assert_eq!(apps[1].title, None);
        assert_eq!(apps[1].description, "Drones");
        assert_eq!(apps.len(), 2);
    }
}
