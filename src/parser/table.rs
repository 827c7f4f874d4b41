//! Markdown pipe tables.

use crate::model::TableBlock;

pub const PINOUT_SECTION: &str = "Pin & Connector Layout";
pub const INTERFACE_SECTION: &str = "Interface Overview";

fn split_cells(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|c| c.trim().to_string())
        .collect()
}

/// Parse the first pipe table in `section`.
///
/// Returns `None` unless at least one data row has the header's cell count;
/// rows with any other count are dropped.
pub fn parse(section: &str) -> Option<TableBlock> {
    let lines: Vec<&str> = section
        .lines()
        .skip_while(|l| !l.contains('|'))
        .take_while(|l| l.contains('|'))
        .collect();
    if lines.len() < 2 {
        return None;
    }

    let headers = split_cells(lines[0]);
    let rows: Vec<Vec<String>> = lines[2..]
        .iter()
        .map(|l| split_cells(l))
        .filter(|row| row.len() == headers.len())
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(TableBlock { headers, rows })
}

/// How a pinout cell is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCell {
    Number,
    Name,
    Function,
}

/// Classify a pinout cell by column and content.
pub fn classify_pin_cell(column: usize, cell: &str, header: &str) -> PinCell {
    let is_number = !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit());
    if column == 0 && (is_number || cell.to_lowercase().contains("pin")) {
        PinCell::Number
    } else if column == 1 || header.to_lowercase().contains("pin") {
        PinCell::Name
    } else {
        PinCell::Function
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_table() {
        let t = parse("| A | B |\n|---|---|\n| x | y |").unwrap();
        assert_eq!(t.headers, ["A", "B"]);
        assert_eq!(t.rows, vec![vec!["x".to_string(), "y".to_string()]]);
    }

    #[test]
    fn mismatched_rows_dropped() {
        let t = parse("| A | B |\n|---|---|\n| x | y | z |\n| 1 | 2 |\n| only |").unwrap();
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0], ["1", "2"]);
    }

    #[test]
    fn header_only_is_none() {
        assert_eq!(parse("| A | B |\n|---|---|"), None);
        assert_eq!(parse("| A | B |"), None);
        assert_eq!(parse("| A | B |\n|---|---|\n| bad |"), None);
    }

    #[test]
    fn no_table_is_none() {
        assert_eq!(parse("prose only"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn table_after_prose_and_only_first_block() {
        let section = "The header pins:\n\n| Pin | Name |\n|--|--|\n| 1 | VCC |\n\n| X | Y |\n|--|--|\n| a | b |";
        let t = parse(section).unwrap();
        assert_eq!(t.headers, ["Pin", "Name"]);
        assert_eq!(t.rows, vec![vec!["1".to_string(), "VCC".to_string()]]);
    }

    #[test]
    fn row_count_never_grows() {
        let section = "| A | B |\n|---|---|\n| 1 | 2 |\n| 3 |\n| 4 | 5 |";
        let input_rows = section.lines().count() - 2;
        let t = parse(section).unwrap();
        assert!(t.rows.len() <= input_rows);
    }

    #[test]
    fn pin_cell_classes() {
        assert_eq!(classify_pin_cell(0, "1", "Pin"), PinCell::Number);
        assert_eq!(classify_pin_cell(0, "Pin 3", "#"), PinCell::Number);
        assert_eq!(classify_pin_cell(0, "VCC", "Signal"), PinCell::Function);
        assert_eq!(classify_pin_cell(1, "SDA", "Name"), PinCell::Name);
        assert_eq!(classify_pin_cell(2, "GPIO4", "Board pin"), PinCell::Name);
        assert_eq!(classify_pin_cell(2, "I²C data", "Description"), PinCell::Function);
    }
}
