use std::fs::File;

use anyhow::{Context, Result};
use csv::Writer;
use tracing::*;

/// One output row: the same ring at five levels of specificity.
///
/// Field order doubles as the column order, and the derived ordering gives
/// the left-to-right lexicographic row sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryRow {
    pub layer1_smarts: String,
    pub layer2_smarts: String,
    pub layer3_smarts: String,
    pub layer4_smarts: String,
    pub layer5_smarts: String,
}

pub const CSV_HEADER: [&str; 5] = [
    "layer1_smarts",
    "layer2_smarts",
    "layer3_smarts",
    "layer4_smarts",
    "layer5_smarts",
];

/// Renders the library as CSV text.
pub fn library_to_csv(rows: &[LibraryRow]) -> Result<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    write_rows(&mut wtr, rows)?;
    let bytes = wtr.into_inner().context("Failed to flush CSV buffer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Writes the library to a CSV file at `path`.
pub fn write_library_csv(rows: &[LibraryRow], path: &str) -> Result<()> {
    let file = File::create(path).context(format!("Failed to create {path}"))?;
    let mut wtr = Writer::from_writer(file);
    write_rows(&mut wtr, rows)?;
    // Ensure all data is flushed to disk.
    wtr.flush()?;
    info!("Wrote {} library rows to {}", rows.len(), path);
    Ok(())
}

fn write_rows<W: std::io::Write>(wtr: &mut Writer<W>, rows: &[LibraryRow]) -> Result<()> {
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record([
            &row.layer1_smarts,
            &row.layer2_smarts,
            &row.layer3_smarts,
            &row.layer4_smarts,
            &row.layer5_smarts,
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(layer2: &str, layer5: &str) -> LibraryRow {
        LibraryRow {
            layer1_smarts: "[a:1]1:a:a:a:a:1".to_string(),
            layer2_smarts: layer2.to_string(),
            layer3_smarts: "l3".to_string(),
            layer4_smarts: "l4".to_string(),
            layer5_smarts: layer5.to_string(),
        }
    }

    #[test]
    fn test_csv_header_and_shape() {
        let rows = vec![row("a", "x"), row("b", "y")];
        let csv = library_to_csv(&rows).expect("render failed");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("layer1_smarts,layer2_smarts,layer3_smarts,layer4_smarts,layer5_smarts")
        );
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let rows = vec![row("l2", "[#6]([CH3,CH2])")];
        let csv = library_to_csv(&rows).expect("render failed");
        assert!(csv.contains("\"[#6]([CH3,CH2])\""), "got {csv}");
    }

    #[test]
    fn test_rows_sort_by_columns_left_to_right() {
        let mut rows = vec![row("b", "a"), row("a", "z"), row("a", "b")];
        rows.sort();
        assert_eq!(rows[0], row("a", "b"));
        assert_eq!(rows[1], row("a", "z"));
        assert_eq!(rows[2], row("b", "a"));
    }
}
