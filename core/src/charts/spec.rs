use serde::{Deserialize, Serialize};

/// Rendering style requested from the charting collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Area,
    Pie,
    Bar,
}

/// One row of the two-column table backing a chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

/// Ordered tabular data plus display metadata, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub rows: Vec<ChartRow>,
}

impl ChartSpec {
    pub fn from_table(
        kind: ChartKind,
        title: &str,
        x_label: &str,
        y_label: &str,
        table: &[(&str, f64)],
    ) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            rows: table
                .iter()
                .map(|(label, value)| ChartRow {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    pub fn max_value(&self) -> f64 {
        self.rows.iter().map(|row| row.value).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_table_preserves_row_order() {
        let spec = ChartSpec::from_table(
            ChartKind::Bar,
            "title",
            "x",
            "y",
            &[("a", 1.0), ("b", 3.0), ("c", 2.0)],
        );
        assert_eq!(spec.rows.len(), 3);
        assert_eq!(spec.rows[1].label, "b");
        assert_eq!(spec.total(), 6.0);
        assert_eq!(spec.max_value(), 3.0);
    }
}
