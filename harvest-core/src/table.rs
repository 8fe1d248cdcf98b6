//! Column-aligned text tables
//!
//! Each column is as wide as its widest cell or header label. Cells are
//! padded to that width and joined with [`COLUMN_SEPARATOR`]; the header is
//! followed by a dashed rule of the same length.

use crate::planting::HarvestRecord;

/// Text placed between adjacent columns
pub const COLUMN_SEPARATOR: &str = " | ";

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub align: Align,
}

impl Column {
    pub fn new(label: impl Into<String>, align: Align) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// A table of string cells
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render as empty strings.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display width of each column, in characters
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell.as_str()))
                    .fold(display_width(&column.label), usize::max)
            })
            .collect()
    }

    /// Render header, separator and rows. An empty table renders nothing.
    pub fn render(&self) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }

        let widths = self.column_widths();
        let header = self.format_line(self.columns.iter().map(|c| c.label.as_str()), &widths);
        let separator = "-".repeat(display_width(&header));

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(header);
        lines.push(separator);
        for row in &self.rows {
            let cells = (0..self.columns.len()).map(|i| row.get(i).map_or("", String::as_str));
            lines.push(self.format_line(cells, &widths));
        }
        lines
    }

    fn format_line<'a>(&self, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
        cells
            .zip(&self.columns)
            .zip(widths)
            .map(|((cell, column), &width)| pad(cell, width, column.align))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{cell:<width$}"),
        Align::Right => format!("{cell:>width$}"),
    }
}

/// Column set for a harvest schedule
pub fn schedule_columns() -> Vec<Column> {
    vec![
        Column::new("Crop", Align::Left),
        Column::new("Plant Date", Align::Left),
        Column::new("DTM (Days)", Align::Right),
        Column::new("Estimated Harvest", Align::Left),
    ]
}

/// Build the schedule table for a list of harvest records
pub fn schedule_table(harvests: &[HarvestRecord]) -> Table {
    let mut table = Table::new(schedule_columns());
    for harvest in harvests {
        table.push_row(vec![
            harvest.crop.clone(),
            harvest.plant_date.clone(),
            harvest.dtm.to_string(),
            harvest.harvest_date.clone(),
        ]);
    }
    table
}

/// Render harvest records as schedule table lines
pub fn render_schedule(harvests: &[HarvestRecord]) -> Vec<String> {
    schedule_table(harvests).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harvest(crop: &str, plant_date: &str, dtm: i64, harvest_date: &str) -> HarvestRecord {
        HarvestRecord {
            crop: crop.to_string(),
            plant_date: plant_date.to_string(),
            dtm,
            harvest_date: harvest_date.to_string(),
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert!(render_schedule(&[]).is_empty());
    }

    #[test]
    fn test_render_schedule_layout() {
        let lines = render_schedule(&[
            harvest("Lettuce (Batch 1)", "2025-05-01", 45, "2025-06-15"),
            harvest("Radishes", "2025-05-10", 30, "2025-06-09"),
        ]);

        assert_eq!(
            lines,
            vec![
                "Crop              | Plant Date | DTM (Days) | Estimated Harvest".to_string(),
                "-".repeat(63),
                "Lettuce (Batch 1) | 2025-05-01 |         45 | 2025-06-15       ".to_string(),
                "Radishes          | 2025-05-10 |         30 | 2025-06-09       ".to_string(),
            ]
        );
    }

    #[test]
    fn test_header_label_sets_minimum_width() {
        let table = schedule_table(&[harvest("Kale", "2025-05-01", 5, "2025-05-06")]);
        assert_eq!(table.column_widths(), vec![4, 10, 10, 17]);
    }

    #[test]
    fn test_long_cell_widens_column() {
        let table = schedule_table(&[harvest("A", "2025-05-01", 123_456_789_012, "x")]);
        assert_eq!(table.column_widths()[2], 12);

        let lines = table.render();
        assert!(lines[2].contains(" | 123456789012 | "));
        assert!(lines[0].contains(" |   DTM (Days) | "));
    }

    #[test]
    fn test_no_ragged_columns() {
        let lines = render_schedule(&[
            harvest("Winter Squash", "2025-06-01", 90, "2025-08-30"),
            harvest("Å", "2025-06-01", -3, "2025-05-29"),
            harvest("Carrots", "2025-05-05", 60, "2025-07-04"),
        ]);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));

        for line in lines.iter().skip(2) {
            let cells: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
            assert_eq!(cells.len(), 4);
            assert_eq!(cells[0].chars().count(), 13);
            assert_eq!(cells[2].chars().count(), 10);
        }
    }

    #[test]
    fn test_separator_matches_header_length() {
        let lines = render_schedule(&[harvest("Beans", "2025-05-20", 55, "2025-07-14")]);
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_table_without_rows_is_empty() {
        let mut table = schedule_table(&[]);
        assert!(table.is_empty());
        assert!(table.render().is_empty());

        table.push_row(vec!["Kale".to_string()]);
        assert!(!table.is_empty());
        assert_eq!(table.render().len(), 3);
    }

    #[test]
    fn test_short_row_pads_missing_cells() {
        let mut table = Table::new(vec![
            Column::new("Name", Align::Left),
            Column::new("Count", Align::Right),
        ]);
        table.push_row(vec!["only".to_string()]);
        assert_eq!(table.render()[2], "only |      ");
    }
}
