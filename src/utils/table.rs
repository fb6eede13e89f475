/// A simple text-based table generator for terminal listings
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        // Update column widths if needed
        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                let pad = width.saturating_sub(col.chars().count());
                line.push_str(col);
                line.push_str(&" ".repeat(pad));
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Código", "Moneda"]);
        table.add_row(vec!["dolar", "Dólar observado"]);
        table.add_row(vec!["euro", "Euro"]);

        let rendered = table.render();
        assert!(rendered.contains("Código"));
        assert!(rendered.contains("dolar"));
        assert!(rendered.contains("Euro"));
    }

    #[test]
    fn test_columns_widen_to_fit_rows() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["contenido largo", "x"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        // Header line is padded to the widest cell of each column
        assert!(lines[0].ends_with("| B"));
        assert_eq!(lines[0].chars().count(), "contenido largo | B".chars().count());
    }
}
