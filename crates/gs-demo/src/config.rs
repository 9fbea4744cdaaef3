/// Geometry of the simulated grid.
///
/// Defaults match the demo page: 25 columns of 200 px and 1000 rows below a
/// header row and a filter row.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub columns: usize,
    pub column_width: f64,
    pub rows: usize,
    pub header_rows: usize,
    pub row_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            columns: 25,
            column_width: 200.0,
            rows: 1000,
            header_rows: 2,
            row_height: 36.0,
            viewport_width: 1280.0,
            viewport_height: 400.0,
        }
    }
}

impl DemoConfig {
    /// Largest reachable `(left, top)` offsets of the scroll container.
    pub fn max_scroll(&self) -> (f64, f64) {
        let content_width = self.columns as f64 * self.column_width;
        let content_height = (self.rows + self.header_rows) as f64 * self.row_height;
        (
            (content_width - self.viewport_width).max(0.0),
            (content_height - self.viewport_height).max(0.0),
        )
    }
}
