use std::fmt::Write as _;

use crate::stats::{total_count, Record};

/// Owned render surface for the text visualizations.
///
/// One buffer, cleared before every render, so each analysis replaces the
/// previous drawing instead of accumulating output.
#[derive(Debug, Default)]
pub struct Renderer {
    buf: String,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer::default()
    }

    /// Horizontal bar chart of relative abundance, one bar per record in
    /// input order. Bar length is proportional to count/total.
    pub fn render_abundance_chart(&mut self, records: &[Record], width: usize) -> &str {
        self.buf.clear();

        let total = total_count(records);
        if total == 0 {
            return &self.buf;
        }

        let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for record in records {
            let p = record.count as f64 / total as f64;
            let bar_len = (p * width as f64).round() as usize;
            let _ = writeln!(
                self.buf,
                "{:<name_width$} | {:<width$} {:>5.1}%",
                record.name,
                "#".repeat(bar_len),
                p * 100.0,
            );
        }

        &self.buf
    }

    /// Single-level hierarchy: a synthetic root with one leaf per record.
    pub fn render_tree(&mut self, root_label: &str, records: &[Record]) -> &str {
        self.buf.clear();

        let _ = writeln!(self.buf, "{root_label}");
        for (i, record) in records.iter().enumerate() {
            let branch = if i + 1 == records.len() {
                "└──"
            } else {
                "├──"
            };
            let _ = writeln!(self.buf, "{branch} {}", record.name);
        }

        &self.buf
    }
}
