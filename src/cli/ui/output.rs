use console::style;

use crate::pipeline::RunSummary;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Labelled count, right-aligned
    pub fn count(&self, label: &str, value: usize) {
        println!("  {:<20} {:>6}", label, style(value).cyan());
    }

    pub fn summary(&self, summary: &RunSummary) {
        self.section("Generated headers");
        self.count("Headers scanned", summary.headers_scanned);
        self.count("Aggregate headers", summary.aggregate_headers);
        self.count("Redirect headers", summary.redirect_headers);
        self.count("Forward headers", summary.forward_headers);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
