//! License template with year substitution

use chrono::Datelike;

use crate::constants::layout::YEAR_PLACEHOLDER;

/// License block placed at the top of aggregate and forward headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    text: String,
}

impl HeaderTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace every `{year}` placeholder
    pub fn render(&self, year: i32) -> String {
        self.text.replace(YEAR_PLACEHOLDER, &year.to_string())
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
