//! Served pages
//!
//! Each page is a skeleton file with `__{{KEY}}__` placeholders plus a
//! builder that derives the page's variables from the [`TelemetryStore`].
//!
//! [`TelemetryStore`]: crate::storage::TelemetryStore

extern crate alloc;
use alloc::string::{String, ToString};

pub mod graph;
pub mod home;
pub mod page_manager;
pub mod storage_tank;
pub mod template;

pub use graph::graph_variables;
pub use home::home_variables;
pub use page_manager::{PageId, PageManager};
pub use storage_tank::storage_variables;
pub use template::{
    PLACEHOLDER_BEGIN, PLACEHOLDER_END, Placeholder, TemplateVariables, assemble_page,
    fill_template, placeholders,
};

/// Shown in place of a channel that has not reported yet
pub const NO_READING: &str = "--";

/// Text form of a channel's latest value
pub fn format_reading(value: Option<f32>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from(NO_READING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(Some(55.0)), "55");
        assert_eq!(format_reading(Some(-3.5)), "-3.5");
        assert_eq!(format_reading(None), "--");
    }
}
