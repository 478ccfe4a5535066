//! Command-line application helpers.
//!
//! This module provides domain input collection and the report rendering used
//! by the `dmarc_checker` binary.

mod input;
mod report;

// Re-export public API
pub use input::collect_domains;
pub use report::{render_bulk_report, render_domain_report, JsonRow, ReportOptions};
