//! Charts for old-vs-new benchmark comparison reports.
//!
//! A [`Report`] is loaded once and handed to four independent renderers:
//! grouped ns/op bars, sorted percent-change bars, allocation panels and a
//! per-category rollup. Each writes one PNG into the output directory.

use std::path::{Path, PathBuf};

pub mod chart;
pub mod error;
pub mod macros;
pub mod report;
pub mod summary;
pub mod utils;

pub use chart::{render_all, RenderOptions};
pub use error::{BenchplotError, Result};
pub use report::{Entry, Report, Summary};

/// Load `report_path`, draw every chart and print the summary block.
///
/// Nothing is written when the report is missing, malformed, empty or when
/// no font is available for chart text.
pub fn run(report_path: &Path, options: &RenderOptions) -> Result<Vec<PathBuf>> {
    let report = Report::load(report_path)?;
    print_if!(
        options.verbose,
        "Loaded {} entries ({} vs {}) from {}",
        report.entries.len(),
        report.old_label,
        report.new_label,
        report_path.display()
    );

    let written = render_all(&report, options)?;
    summary::print_summary(&report, &options.output_dir);
    Ok(written)
}

pub mod prelude {
    pub use crate::chart::{
        category::{category_rollup, CategoryAggregate},
        change_color, render_all, ChangeClass, ChartConfig, ChartKind, RenderOptions,
    };
    pub use crate::error::{BenchplotError, Result};
    pub use crate::report::{Entry, Report, Summary};
    pub use crate::run;
}
