use std::path::{Path, PathBuf};

/// Token every Go benchmark name starts with.
pub const BENCHMARK_PREFIX: &str = "Benchmark";

/// Name of the directory charts are written to, next to the report.
pub const CHARTS_DIR: &str = "charts";

/// Benchmark name as shown on an axis: `BenchmarkFooBar` becomes `FooBar`,
/// names without the prefix are kept as they are.
pub fn display_name(name: &str) -> String {
    name.strip_prefix(BENCHMARK_PREFIX).unwrap_or(name).to_string()
}

/// Percentage with an explicit sign, e.g. `+3.2%` or `-0.05%`.
pub fn format_signed_pct(value: f64, decimals: usize) -> String {
    format!("{value:+.decimals$}%")
}

/// `<dir of report>/charts`. A bare file name resolves to `charts` in the
/// working directory.
pub fn charts_dir_for(report_path: &Path) -> PathBuf {
    report_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CHARTS_DIR)
}
