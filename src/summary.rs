use std::path::Path;

use prettytable::{format, row, Table};

use crate::{report::Report, utils::format_signed_pct};

/// Build the summary block printed after the charts.
///
/// The four counters are always present; the optional generator fields
/// are appended when the report carries them.
pub fn summary_table(report: &Report) -> Table {
    let summary = &report.summary;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row![
        format!("{} wins:", report.new_label),
        summary.new_wins
    ]);
    table.add_row(row![
        format!("{} wins:", report.old_label),
        summary.old_wins
    ]);
    table.add_row(row!["Ties:", summary.ties]);
    table.add_row(row![
        "Avg change:",
        format_signed_pct(summary.avg_ns_per_op_change_pct, 2)
    ]);

    if let Some(total) = summary.total_benchmarks {
        table.add_row(row!["Benchmarks:", total]);
    }
    if let Some(bytes) = summary.avg_bytes_change_pct {
        table.add_row(row!["Avg B/op change:", format_signed_pct(bytes, 2)]);
    }
    if let Some(allocs) = summary.avg_allocs_change_pct {
        table.add_row(row!["Avg allocs/op change:", format_signed_pct(allocs, 2)]);
    }
    if let (Some(pct), Some(bench)) = (
        summary.max_improvement_pct,
        summary.max_improvement_bench.as_deref(),
    ) {
        table.add_row(row![
            "Best improvement:",
            format!("{} ({bench})", format_signed_pct(pct, 2))
        ]);
    }
    if let (Some(pct), Some(bench)) = (
        summary.max_regression_pct,
        summary.max_regression_bench.as_deref(),
    ) {
        table.add_row(row![
            "Worst regression:",
            format!("{} ({bench})", format_signed_pct(pct, 2))
        ]);
    }

    table
}

/// Print where the charts went, followed by the report's summary counters.
pub fn print_summary(report: &Report, output_dir: &Path) {
    println!();
    println!("All charts saved to: {}/", output_dir.display());
    println!();
    println!("Summary:");
    summary_table(report).printstd();
}
