//! Grouped old-vs-new ns/op bars on a log axis.

use std::path::Path;

use plotters::{
    prelude::*,
    style::{
        text_anchor::{HPos, Pos, VPos},
        FontTransform,
    },
};

use super::{
    label_area_for, slot_label, ChartConfig, ChartKind, AXIS_DESC_FONT_SIZE, BAR_ALPHA, COLOR_NEW,
    COLOR_OLD, FONT, LEGEND_FONT_SIZE, TICK_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::{
    error::{BenchplotError, Result},
    report::Report,
    utils::display_name,
};

/// Width of one bar in slot units. The old bar sits left of the slot
/// center, the new bar right of it.
pub const BAR_WIDTH: f64 = 0.35;

/// Tick labels are turned sideways above this many benchmarks.
pub const ROTATE_LABELS_AFTER: usize = 8;

/// Gap in pixels between the x axis and the start of a sideways label.
const ROTATED_LABEL_GAP: i32 = 10;

pub fn default_config(report: &Report, output_dir: &Path) -> ChartConfig {
    let n = report.entries.len() as u32;
    ChartConfig::builder()
        .caption(format!(
            "Performance Comparison: {} vs {}",
            report.old_label, report.new_label
        ))
        .path(output_dir.join(ChartKind::Comparison.file_name()))
        .width((n * 120).max(2100))
        .height(1200)
        .build()
}

/// Centers of the old and new bars for slot `i`.
pub fn bar_centers(i: usize) -> (f64, f64) {
    let half_gap = BAR_WIDTH / 2.0;
    (i as f64 - half_gap, i as f64 + half_gap)
}

/// Lower and upper bound of the log axis. Zero timings are not drawable on
/// a log scale, so the floor comes from the smallest positive value.
pub fn log_bounds(report: &Report) -> (f64, f64) {
    let values = report
        .entries
        .iter()
        .flat_map(|e| [e.old_ns_per_op, e.new_ns_per_op]);
    let (min, max) = values.fold((f64::MAX, 0.0_f64), |(lo, hi), v| {
        let lo = if v > 0.0 { lo.min(v) } else { lo };
        (lo, hi.max(v))
    });
    if max <= 0.0 {
        return (0.1, 10.0);
    }
    (min / 2.0, max * 2.0)
}

/// Style of a sideways tick label. The anchor is the start of the text, so
/// the name hangs down from the axis instead of straddling it.
pub fn rotated_label_style() -> TextStyle<'static> {
    (FONT, TICK_FONT_SIZE)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

pub fn render(report: &Report, config: &ChartConfig) -> Result<()> {
    draw(report, config)
        .map_err(|err| BenchplotError::render(ChartKind::Comparison.name(), err))
}

fn draw(
    report: &Report,
    config: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = report.entries.iter().map(|e| display_name(&e.name)).collect();
    let n = names.len();
    let (floor, ceil) = log_bounds(report);
    let rotate = n > ROTATE_LABELS_AFTER;

    let root = BitMapBackend::new(&config.path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let x_label_area = if rotate {
        label_area_for(&names) + ROTATED_LABEL_GAP as u32 + AXIS_DESC_FONT_SIZE
    } else {
        50
    };
    let mut chart = ChartBuilder::on(&root)
        .caption(&config.caption, (FONT, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(x_label_area)
        .y_label_area_size(100)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), (floor..ceil).log_scale())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .x_labels(n + 1)
        .x_label_formatter(&|x| {
            // Sideways names are drawn below with their own anchor.
            if rotate {
                String::new()
            } else {
                slot_label(&names, *x)
            }
        })
        .x_label_style((FONT, TICK_FONT_SIZE))
        .y_label_style((FONT, TICK_FONT_SIZE))
        .x_desc("Benchmark")
        .y_desc("ns/op (lower is better)")
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .draw()?;

    if rotate {
        let style = rotated_label_style();
        for (i, name) in names.iter().enumerate() {
            let (x, y) = chart.backend_coord(&(i as f64, floor));
            root.draw(&Text::new(
                name.as_str(),
                (x, y + ROTATED_LABEL_GAP),
                style.clone(),
            ))?;
        }
    }

    let old_color = COLOR_OLD.mix(BAR_ALPHA);
    let new_color = COLOR_NEW.mix(BAR_ALPHA);

    chart
        .draw_series(
            report
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.old_ns_per_op > 0.0)
                .map(|(i, e)| {
                    let (center, _) = bar_centers(i);
                    Rectangle::new(
                        [
                            (center - BAR_WIDTH / 2.0, floor),
                            (center + BAR_WIDTH / 2.0, e.old_ns_per_op),
                        ],
                        old_color.filled(),
                    )
                }),
        )?
        .label(report.old_label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 20, y + 6)], old_color.filled())
        });

    chart
        .draw_series(
            report
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.new_ns_per_op > 0.0)
                .map(|(i, e)| {
                    let (_, center) = bar_centers(i);
                    Rectangle::new(
                        [
                            (center - BAR_WIDTH / 2.0, floor),
                            (center + BAR_WIDTH / 2.0, e.new_ns_per_op),
                        ],
                        new_color.filled(),
                    )
                }),
        )?
        .label(report.new_label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 20, y + 6)], new_color.filled())
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;
    Ok(())
}
