/// Plain-text table rendering.
use super::{
    CANCELLED_NOTICE, LABEL_AVERAGE, LABEL_BIGGEST, LABEL_EXTENSIONS, LABEL_FILES, LABEL_TOTAL,
};
use crate::analysis::Report;
use crate::model::size::{format_count, format_size};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render `report` as a borderless two-column table.
///
/// Multi-valued rows (extensions, biggest files) put one item per line
/// inside a single cell. Empty lists show a dash.
pub fn render_table(report: &Report) -> String {
    let extensions = list_cell(
        report
            .top_extensions
            .iter()
            .map(|e| format!("{} ({})", e.extension, format_count(e.count))),
    );
    let biggest = list_cell(
        report
            .top_files
            .iter()
            .map(|f| format!("{} ({})", f.name(), format_size(f.size_bytes()))),
    );

    let mut builder = Builder::default();
    builder.push_record([LABEL_FILES.to_string(), format_count(report.total_files)]);
    builder.push_record([LABEL_TOTAL.to_string(), format_size(report.total_bytes)]);
    builder.push_record([
        LABEL_AVERAGE.to_string(),
        format_size(report.average_file_size_bytes),
    ]);
    builder.push_record([LABEL_EXTENSIONS.to_string(), extensions]);
    builder.push_record([LABEL_BIGGEST.to_string(), biggest]);

    let mut table = builder.build();
    table.with(Style::blank());

    let mut out = String::new();
    if !report.completed {
        out.push_str(CANCELLED_NOTICE);
        out.push('\n');
    }
    out.push_str(&table.to_string());
    out.push('\n');
    out
}

fn list_cell(items: impl Iterator<Item = String>) -> String {
    let joined = items.collect::<Vec<_>>().join("\n");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
