/// HTML rendering for sharing a report.
///
/// Produces a self-contained `<table>` fragment: one row per statistic,
/// list values separated by `<br/>`. File names are escaped.
use super::{
    CANCELLED_NOTICE, LABEL_AVERAGE, LABEL_BIGGEST, LABEL_EXTENSIONS, LABEL_FILES, LABEL_TOTAL,
};
use crate::analysis::Report;
use crate::model::size::{format_count, format_size};
use std::fmt::Write;

pub fn render_html(report: &Report) -> String {
    let extensions = report
        .top_extensions
        .iter()
        .map(|e| format!("{} ({})", escape(&e.extension), format_count(e.count)))
        .collect::<Vec<_>>()
        .join("<br/>");
    let biggest = report
        .top_files
        .iter()
        .map(|f| format!("{} ({})", escape(f.name()), format_size(f.size_bytes())))
        .collect::<Vec<_>>()
        .join("<br/>");

    let mut out = String::from("<table>\n");
    if !report.completed {
        let _ = writeln!(out, "<caption>{CANCELLED_NOTICE}</caption>");
    }
    push_row(&mut out, LABEL_FILES, &format_count(report.total_files));
    push_row(&mut out, LABEL_TOTAL, &format_size(report.total_bytes));
    push_row(
        &mut out,
        LABEL_AVERAGE,
        &format_size(report.average_file_size_bytes),
    );
    push_row(&mut out, LABEL_EXTENSIONS, &extensions);
    push_row(&mut out, LABEL_BIGGEST, &biggest);
    out.push_str("</table>\n");
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "<tr><td>{label}</td><td>{value}</td></tr>");
}

/// Escape the characters that are significant in HTML text and attributes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
