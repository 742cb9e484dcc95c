/// Machine-readable exports: JSON and CSV.
use crate::analysis::Report;
use crate::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON with the report's fields in declaration order.
pub fn to_json(report: &Report) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One CSV row. `kind` is `file` (value = size in bytes) or `extension`
/// (value = occurrence count); `rank` starts at 1 within each kind.
#[derive(Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    rank: usize,
    name: &'a str,
    value: u64,
}

/// Write the top files followed by the top extensions as CSV.
///
/// The header row is always written, even when both lists are empty.
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["kind", "rank", "name", "value"])?;

    for (i, file) in report.top_files.iter().enumerate() {
        csv_writer.serialize(CsvRow {
            kind: "file",
            rank: i + 1,
            name: file.name(),
            value: file.size_bytes(),
        })?;
    }
    for (i, ext) in report.top_extensions.iter().enumerate() {
        csv_writer.serialize(CsvRow {
            kind: "extension",
            rank: i + 1,
            name: &ext.extension,
            value: ext.count,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScanAggregate;

    fn sample() -> Report {
        let mut agg = ScanAggregate::new();
        agg.observe("a.txt", 100);
        agg.observe("b,c.txt", 200);
        agg.observe("d", 50);
        agg.finalize(false)
    }

    #[test]
    fn json_has_every_field() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_files"], 3);
        assert_eq!(value["total_bytes"], 350);
        assert_eq!(value["average_file_size_bytes"], 116);
        assert_eq!(value["top_files"][0]["name"], "b,c.txt");
        assert_eq!(value["top_files"][0]["size_bytes"], 200);
        assert_eq!(value["top_extensions"][0]["extension"], ".txt");
        assert_eq!(value["top_extensions"][0]["count"], 2);
        assert_eq!(value["completed"], false);
    }

    #[test]
    fn csv_rows_with_header() {
        let mut buf = Vec::new();
        write_csv(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "kind,rank,name,value\n\
             file,1,\"b,c.txt\",200\n\
             file,2,a.txt,100\n\
             file,3,d,50\n\
             extension,1,.txt,2\n"
        );
    }

    #[test]
    fn csv_of_empty_report_still_has_header() {
        let mut buf = Vec::new();
        write_csv(&Report::empty(true), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "kind,rank,name,value\n");
    }

    #[test]
    fn csv_header_written_once_for_extension_only_report() {
        let report = Report {
            top_extensions: vec![crate::analysis::ExtensionCount {
                extension: ".txt".into(),
                count: 1,
            }],
            ..Report::empty(false)
        };
        let mut buf = Vec::new();
        write_csv(&report, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "kind,rank,name,value\nextension,1,.txt,1\n"
        );
    }
}
