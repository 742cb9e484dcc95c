/// Scan a real directory and feed the sealed report through every renderer.
use scanstat_core::export::{render_html, render_table, to_json, write_csv};
use scanstat_core::scanner::{scan_tree, ScanOptions};
use std::fs;
use std::sync::atomic::AtomicBool;
use tempfile::TempDir;

fn scanned_report() -> scanstat_core::Report {
    let tmp = TempDir::new().expect("failed to create temp dir");
    fs::create_dir_all(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/guide.md"), vec![b'x'; 2_048]).unwrap();
    fs::write(tmp.path().join("docs/faq.md"), vec![b'x'; 512]).unwrap();
    fs::write(tmp.path().join("photo.jpg"), vec![0u8; 4_096]).unwrap();

    let cancel = AtomicBool::new(false);
    scan_tree(tmp.path(), &ScanOptions::default(), &cancel, |_| {})
        .unwrap()
        .report
}

#[test]
fn all_renderers_agree_on_content() {
    let report = scanned_report();

    let table = render_table(&report);
    let files_row = table
        .lines()
        .find(|l| l.contains("Files Scanned"))
        .expect("files row missing");
    assert!(files_row.trim_end().ends_with(" 3"));
    assert!(table.contains("photo.jpg (4.0 KB)"));
    assert!(table.contains(".md (2)"));

    let html = render_html(&report);
    assert!(html.contains("<tr><td>Files Scanned</td><td>3</td></tr>"));
    assert!(html.contains("photo.jpg (4.0 KB)<br/>guide.md (2.0 KB)<br/>faq.md (512 B)"));

    let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
    assert_eq!(json["total_bytes"], 6_656);
    assert_eq!(json["top_files"].as_array().map(Vec::len), Some(3));

    let mut buf = Vec::new();
    write_csv(&report, &mut buf).unwrap();
    let csv_text = String::from_utf8(buf).unwrap();
    assert_eq!(csv_text.lines().count(), 1 + 3 + 2);
    assert!(csv_text.contains("file,1,photo.jpg,4096"));
    assert!(csv_text.contains("extension,1,.md,2"));
}
