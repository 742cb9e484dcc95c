/// Report renderers.
///
/// Each renderer is a stateless function over a finished [`Report`]; they
/// share the row labels below so the table and HTML views stay in step.
///
/// [`Report`]: crate::analysis::Report
pub mod data;
pub mod html;
pub mod text;

pub use data::{to_json, write_csv};
pub use html::render_html;
pub use text::render_table;

pub(crate) const LABEL_FILES: &str = "Files Scanned";
pub(crate) const LABEL_TOTAL: &str = "Total Size";
pub(crate) const LABEL_AVERAGE: &str = "Average File Size";
pub(crate) const LABEL_EXTENSIONS: &str = "Frequent File Extensions";
pub(crate) const LABEL_BIGGEST: &str = "Biggest Files";
pub(crate) const CANCELLED_NOTICE: &str = "Scan cancelled: partial results";
