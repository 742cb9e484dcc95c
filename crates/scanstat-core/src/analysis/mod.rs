/// Analysis modules — the incremental statistics aggregator.
///
/// Leaves first: [`extensions`] counts file extensions, [`top_files`] keeps
/// the K largest files, [`aggregate`] composes both with running totals and
/// seals them into a [`report::Report`].

pub mod aggregate;
pub mod extensions;
pub mod report;
pub mod top_files;

pub use aggregate::ScanAggregate;
pub use extensions::{extension_of, ExtensionCount, ExtensionFrequencyTable};
pub use report::Report;
pub use top_files::BoundedTopKBySize;

/// Default number of largest files retained per scan.
pub const MAX_TOP_FILES: usize = 10;

/// Default number of extensions reported per scan.
pub const MAX_TOP_EXTENSIONS: usize = 5;
