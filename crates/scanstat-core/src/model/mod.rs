/// Data model shared by the aggregator, scanner and renderers.
pub mod file_record;
pub mod size;

pub use file_record::FileRecord;
