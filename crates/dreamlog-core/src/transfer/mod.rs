//! Export and import of the dream journal as JSON.
//!
//! Export works on a snapshot supplied by the caller and never touches the
//! store. Import parses the whole file before writing anything, then
//! upserts it; it never deletes dreams missing from the file.

mod export;
mod import;
mod merge;

pub use export::{export_file_name, export_json, write_export, EXPORT_FILE_PREFIX};
pub use import::{import_dreams, parse_import};
pub use merge::merge_imported;
