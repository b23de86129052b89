//! Source table ingestion.
//!
//! An input directory holds one CSV file per exported sheet. This crate
//! finds those files, decodes them and turns each data row into the typed
//! record of its table.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cerif_ingest::{InputTables, ReadOptions};
//!
//! let options = ReadOptions::default().with_delimiter(",")?;
//! let tables = InputTables::load(Path::new("export/2024"), &options)?;
//! ```

mod discovery;
mod error;
mod reader;
mod tables;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{TableKind, discover_tables, list_csv_files};

// === CSV Reading ===
pub use reader::{ReadOptions, decode, read_cells, read_table};

// === Tables ===
pub use tables::InputTables;
