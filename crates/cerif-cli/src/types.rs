use std::path::PathBuf;

use cerif_core::RunReport;
use cerif_ingest::TableKind;
use cerif_report::OutputTarget;

#[derive(Debug)]
pub struct ConvertResult {
    pub input_dir: PathBuf,
    pub output: OutputTarget,
    /// Rows read per table; a missing optional table counts zero.
    pub tables: Vec<(TableKind, usize)>,
    pub report: RunReport,
    /// Size of the rendered document in bytes.
    pub document_bytes: usize,
    /// False for dry runs.
    pub written: bool,
}
